//! Script generation tool for the MCP server

use schemars::JsonSchema;
use serde::Deserialize;

/// Request for generating a SolidWorks script
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SolidgenRequest {
    /// Description of the part or drawing to create.
    ///
    /// Example: "a 40x20x5mm aluminium plate with four M4 holes 3mm from each corner"
    pub user_request: String,
}
