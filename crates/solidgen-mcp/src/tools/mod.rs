//! MCP tool request types for SolidGen
//!
//! - Script generation (solidgen)

pub mod solidgen;
