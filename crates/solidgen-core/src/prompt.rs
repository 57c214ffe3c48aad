//! Prompt template for SolidWorks script generation
//!
//! The template is fixed text with three slots: the user's request, the
//! SolidWorks part template path, and the directory the generated script
//! saves into. The request is embedded verbatim; nothing is escaped.

use serde::{Deserialize, Serialize};

/// Configurable constants baked into the generated script's requirements
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    /// Default value of `create_part`'s `templatePart` argument
    pub template_part: String,
    /// Directory `save_part` writes the `.SLDPRT` file into
    pub save_dir: String,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            template_part: r"C:\ProgramData\SolidWorks\SOLIDWORKS 2023\templates\Part.prtdot"
                .to_string(),
            save_dir: r"C:\Users\Admin\Documents".to_string(),
        }
    }
}

/// Render the LLM prompt for a user's part request
pub fn render_prompt(request: &str, config: &PromptConfig) -> String {
    format!(
        r#"You are an expert Python programmer specializing in SolidWorks automation using pywin32.
The user wants to draw a part in SolidWorks. Their specific request is:
'{request}'

Your task is to generate a complete, runnable Python script to achieve this.
The script must:
1. Include all necessary imports: `datetime`, `math`, `os`, `pythoncom`, `win32com.client`.
2. Define a function `create_part(templatePart)` that initializes the SolidWorks application and creates a new part document. It should return the `modelDoc` object. The default `templatePart` should be `"{template_part}"`.
3. Define a function `save_part(modelDoc)` that saves the part to `"{save_dir}"` with a timestamped filename like `part_YYYYMMDD_HHMMSS.SLDPRT`.
4. Contain the main SolidWorks automation logic to draw the part requested by the user. This logic should use the `modelDoc` obtained from `create_part`.
5. Call `create_part()` at the beginning of the main logic and `save_part(modelDoc)` at the end of the script.

IMPORTANT: Only output the Python code itself, enclosed in a single markdown code block starting with ```python and ending with ```. Do not include any other text, explanations, or introductory/concluding remarks outside the code block.
For example:
```python
# Your generated python code here
# ...
# save_part(modelDoc)
```
"#,
        request = request,
        template_part = config.template_part,
        save_dir = config.save_dir,
    )
}
