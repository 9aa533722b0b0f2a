//! Run `pdftotext -layout` and return its text output.
//!
//! pdftotext (poppler) does the actual page-to-text work; this crate only
//! wraps the process invocation. `-layout` preserves the physical layout,
//! which the classifier relies on for its indentation rules.

use std::path::Path;
use std::process::Command;

use reflow_core::error::{ReflowError, Result};

/// Extract layout-preserving text from a PDF with `pdftotext -layout`.
pub fn extract_text(pdf_path: &Path) -> Result<String> {
    // Check that pdftotext is available
    let which = Command::new("which")
        .arg("pdftotext")
        .output()
        .map_err(|e| ReflowError::Tool(format!("Failed to check for pdftotext: {}", e)))?;

    if !which.status.success() {
        return Err(ReflowError::ToolMissing);
    }

    let tmp_dir = tempfile::TempDir::new()
        .map_err(|e| ReflowError::Tool(format!("Failed to create temp dir: {}", e)))?;
    let txt_path = tmp_dir.path().join("output.txt");

    log::info!("Running pdftotext -layout on {}...", pdf_path.display());

    let output = Command::new("pdftotext")
        .arg("-layout")
        .arg("-enc")
        .arg("UTF-8")
        .arg(pdf_path.as_os_str())
        .arg(txt_path.as_os_str())
        .output()
        .map_err(|e| ReflowError::Tool(format!("Failed to run pdftotext: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ReflowError::Tool(format!("pdftotext failed: {}", stderr)));
    }

    let text = std::fs::read_to_string(&txt_path).map_err(|e| {
        ReflowError::Tool(format!(
            "Failed to read pdftotext output at {}: {}",
            txt_path.display(),
            e
        ))
    })?;

    log::info!("pdftotext: {} lines extracted", text.lines().count());

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_missing_message_names_poppler() {
        let msg = ReflowError::ToolMissing.to_string();
        assert!(msg.contains("pdftotext"));
        assert!(msg.contains("poppler"));
    }
}
