//! Reading the document to verify.

use std::io::Read;
use std::path::Path;

use veritas_core::errors::InputError;

/// Document text plus the name it came from.
pub struct Input {
    pub content: String,
    pub filename: Option<String>,
}

/// Read from `path`, or from stdin when `stdin` is set.
pub fn read(path: Option<&Path>, stdin: bool) -> Result<Input, InputError> {
    if stdin {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| InputError::Unreadable {
                path: "<stdin>".to_string(),
                reason: e.to_string(),
            })?;
        return Ok(Input {
            content,
            filename: None,
        });
    }

    let path = path.ok_or(InputError::NoInput)?;
    read_file(path)
}

pub fn read_file(path: &Path) -> Result<Input, InputError> {
    if !path.exists() {
        return Err(InputError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    let content = std::fs::read_to_string(path).map_err(|e| InputError::Unreadable {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    Ok(Input {
        content,
        filename: Some(path.display().to_string()),
    })
}
