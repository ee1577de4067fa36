use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;

/// Base schemaform config directory (~/.config/schemaform/ on Unix-like systems)
pub fn schemaform() -> Result<PathBuf> {
    #[cfg(windows)]
    {
        let appdata = env::var("APPDATA").map_err(|_| {
            Error::internal_unexpected(
                "APPDATA environment variable not set on Windows".to_string(),
            )
        })?;
        Ok(PathBuf::from(appdata).join("schemaform"))
    }

    #[cfg(not(windows))]
    {
        let home = env::var("HOME").map_err(|_| {
            Error::internal_unexpected(
                "HOME environment variable not set on Unix-like system".to_string(),
            )
        })?;
        Ok(PathBuf::from(home).join(".config").join("schemaform"))
    }
}

/// Global schemaform.json config file path
pub fn schemaform_json() -> Result<PathBuf> {
    Ok(schemaform()?.join("schemaform.json"))
}
