use std::fs;
use std::io::{self, Read};
use std::path::Path;

use tracing::debug;

use crate::error::Result;

/// Read a model narrative from a file, or from stdin when no path is given.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected, so any
/// readable input yields some narrative.
pub fn read_narrative(path: Option<&Path>) -> Result<String> {
    let bytes = match path {
        Some(p) => fs::read(p)?,
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            buf
        }
    };
    debug!(bytes = bytes.len(), from_file = path.is_some(), "read narrative");
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
