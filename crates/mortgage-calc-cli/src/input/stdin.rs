use serde::de::DeserializeOwned;
use std::io::{self, Read};

/// Deserialise loan JSON piped on stdin.
///
/// Returns `None` when stdin is a terminal or nothing was piped, so callers
/// can fall back to flags.
pub fn read_piped<T: DeserializeOwned>() -> Result<Option<T>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;

    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let value = serde_json::from_str(trimmed)
        .map_err(|e| format!("Failed to parse loan JSON from stdin: {e}"))?;
    Ok(Some(value))
}
