//! Parsing command-line strings into monoid values

use crate::error::{MonoidalError, Result};

pub fn parse_int(raw: &str) -> Result<i64> {
    raw.trim().parse().map_err(|_| MonoidalError::Parse {
        value: raw.to_string(),
        expected: "integer",
    })
}

pub fn parse_bool(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "t" | "yes" | "1" => Ok(true),
        "false" | "f" | "no" | "0" => Ok(false),
        _ => Err(MonoidalError::Parse {
            value: raw.to_string(),
            expected: "boolean",
        }),
    }
}

pub fn parse_string(raw: &str) -> Result<String> {
    Ok(raw.to_string())
}

/// A JSON array of integers, e.g. `[1, 2]`.
pub fn parse_int_list(raw: &str) -> Result<Vec<i64>> {
    serde_json::from_str(raw).map_err(|_| MonoidalError::Parse {
        value: raw.to_string(),
        expected: "JSON array of integers",
    })
}
