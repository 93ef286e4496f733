pub mod collapsed;
pub mod json;

use crate::model::ProfileData;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("collapsed: {0}")]
    Collapsed(#[from] collapsed::CollapsedParseError),
    #[error("json: {0}")]
    Json(#[from] json::JsonParseError),
    #[error("unable to detect format")]
    UnknownFormat,
}

/// Auto-detect the profile format and parse it.
///
/// Detection strategy:
/// 1. A JSON object with a `threads` key is the native profile dump.
/// 2. Anything else is tried as collapsed/folded stacks (the most
///    permissive text format).
pub fn parse_auto(data: &[u8]) -> Result<ProfileData, ParseError> {
    if let Ok(value) = serde_json::from_slice::<serde_json::Value>(data) {
        if value
            .as_object()
            .is_some_and(|obj| obj.contains_key("threads"))
        {
            return Ok(json::parse_json(data)?);
        }
        // Valid JSON that is not a profile dump — never misread it as
        // folded stacks.
        return Err(ParseError::UnknownFormat);
    }

    if let Ok(profile) = collapsed::parse_collapsed(data) {
        return Ok(profile);
    }

    Err(ParseError::UnknownFormat)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ProfileMetadata, ThreadRecord};

    #[test]
    fn detects_native_json() {
        let profile = ProfileData {
            metadata: ProfileMetadata {
                name: None,
                measure: "wall_time".to_string(),
                format: "json".to_string(),
            },
            threads: vec![ThreadRecord {
                id: 0,
                methods: Vec::new(),
                edges: Vec::new(),
            }],
        };
        let encoded = serde_json::to_vec(&profile).unwrap();
        let parsed = parse_auto(&encoded).unwrap();
        assert_eq!(parsed.metadata.format, "json");
    }

    #[test]
    fn falls_back_to_collapsed_text() {
        let parsed = parse_auto(b"main;foo 5\n").unwrap();
        assert_eq!(parsed.metadata.format, "collapsed");
    }

    #[test]
    fn unknown_input_is_an_error() {
        assert!(matches!(parse_auto(b""), Err(ParseError::UnknownFormat)));
    }
}
