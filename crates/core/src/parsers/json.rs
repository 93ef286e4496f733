use thiserror::Error;

use crate::model::ProfileData;

#[derive(Debug, Error)]
pub enum JsonParseError {
    #[error("invalid profile document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse the native JSON dump of a [`ProfileData`], as produced by
/// instrumented runtimes (or `serde_json::to_string` on a profile).
pub fn parse_json(data: &[u8]) -> Result<ProfileData, JsonParseError> {
    Ok(serde_json::from_slice(data)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ProfileMetadata, ThreadRecord};

    #[test]
    fn round_trips_a_profile() {
        let profile = ProfileData {
            metadata: ProfileMetadata {
                name: Some("bench".to_string()),
                measure: "wall_time".to_string(),
                format: "json".to_string(),
            },
            threads: vec![ThreadRecord {
                id: 3,
                methods: Vec::new(),
                edges: Vec::new(),
            }],
        };

        let encoded = serde_json::to_vec(&profile).unwrap();
        let decoded = parse_json(&encoded).unwrap();
        assert_eq!(decoded.metadata.name.as_deref(), Some("bench"));
        assert_eq!(decoded.threads.len(), 1);
        assert_eq!(decoded.threads[0].id, 3);
    }

    #[test]
    fn rejects_malformed_documents() {
        assert!(parse_json(b"{\"not\": \"a profile\"}").is_err());
        assert!(parse_json(b"[1, 2, 3]").is_err());
    }
}
