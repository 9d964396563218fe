use std::fmt;

use crate::ModelError;

/// Canonical symptom identifier.
///
/// Rendered as `SYM_` followed by 8 uppercase hex characters (the first
/// 4 bytes of a SHA-256 digest of the canonical name). The truncated
/// digest keeps ids short and deterministic at the cost of a documented
/// 32-bit collision probability.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct SymptomId(String);

impl SymptomId {
    pub const PREFIX: &'static str = "SYM_";

    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ModelError::InvalidSymptomId(value));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Build an id from the leading bytes of a SHA-256 digest.
    pub fn from_digest_prefix(digest: &[u8; 32]) -> Self {
        Self(format!(
            "{}{}",
            Self::PREFIX,
            hex::encode_upper(&digest[..4])
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SymptomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Disease identifier as supplied by the raw knowledge base.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct DiseaseId(String);

impl DiseaseId {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ModelError::InvalidDiseaseId(value));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DiseaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symptom_id_rejects_empty() {
        assert!(SymptomId::new("").is_err());
        assert!(SymptomId::new("   ").is_err());
    }

    #[test]
    fn symptom_id_from_digest_prefix_renders_fixed_width() {
        let digest = [0xABu8; 32];
        let id = SymptomId::from_digest_prefix(&digest);
        assert_eq!(id.as_str(), "SYM_ABABABAB");
    }

    #[test]
    fn disease_id_trims_whitespace() {
        let id = DiseaseId::new(" D001 ").unwrap();
        assert_eq!(id.as_str(), "D001");
    }

    #[test]
    fn ids_serialize_as_plain_strings() {
        let id = SymptomId::new("SYM_0A0B0C0D").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"SYM_0A0B0C0D\"");
    }
}
