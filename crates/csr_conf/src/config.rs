use std::path::Path;
use serde::Deserialize;
use crate::{CsrConfResult, template::SubjectProfile, validate::Policy};

/// Optional JSON profile. Absent fields fall back to the built-in template.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CsrConfConfig {
    pub policy: Option<Policy>,
    pub subject: SubjectProfile,
}

impl CsrConfConfig {
    pub fn load_from_file(path: &Path) -> CsrConfResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use super::*;
    use crate::error::CsrConfError;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn empty_object_is_default() {
        let file = write_config("{}");
        let config = CsrConfConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config, CsrConfConfig::default());
        assert_eq!(config.subject, SubjectProfile::default());
    }

    #[test]
    fn partial_subject_keeps_other_defaults() {
        let file = write_config(r#"{ "policy": "strict", "subject": { "default_bits": 4096, "locality": "Augsburg" } }"#);
        let config = CsrConfConfig::load_from_file(file.path()).unwrap();

        assert_eq!(config.policy, Some(Policy::Strict));
        assert_eq!(config.subject.default_bits, 4096);
        assert_eq!(config.subject.locality, "Augsburg");
        assert_eq!(config.subject.country, "DE");
        assert_eq!(config.subject.default_md, "sha256");
    }

    #[test]
    fn unknown_policy_is_a_parse_error() {
        let file = write_config(r#"{ "policy": "lenient" }"#);
        let err = CsrConfConfig::load_from_file(file.path()).unwrap_err();
        assert!(matches!(err, CsrConfError::ConfigParse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CsrConfConfig::load_from_file(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, CsrConfError::Io(_)));
    }
}
