//! Language tag for script jobs.

use serde::{Deserialize, Serialize};

use crate::error::JobError;

/// Interpreter/dialect used to run non-command job content.
///
/// The integer codes are part of the persisted record format and must never
/// be renumbered; records are stored with the code, not the name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Language {
    /// No interpreter; used for literal command jobs.
    None,
    Shell,
    Python,
    Lua,
    JavaScript,
}

impl Language {
    /// The wire-stable integer code for this language.
    pub fn code(self) -> u8 {
        match self {
            Language::None => 0,
            Language::Shell => 1,
            Language::Python => 2,
            Language::Lua => 3,
            Language::JavaScript => 4,
        }
    }
}

impl From<Language> for u8 {
    fn from(lang: Language) -> Self {
        lang.code()
    }
}

impl TryFrom<u8> for Language {
    type Error = JobError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Language::None),
            1 => Ok(Language::Shell),
            2 => Ok(Language::Python),
            3 => Ok(Language::Lua),
            4 => Ok(Language::JavaScript),
            other => Err(JobError::invalid_field(
                "lang",
                format!("unknown language code {other}"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(Language::None.code(), 0);
        assert_eq!(Language::Shell.code(), 1);
        assert_eq!(Language::Python.code(), 2);
        assert_eq!(Language::Lua.code(), 3);
        assert_eq!(Language::JavaScript.code(), 4);
    }

    #[test]
    fn serializes_as_integer_code() {
        let json = serde_json::to_string(&Language::Python).unwrap();
        assert_eq!(json, "2");

        let lang: Language = serde_json::from_str("2").unwrap();
        assert_eq!(lang, Language::Python);
    }

    #[test]
    fn unknown_code_is_rejected() {
        let err = Language::try_from(42).unwrap_err();
        assert!(matches!(err, JobError::InvalidField { field: "lang", .. }));

        assert!(serde_json::from_str::<Language>("42").is_err());
    }
}
