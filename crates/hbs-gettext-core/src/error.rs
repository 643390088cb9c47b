use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("every keyword must have a msgid key, but \"{keyword}\" doesn't have one")]
    MissingMsgid { keyword: String },
    #[error("keyword \"{keyword}\" lists {count} argument positions, at most 2 are allowed")]
    TooManyPositions { keyword: String, count: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("no context specified for msgid \"{msgid}\"")]
    MissingContext { msgid: String },
    #[error("context must be a string literal for msgid \"{msgid}\"")]
    ContextNotLiteral { msgid: String },
    #[error("no plural specified for msgid \"{msgid}\"")]
    MissingPlural { msgid: String },
    #[error("plural must be a string literal for msgid \"{msgid}\"")]
    PluralNotLiteral { msgid: String },
    #[error("incompatible plural definitions for msgid \"{msgid}\" (seen \"{seen}\" and \"{found}\")")]
    IncompatiblePlurals {
        msgid: String,
        seen: String,
        found: String,
    },
}

impl ExtractError {
    pub fn msgid(&self) -> &str {
        match self {
            ExtractError::MissingContext { msgid }
            | ExtractError::ContextNotLiteral { msgid }
            | ExtractError::MissingPlural { msgid }
            | ExtractError::PluralNotLiteral { msgid }
            | ExtractError::IncompatiblePlurals { msgid, .. } => msgid,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("extract error: {0}")]
    Extract(#[from] ExtractError),
}

pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::{ConfigError, CoreError, ExtractError};

    #[test]
    fn display_formats_missing_msgid() {
        let err = ConfigError::MissingMsgid {
            keyword: "n_".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "every keyword must have a msgid key, but \"n_\" doesn't have one"
        );
    }

    #[test]
    fn display_formats_incompatible_plurals() {
        let err = ExtractError::IncompatiblePlurals {
            msgid: "cat".to_string(),
            seen: "cats".to_string(),
            found: "dogs".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "incompatible plural definitions for msgid \"cat\" (seen \"cats\" and \"dogs\")"
        );
        assert_eq!(err.msgid(), "cat");
    }

    #[test]
    fn core_error_wraps_both_kinds() {
        let err = CoreError::from(ExtractError::MissingContext {
            msgid: "File".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "extract error: no context specified for msgid \"File\""
        );
        let err = CoreError::from(ConfigError::TooManyPositions {
            keyword: "_".to_string(),
            count: 3,
        });
        assert!(err.to_string().starts_with("config error: "));
    }
}
