use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use hbs_gettext_core::{KeywordPositions, KeywordSpec};
use serde::Deserialize;

use crate::error::CliError;

pub const DEFAULT_CONFIG_PATH: &str = "hbs-gettext.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct CliConfig {
    /// Replaces the built-in keyword table when present.
    #[serde(default)]
    pub keywords: Option<BTreeMap<String, KeywordPositions>>,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            keywords: None,
            extensions: default_extensions(),
        }
    }
}

impl CliConfig {
    pub fn keyword_spec(&self) -> Result<KeywordSpec, CliError> {
        match &self.keywords {
            Some(keywords) => Ok(KeywordSpec::from_positions(keywords.clone())?),
            None => Ok(KeywordSpec::default()),
        }
    }
}

fn default_extensions() -> Vec<String> {
    vec!["hbs".to_string(), "handlebars".to_string()]
}

pub fn load_config(path: &Path) -> Result<CliConfig, CliError> {
    let contents = fs::read_to_string(path)?;
    let config = toml::from_str(&contents)?;
    Ok(config)
}

pub fn load_config_or_default(path: &Path) -> Result<CliConfig, CliError> {
    if path.exists() {
        load_config(path)
    } else {
        Ok(CliConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::{CliConfig, load_config_or_default};
    use crate::error::CliError;
    use hbs_gettext_core::{MSGCTXT, MSGID_PLURAL};
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_path(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time")
            .as_nanos();
        path.push(format!("hbs_gettext_{name}_{nanos}.toml"));
        path
    }

    #[test]
    fn uses_default_when_missing() {
        let path = temp_path("missing");
        let config = load_config_or_default(&path).expect("config");
        assert_eq!(config.extensions, vec!["hbs", "handlebars"]);
        let spec = config.keyword_spec().expect("spec");
        assert!(spec.contains("gettext"));
        assert!(spec.contains("dpgettext"));
    }

    #[test]
    fn loads_keywords_in_every_shape() {
        let path = temp_path("keywords");
        let contents = r#"
extensions = ["hbs"]

[keywords]
_ = [0]
n_ = ["msgid", "msgid_plural"]
p_ = { msgctxt = 0, msgid = 1 }
"#;
        fs::write(&path, contents).expect("write");
        let config = load_config_or_default(&path).expect("config");
        assert_eq!(config.extensions, vec!["hbs"]);
        let spec = config.keyword_spec().expect("spec");
        assert_eq!(spec.len(), 3);
        assert!(!spec.contains("gettext"));
        assert_eq!(spec.get("n_").expect("n_").get(MSGID_PLURAL), Some(1));
        assert_eq!(spec.get("p_").expect("p_").get(MSGCTXT), Some(0));
        fs::remove_file(&path).ok();
    }

    #[test]
    fn reports_keyword_without_msgid() {
        let path = temp_path("bad_keywords");
        fs::write(&path, "[keywords]\nx = { msgctxt = 0 }\n").expect("write");
        let config = load_config_or_default(&path).expect("config");
        let err = config.keyword_spec().expect_err("invalid");
        assert!(matches!(err, CliError::Keyword(_)));
        fs::remove_file(&path).ok();
    }

    #[test]
    fn default_values_are_stable() {
        let config = CliConfig::default();
        assert!(config.keywords.is_none());
        assert_eq!(config.extensions.len(), 2);
    }
}
