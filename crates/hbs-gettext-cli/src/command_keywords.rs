use std::path::PathBuf;

use hbs_gettext_core::KeywordSpec;

use crate::artifacts::print_json;
use crate::config::load_config_or_default;
use crate::error::CliError;

#[derive(Debug, Clone)]
pub struct KeywordsOptions {
    pub config_path: PathBuf,
}

/// Prints the normalized keyword table.
pub fn run_keywords(options: &KeywordsOptions) -> Result<KeywordSpec, CliError> {
    let config = load_config_or_default(&options.config_path)?;
    let spec = config.keyword_spec()?;
    print_json(&spec)?;
    Ok(spec)
}
