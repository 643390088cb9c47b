use std::path::PathBuf;

use hbs_gettext_core::Extractor;
use thiserror::Error;

use crate::artifacts::{print_json, write_catalogs};
use crate::config::load_config_or_default;
use crate::extract_pipeline::{ExtractOutput, ExtractPipelineError, extract_from_sources};

#[derive(Debug, Error)]
pub enum ExtractCommandError {
    #[error(transparent)]
    Cli(#[from] crate::error::CliError),
    #[error(transparent)]
    Pipeline(#[from] ExtractPipelineError),
}

#[derive(Debug, Clone)]
pub struct ExtractOptions {
    pub roots: Vec<PathBuf>,
    pub out_path: Option<PathBuf>,
    pub config_path: PathBuf,
}

pub fn run_extract(options: &ExtractOptions) -> Result<ExtractOutput, ExtractCommandError> {
    let config = load_config_or_default(&options.config_path)?;
    let extractor = Extractor::new(config.keyword_spec()?);

    let output = extract_from_sources(&options.roots, &config.extensions, &extractor)?;
    log::info!(
        "extracted {} messages from {} templates",
        output.message_count(),
        output.catalogs.len()
    );

    match &options.out_path {
        Some(path) => write_catalogs(path, &output.catalogs)?,
        None => print_json(&output.catalogs)?,
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::{ExtractCommandError, ExtractOptions, run_extract};
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_dir() -> PathBuf {
        let mut path = std::env::temp_dir();
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time")
            .as_nanos();
        path.push(format!("hbs_gettext_extract_cmd_{nanos}"));
        fs::create_dir_all(&path).expect("dir");
        path
    }

    #[test]
    fn runs_extract_and_writes_outputs() {
        let dir = temp_dir();
        let views = dir.join("views");
        fs::create_dir_all(&views).expect("views dir");
        fs::write(views.join("index.hbs"), "{{t \"Hello\"}}\n{{t \"Hello\"}}").expect("src");

        let config_path = dir.join("hbs-gettext.toml");
        fs::write(&config_path, "[keywords]\nt = [0]\n").expect("config");

        let out_path = dir.join("out").join("messages.json");
        let options = ExtractOptions {
            roots: vec![views],
            out_path: Some(out_path.clone()),
            config_path,
        };

        let output = run_extract(&options).expect("run");
        assert_eq!(output.message_count(), 1);
        let catalog = output.catalogs.values().next().expect("catalog");
        assert_eq!(catalog.get("Hello").expect("record").line, vec![1, 2]);
        assert!(out_path.exists());

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn invalid_keywords_fail_before_scanning() {
        let dir = temp_dir();
        let config_path = dir.join("hbs-gettext.toml");
        fs::write(&config_path, "[keywords]\nt = [0, 1, 2]\n").expect("config");

        let options = ExtractOptions {
            roots: vec![dir.clone()],
            out_path: Some(dir.join("messages.json")),
            config_path,
        };
        let err = run_extract(&options).expect_err("config");
        assert!(matches!(err, ExtractCommandError::Cli(_)));

        fs::remove_dir_all(&dir).ok();
    }
}
