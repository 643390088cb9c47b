use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use hbs_gettext_core::{Catalog, ExtractError, Extractor};
use thiserror::Error;

use crate::template_source::{TemplateSourceError, parse_template};

#[derive(Debug, Error)]
pub enum ExtractPipelineError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{}: {source}", path.display())]
    Syntax {
        path: PathBuf,
        #[source]
        source: TemplateSourceError,
    },
    #[error("{}: {source}", path.display())]
    Extract {
        path: PathBuf,
        #[source]
        source: ExtractError,
    },
}

/// One catalog per template, keyed by the template's path.
#[derive(Debug, Default)]
pub struct ExtractOutput {
    pub catalogs: BTreeMap<String, Catalog>,
}

impl ExtractOutput {
    pub fn message_count(&self) -> usize {
        self.catalogs.values().map(Catalog::len).sum()
    }
}

pub fn collect_template_files(
    roots: &[PathBuf],
    extensions: &[String],
) -> Result<Vec<PathBuf>, ExtractPipelineError> {
    let mut files = Vec::new();
    for root in roots {
        collect_template_files_inner(root, extensions, &mut files)?;
    }
    files.sort();
    Ok(files)
}

pub fn extract_from_sources(
    roots: &[PathBuf],
    extensions: &[String],
    extractor: &Extractor,
) -> Result<ExtractOutput, ExtractPipelineError> {
    let files = collect_template_files(roots, extensions)?;
    extract_from_files(&files, extractor)
}

pub fn extract_from_files(
    files: &[PathBuf],
    extractor: &Extractor,
) -> Result<ExtractOutput, ExtractPipelineError> {
    let mut output = ExtractOutput::default();
    for path in files {
        log::debug!("extracting messages from {}", path.display());
        let contents = fs::read_to_string(path)?;
        let catalog = extract_from_str(&contents, extractor, path)?;
        output.catalogs.insert(path.display().to_string(), catalog);
    }
    Ok(output)
}

pub fn extract_from_str(
    contents: &str,
    extractor: &Extractor,
    path: &Path,
) -> Result<Catalog, ExtractPipelineError> {
    let program = parse_template(contents).map_err(|source| ExtractPipelineError::Syntax {
        path: path.to_path_buf(),
        source,
    })?;
    extractor
        .parse(&program)
        .map_err(|source| ExtractPipelineError::Extract {
            path: path.to_path_buf(),
            source,
        })
}

fn collect_template_files_inner(
    root: &Path,
    extensions: &[String],
    files: &mut Vec<PathBuf>,
) -> Result<(), ExtractPipelineError> {
    if root.is_file() {
        if has_template_extension(root, extensions) {
            files.push(root.to_path_buf());
        }
        return Ok(());
    }
    if should_skip_dir(root) {
        return Ok(());
    }
    for entry in fs::read_dir(root)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            collect_template_files_inner(&path, extensions, files)?;
        } else if has_template_extension(&path, extensions) {
            files.push(path);
        }
    }
    Ok(())
}

fn has_template_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|wanted| wanted == ext))
}

fn should_skip_dir(path: &Path) -> bool {
    matches!(
        path.file_name().and_then(|name| name.to_str()),
        Some(".git") | Some("target") | Some("node_modules")
    )
}
