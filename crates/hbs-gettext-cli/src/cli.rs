use std::path::PathBuf;

use thiserror::Error;

use crate::command_extract::{ExtractCommandError, ExtractOptions, run_extract};
use crate::command_keywords::{KeywordsOptions, run_keywords};
use crate::config::DEFAULT_CONFIG_PATH;
use crate::error::CliError;

#[derive(Debug, Error)]
pub enum CliAppError {
    #[error("{0}")]
    Usage(String),
    #[error(transparent)]
    Extract(#[from] ExtractCommandError),
    #[error(transparent)]
    Keywords(#[from] CliError),
}

#[derive(Debug, Clone)]
pub enum Command {
    Extract(ExtractOptions),
    Keywords(KeywordsOptions),
}

pub fn run() -> Result<(), CliAppError> {
    match parse_command(std::env::args().skip(1).collect())? {
        Command::Extract(options) => {
            run_extract(&options)?;
        }
        Command::Keywords(options) => {
            run_keywords(&options)?;
        }
    }
    Ok(())
}

pub fn parse_command(args: Vec<String>) -> Result<Command, CliAppError> {
    let mut args = args.into_iter();
    let command = args.next().ok_or_else(|| CliAppError::Usage(usage()))?;
    match command.as_str() {
        "extract" => Ok(Command::Extract(parse_extract_options(args.collect())?)),
        "keywords" => Ok(Command::Keywords(parse_keywords_options(args.collect())?)),
        _ => Err(CliAppError::Usage(usage())),
    }
}

fn parse_extract_options(args: Vec<String>) -> Result<ExtractOptions, CliAppError> {
    let mut roots = Vec::new();
    let mut out_path = None;
    let mut config_path = PathBuf::from(DEFAULT_CONFIG_PATH);
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--root" => roots.push(PathBuf::from(next_value("--root", &mut iter)?)),
            "--out" => out_path = Some(PathBuf::from(next_value("--out", &mut iter)?)),
            "--config" => config_path = PathBuf::from(next_value("--config", &mut iter)?),
            "--help" | "-h" => return Err(CliAppError::Usage(usage())),
            _ => return Err(CliAppError::Usage(usage())),
        }
    }
    if roots.is_empty() {
        return Err(CliAppError::Usage(usage()));
    }
    Ok(ExtractOptions {
        roots,
        out_path,
        config_path,
    })
}

fn parse_keywords_options(args: Vec<String>) -> Result<KeywordsOptions, CliAppError> {
    let mut config_path = PathBuf::from(DEFAULT_CONFIG_PATH);
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => config_path = PathBuf::from(next_value("--config", &mut iter)?),
            "--help" | "-h" => return Err(CliAppError::Usage(usage())),
            _ => return Err(CliAppError::Usage(usage())),
        }
    }
    Ok(KeywordsOptions { config_path })
}

fn next_value(flag: &str, iter: &mut impl Iterator<Item = String>) -> Result<String, CliAppError> {
    iter.next()
        .ok_or_else(|| CliAppError::Usage(format!("{flag} requires a value\n\n{}", usage())))
}

fn usage() -> String {
    "usage: hbs-gettext extract --root <path> [--root <path>...] [--out <file>] [--config <path>]\n       hbs-gettext keywords [--config <path>]".to_string()
}
