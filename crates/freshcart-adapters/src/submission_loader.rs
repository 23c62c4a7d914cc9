//! Reads form submissions from disk.
//!
//! A submission file is one flat table of field names to values, in JSON or
//! TOML:
//!
//! ```toml
//! first_name = "Ada"
//! last_name  = "Lovelace"
//! zip        = 12345          # numbers and booleans are stringified
//! ```
//!
//! `load_dir` walks a directory tree and returns every `.json`/`.toml`
//! submission in path order, so batch output is stable between runs.

use std::{
    fs,
    path::{Path, PathBuf},
};

use freshcart_core::{
    application::ApplicationError, domain::FormSubmission, error::FreshcartResult,
};
use tracing::{debug, instrument};
use walkdir::WalkDir;

/// File formats a submission can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionFormat {
    Json,
    Toml,
}

impl SubmissionFormat {
    /// Pick the format from the file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SubmissionLoader;

impl SubmissionLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load one submission file.
    #[instrument(skip(self, path), fields(path = %path.display()))]
    pub fn load(&self, path: &Path) -> FreshcartResult<FormSubmission> {
        let format =
            SubmissionFormat::from_path(path).ok_or_else(|| ApplicationError::UnsupportedFormat {
                path: path.to_path_buf(),
            })?;

        let text = fs::read_to_string(path).map_err(|e| ApplicationError::SubmissionLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let submission = self.parse(&text, format, path)?;
        debug!(fields = submission.len(), "submission loaded");
        Ok(submission)
    }

    /// Load every submission under `dir`, sorted by path.
    ///
    /// Files with other extensions are skipped.
    #[instrument(skip(self, dir), fields(dir = %dir.display()))]
    pub fn load_dir(&self, dir: &Path) -> FreshcartResult<Vec<(PathBuf, FormSubmission)>> {
        if !dir.is_dir() {
            return Err(ApplicationError::SubmissionLoad {
                path: dir.to_path_buf(),
                reason: "not a directory".into(),
            }
            .into());
        }

        let mut submissions = Vec::new();
        for entry in WalkDir::new(dir).min_depth(1).sort_by_file_name() {
            let entry = entry.map_err(|e| ApplicationError::SubmissionLoad {
                path: e.path().unwrap_or(dir).to_path_buf(),
                reason: e.to_string(),
            })?;

            let path = entry.path();
            if !entry.file_type().is_file() {
                continue;
            }
            if SubmissionFormat::from_path(path).is_none() {
                debug!(path = %path.display(), "skipping non-submission file");
                continue;
            }

            submissions.push((path.to_path_buf(), self.load(path)?));
        }

        debug!(count = submissions.len(), "directory loaded");
        Ok(submissions)
    }

    /// Parse submission text. `origin` only labels errors.
    pub fn parse(
        &self,
        text: &str,
        format: SubmissionFormat,
        origin: &Path,
    ) -> FreshcartResult<FormSubmission> {
        let parse_error = |reason: String| ApplicationError::SubmissionParse {
            path: origin.to_path_buf(),
            reason,
        };

        let mut submission = FormSubmission::new();
        match format {
            SubmissionFormat::Json => {
                let value: serde_json::Value =
                    serde_json::from_str(text).map_err(|e| parse_error(e.to_string()))?;
                let object = value
                    .as_object()
                    .ok_or_else(|| parse_error("top level must be an object".into()))?;
                for (key, value) in object {
                    let value = json_scalar(value).ok_or_else(|| {
                        parse_error(format!("'{key}' must be a string, number or boolean"))
                    })?;
                    submission.insert(key.clone(), value);
                }
            }
            SubmissionFormat::Toml => {
                let table: toml::Table =
                    toml::from_str(text).map_err(|e| parse_error(e.to_string()))?;
                for (key, value) in table {
                    let value = toml_scalar(&value).ok_or_else(|| {
                        parse_error(format!("'{key}' must be a string, number or boolean"))
                    })?;
                    submission.insert(key, value);
                }
            }
        }

        Ok(submission)
    }
}

fn json_scalar(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn toml_scalar(value: &toml::Value) -> Option<String> {
    match value {
        toml::Value::String(s) => Some(s.clone()),
        toml::Value::Integer(i) => Some(i.to_string()),
        toml::Value::Float(f) => Some(f.to_string()),
        toml::Value::Boolean(b) => Some(b.to_string()),
        _ => None,
    }
}
