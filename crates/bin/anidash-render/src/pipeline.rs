//! Read a statistics snapshot, render the dashboard, write the document.

use std::path::{Path, PathBuf};

use anidash_adapter_dashboard_leptos::{
    DocumentError, DocumentOptions, STYLESHEET, render_document,
};
use anidash_domain::dashboard::DashboardStats;
use anidash_domain::error::AnidashError;

use crate::config::{ConfigError, RenderConfig, STYLESHEET_FILE};

/// Rendering errors.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("invalid configuration")]
    Config(#[from] ConfigError),
    #[error("failed to read statistics from {path}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode statistics")]
    Decode(#[from] serde_json::Error),
    #[error("statistics snapshot is invalid")]
    Invalid(#[from] AnidashError),
    #[error("failed to render document")]
    Document(#[from] DocumentError),
    #[error("failed to write {path}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Files produced by a run.
#[derive(Debug)]
pub struct Rendered {
    pub document: PathBuf,
    pub stylesheet: Option<PathBuf>,
}

fn load_stats(path: &Path) -> Result<DashboardStats, RenderError> {
    let content = std::fs::read_to_string(path).map_err(|source| RenderError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    let stats: DashboardStats = serde_json::from_str(&content)?;
    stats.validate()?;
    Ok(stats)
}

fn write(path: &Path, content: &str) -> Result<(), RenderError> {
    let to_error = |source| RenderError::WriteOutput {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(to_error)?;
    }
    std::fs::write(path, content).map_err(to_error)
}

/// Render the dashboard described by `config` to disk.
///
/// # Errors
///
/// Returns a [`RenderError`] when the snapshot cannot be read, decoded or
/// validated, or when an output file cannot be written.
pub fn run(config: &RenderConfig) -> Result<Rendered, RenderError> {
    let stats = match config
        .input
        .as_deref()
        .filter(|path| !path.as_os_str().is_empty())
    {
        Some(path) => {
            tracing::info!(input = %path.display(), "loading statistics");
            Some(load_stats(path)?)
        }
        None => {
            tracing::info!("no statistics input configured, rendering loading state");
            None
        }
    };

    let options = DocumentOptions {
        mode: config.theme_mode()?,
        title: config.title.clone(),
        stylesheet: config
            .write_stylesheet
            .then(|| STYLESHEET_FILE.to_string()),
    };
    let html = render_document(stats, &options)?;
    write(&config.output, &html)?;
    tracing::info!(output = %config.output.display(), bytes = html.len(), "document written");

    let stylesheet = if config.write_stylesheet {
        let path = config.stylesheet_path();
        write(&path, STYLESHEET)?;
        tracing::debug!(path = %path.display(), "stylesheet written");
        Some(path)
    } else {
        None
    };

    Ok(Rendered {
        document: config.output.clone(),
        stylesheet,
    })
}
