//! # anidash-render — static dashboard renderer
//!
//! Composition root that turns a statistics snapshot into an HTML page.
//!
//! ## Responsibilities
//! - Load configuration (config file, env vars)
//! - Initialise logging
//! - Read and validate the statistics snapshot
//! - Render the themed dashboard and write it with its stylesheet
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;
mod pipeline;

use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = config::Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .with_writer(std::io::stderr)
        .init();

    let rendered = pipeline::run(&config.render)?;
    tracing::info!(
        document = %rendered.document.display(),
        stylesheet = ?rendered.stylesheet,
        "dashboard rendered"
    );

    Ok(())
}
