pub mod list;
pub mod render;
pub mod shorthand;
pub mod validate;

pub use list::{list, ListArgs};
pub use render::{render, RenderArgs};
pub use shorthand::{shorthand, ShorthandArgs};
pub use validate::{validate, ValidateArgs};

use crate::config::Config;
use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use stencil_common::Props;
use stencil_engine::Engine;

/// Dev-mode switches shared by every command that renders
#[derive(Args, Debug, Default)]
pub struct EngineArgs {
    /// Check props against component contracts (overrides the config file)
    #[arg(long, conflicts_with = "no_dev")]
    pub dev: bool,

    /// Skip contract checks (overrides the config file)
    #[arg(long)]
    pub no_dev: bool,
}

impl EngineArgs {
    pub fn dev_mode(&self) -> Option<bool> {
        match (self.dev, self.no_dev) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }

    pub fn build(&self, config: &Config) -> Result<Engine> {
        let options = config.engine_options(self.dev_mode());
        tracing::debug!(dev_mode = options.dev_mode, "Building engine");
        Ok(stencil_components::engine(options)?)
    }
}

/// Where a command reads its props from
#[derive(Args, Debug, Default)]
pub struct PropsArgs {
    /// Props as a JSON object
    #[arg(short, long, conflicts_with = "props_file")]
    pub props: Option<String>,

    /// Read props from a JSON file
    #[arg(long)]
    pub props_file: Option<PathBuf>,
}

impl PropsArgs {
    pub fn load(&self) -> Result<Props> {
        if let Some(path) = &self.props_file {
            let source = std::fs::read_to_string(path)
                .with_context(|| format!("Cannot read props file {}", path.display()))?;
            return Props::from_json(&source).context("Invalid props file");
        }
        match &self.props {
            Some(source) => Props::from_json(source).context("Invalid --props JSON"),
            None => Ok(Props::new()),
        }
    }
}

pub fn print_json(value: &impl Serialize, pretty: bool) -> Result<()> {
    let output = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", output);
    Ok(())
}
