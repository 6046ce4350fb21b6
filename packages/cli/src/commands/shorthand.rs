use super::{print_json, EngineArgs};
use crate::config::Config;
use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value as Json;
use stencil_common::{ComponentId, PropValue, Props};
use stencil_engine::Resolution;

#[derive(Args, Debug)]
pub struct ShorthandArgs {
    /// Registered component name (e.g. Label)
    pub component: String,

    /// Shorthand value as JSON: a string, number, object or array
    pub value: String,

    /// Extra default props as a JSON object
    #[arg(short, long)]
    pub defaults: Option<String>,

    #[command(flatten)]
    pub engine: EngineArgs,
}

/// Run a component's shorthand factory and print the nodes it produces
pub fn shorthand(args: ShorthandArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let engine = args.engine.build(&config)?;

    let json: Json = serde_json::from_str(&args.value).context("Invalid shorthand JSON")?;
    let value = PropValue::try_from(json)?;
    let defaults = args
        .defaults
        .as_deref()
        .map(Props::from_json)
        .transpose()
        .context("Invalid --defaults JSON")?;

    let factory = engine.factory(&ComponentId::new(args.component))?;
    let resolution = factory.create_value(&engine, value, defaults)?;

    print_json(&resolution_to_json(resolution)?, config.pretty)
}

fn resolution_to_json(resolution: Resolution) -> Result<Json> {
    Ok(match resolution {
        Resolution::Absent => Json::Null,
        Resolution::Node(node) => serde_json::to_value(node)?,
        Resolution::List(nodes) => serde_json::to_value(nodes)?,
    })
}
