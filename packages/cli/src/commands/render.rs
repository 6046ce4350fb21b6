use super::{print_json, EngineArgs, PropsArgs};
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use stencil_common::ComponentId;

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Registered component name (e.g. Button)
    pub component: String,

    #[command(flatten)]
    pub props: PropsArgs,

    #[command(flatten)]
    pub engine: EngineArgs,
}

/// Render one component and print the resolved node as JSON
pub fn render(args: RenderArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let engine = args.engine.build(&config)?;
    let props = args.props.load()?;

    let node = engine.instantiate(&ComponentId::new(args.component), props)?;
    print_json(&node, config.pretty)
}
