use super::{EngineArgs, PropsArgs};
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use stencil_common::ComponentId;

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Registered component name (e.g. Card)
    pub component: String,

    #[command(flatten)]
    pub props: PropsArgs,

    #[command(flatten)]
    pub engine: EngineArgs,
}

/// Check props against a component's contract. Exits non-zero on violations.
pub fn validate(args: ValidateArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let engine = args.engine.build(&config)?;
    let props = args.props.load()?;
    let id = ComponentId::new(args.component);

    let errors = engine.validate(&id, &props)?;

    if errors.is_empty() {
        println!("{} {} props are valid", "✓".green(), id.as_str().bold());
        return Ok(());
    }

    for error in &errors {
        println!(
            "{} {} {}",
            "✗".red(),
            format!("{}.{}", error.component_name, error.property_name).bold(),
            error.message
        );
    }
    println!();
    println!("   {} {}", "Violations:".red(), errors.len());

    std::process::exit(1);
}
