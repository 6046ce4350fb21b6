use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::collections::BTreeMap;
use stencil_engine::{ComponentDef, EngineOptions};

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Show declared prop names
    #[arg(short, long)]
    pub verbose: bool,
}

/// Print registered components grouped by parent
pub fn list(args: ListArgs, _cwd: &str) -> Result<()> {
    let engine = stencil_components::engine(EngineOptions::production())?;
    let registry = engine.registry();

    let mut groups: BTreeMap<&str, Vec<&ComponentDef>> = BTreeMap::new();
    for def in registry.iter() {
        let group = def.meta.parent.as_deref().unwrap_or_else(|| def.name());
        groups.entry(group).or_default().push(def);
    }

    for (group, defs) in &groups {
        println!("{}", group.bold());
        for def in defs {
            let label = if def.name() == *group {
                format!("{} ({})", def.name(), def.meta.category)
            } else {
                format!("  {} ({})", def.name(), def.meta.category)
            };
            println!("  {}", label);
            if args.verbose {
                let props: Vec<&str> = def.contract.declared_names().collect();
                println!("      {}", props.join(", ").dimmed());
            }
        }
    }

    println!();
    println!("   {} {}", "Components:".green(), registry.len());
    Ok(())
}
