//! Reference component definitions.
//!
//! Each component declares its metadata, contract, default element type and
//! shorthand rule, and renders through the engine. [`registry`] builds a
//! registry holding all of them.

pub mod collections;
pub mod elements;
mod shared;
pub mod views;
pub mod vocab;

use stencil_engine::{Engine, EngineOptions, EngineResult, Registry};

/// Register every reference component
pub fn register_all(registry: &mut Registry) -> EngineResult<()> {
    elements::register(registry)?;
    collections::register(registry)?;
    views::register(registry)
}

/// A registry holding every reference component
pub fn registry() -> EngineResult<Registry> {
    let mut registry = Registry::new();
    register_all(&mut registry)?;
    Ok(registry)
}

/// An engine over [`registry`]
pub fn engine(options: EngineOptions) -> EngineResult<Engine> {
    Ok(Engine::new(registry()?, options))
}
