//! Component resolution for Stencil.
//!
//! A [`Registry`] of [`ComponentDef`]s is built once and handed to an
//! [`Engine`]. The engine turns property records and shorthand values into
//! [`ResolvedNode`](stencil_common::ResolvedNode)s: defaults are merged, the
//! contract is checked in dev mode, properties are partitioned, the element
//! type is resolved and the component's render function runs.

mod definition;
mod diagnostics;
mod element_type;
mod engine;
mod error;
mod factory;
mod meta;
mod options;
mod partition;
mod registry;
mod render;
mod shorthand;

pub use definition::{ComponentDef, RenderFn};
pub use diagnostics::{CollectingSink, DiagnosticSink, TracingSink};
pub use element_type::{resolve_element_type, resolve_type, PropPredicate, TypeOverride};
pub use engine::Engine;
pub use error::{EngineError, EngineResult};
pub use factory::{create_factory, ShorthandFactory};
pub use meta::{Category, ComponentMeta};
pub use options::EngineOptions;
pub use partition::{declared_names, partition, partition_props, unhandled_props, Partition, RESERVED_PROPS};
pub use registry::Registry;
pub use render::Render;
pub use shorthand::{MappingRule, Primitive, Resolution, Shorthand};
