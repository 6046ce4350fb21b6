mod breadcrumb;

use stencil_engine::{EngineResult, Registry};

pub use breadcrumb::{breadcrumb, breadcrumb_divider, breadcrumb_section};

pub fn register(registry: &mut Registry) -> EngineResult<()> {
    for def in [breadcrumb(), breadcrumb_divider(), breadcrumb_section()] {
        registry.register(def)?;
    }
    Ok(())
}
