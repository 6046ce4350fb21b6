mod button;
mod icon;
mod image;
mod label;
mod list;
mod loader;
mod segment;

use stencil_engine::{EngineResult, Registry};

pub use button::{button, button_content};
pub use icon::icon;
pub use image::image;
pub use label::label;
pub use list::list_header;
pub use loader::loader;
pub use segment::segment;

pub fn register(registry: &mut Registry) -> EngineResult<()> {
    for def in [
        button(),
        button_content(),
        icon(),
        image(),
        label(),
        list_header(),
        loader(),
        segment(),
    ] {
        registry.register(def)?;
    }
    Ok(())
}
