mod card;
mod feed;

use stencil_engine::{EngineResult, Registry};

pub use card::{card, card_content, card_description, card_group, card_header, card_meta};
pub use feed::{feed_content, feed_date, feed_extra, feed_meta, feed_summary};

pub fn register(registry: &mut Registry) -> EngineResult<()> {
    for def in [
        card(),
        card_content(),
        card_description(),
        card_group(),
        card_header(),
        card_meta(),
        feed_content(),
        feed_date(),
        feed_extra(),
        feed_meta(),
        feed_summary(),
    ] {
        registry.register(def)?;
    }
    Ok(())
}
