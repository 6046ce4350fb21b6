use crate::shared::{base_contract, user_class};
use crate::vocab::{COLORS, SIZES};
use stencil_classnames::{use_key_only, use_value, use_value_and_key, ClassList};
use stencil_common::{ElementType, ResolvedNode};
use stencil_engine::{Category, ComponentDef, ComponentMeta, EngineResult, MappingRule, Render};
use stencil_validator::Validator;

const FLIPPED: [&str; 2] = ["horizontally", "vertically"];
const ROTATED: [&str; 2] = ["clockwise", "counterclockwise"];

fn render(scope: &Render<'_>) -> EngineResult<ResolvedNode> {
    let class_name = ClassList::new()
        .add_opt(use_value(scope.prop("name")))
        .add_opt(use_value(scope.prop("size")))
        .add_opt(use_value(scope.prop("color")))
        .add_opt(use_key_only(scope.prop("bordered"), "bordered"))
        .add_opt(use_key_only(scope.prop("circular"), "circular"))
        .add_opt(use_key_only(scope.prop("corner"), "corner"))
        .add_opt(use_key_only(scope.prop("disabled"), "disabled"))
        .add_opt(use_key_only(scope.prop("fitted"), "fitted"))
        .add_opt(use_value_and_key(scope.prop("flipped"), "flipped"))
        .add_opt(use_key_only(scope.prop("inverted"), "inverted"))
        .add_opt(use_key_only(scope.prop("link"), "link"))
        .add_opt(use_key_only(scope.prop("loading"), "loading"))
        .add_opt(use_value_and_key(scope.prop("rotated"), "rotated"))
        .add("icon")
        .add_opt(user_class(scope))
        .build();

    Ok(scope.element(&class_name))
}

/// An icon is a glyph used to represent something else
pub fn icon() -> ComponentDef {
    ComponentDef::new(
        ComponentMeta::new("Icon", Category::Element)
            .with_domain("color", COLORS)
            .with_domain("flipped", FLIPPED)
            .with_domain("rotated", ROTATED)
            .with_domain("size", SIZES),
        ElementType::tag("i"),
        render,
    )
    .with_contract(
        base_contract()
            .prop("bordered", Validator::Bool)
            .prop("circular", Validator::Bool)
            .prop("color", Validator::one_of(COLORS))
            .prop("corner", Validator::Bool)
            .prop("disabled", Validator::Bool)
            .prop("fitted", Validator::Bool)
            .prop("flipped", Validator::one_of(FLIPPED))
            .prop("inverted", Validator::Bool)
            .prop("link", Validator::Bool)
            .prop("loading", Validator::Bool)
            .prop("name", Validator::String)
            .prop("rotated", Validator::one_of(ROTATED))
            .prop("size", Validator::one_of(SIZES)),
    )
    .with_shorthand(MappingRule::prop("name"))
}
