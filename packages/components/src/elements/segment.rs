use crate::shared::{base_contract, content_element, user_class};
use crate::vocab::{COLORS, FLOATS, SIZES, TEXT_ALIGNMENTS};
use stencil_classnames::{
    use_key_only, use_key_or_value_and_key, use_text_align_prop, use_value, use_value_and_key,
    ClassList,
};
use stencil_common::{ElementType, ResolvedNode};
use stencil_engine::{Category, ComponentDef, ComponentMeta, EngineResult, Render};
use stencil_validator::{some, Validator};

const ATTACHED: [&str; 2] = ["top", "bottom"];
const PADDED: [&str; 1] = ["very"];

fn render(scope: &Render<'_>) -> EngineResult<ResolvedNode> {
    let class_name = ClassList::new()
        .add("ui")
        .add_opt(use_value(scope.prop("color")))
        .add_opt(use_value(scope.prop("size")))
        .add_opt(use_key_only(scope.prop("basic"), "basic"))
        .add_opt(use_key_only(scope.prop("circular"), "circular"))
        .add_opt(use_key_only(scope.prop("clearing"), "clearing"))
        .add_opt(use_key_only(scope.prop("compact"), "compact"))
        .add_opt(use_key_only(scope.prop("disabled"), "disabled"))
        .add_opt(use_key_only(scope.prop("inverted"), "inverted"))
        .add_opt(use_key_only(scope.prop("loading"), "loading"))
        .add_opt(use_key_only(scope.prop("piled"), "piled"))
        .add_opt(use_key_only(scope.prop("raised"), "raised"))
        .add_opt(use_key_only(scope.prop("secondary"), "secondary"))
        .add_opt(use_key_only(scope.prop("stacked"), "stacked"))
        .add_opt(use_key_only(scope.prop("tertiary"), "tertiary"))
        .add_opt(use_key_only(scope.prop("vertical"), "vertical"))
        .add_opt(use_key_or_value_and_key(scope.prop("attached"), "attached"))
        .add_opt(use_key_or_value_and_key(scope.prop("padded"), "padded"))
        .add_opt(use_text_align_prop(scope.prop("textAlign")))
        .add_opt(use_value_and_key(scope.prop("floated"), "floated"))
        .add("segment")
        .add_opt(user_class(scope))
        .build();

    Ok(content_element(scope, &class_name))
}

/// A segment is used to create a grouping of related content
pub fn segment() -> ComponentDef {
    ComponentDef::new(
        ComponentMeta::new("Segment", Category::Element)
            .with_domain("attached", ATTACHED)
            .with_domain("color", COLORS)
            .with_domain("floated", FLOATS)
            .with_domain("padded", PADDED)
            .with_domain("size", SIZES)
            .with_domain("textAlign", TEXT_ALIGNMENTS),
        ElementType::tag("div"),
        render,
    )
    .with_contract(
        base_contract()
            .prop("attached", some([Validator::Bool, Validator::one_of(ATTACHED)]))
            .prop("basic", Validator::Bool)
            .prop("circular", Validator::Bool)
            .prop("clearing", Validator::Bool)
            .prop("color", Validator::one_of(COLORS))
            .prop("compact", Validator::Bool)
            .prop("content", Validator::ContentShorthand)
            .prop("disabled", Validator::Bool)
            .prop("floated", Validator::one_of(FLOATS))
            .prop("inverted", Validator::Bool)
            .prop("loading", Validator::Bool)
            .prop("padded", some([Validator::Bool, Validator::one_of(PADDED)]))
            .prop("piled", Validator::Bool)
            .prop("raised", Validator::Bool)
            .prop("secondary", Validator::Bool)
            .prop("size", Validator::one_of(SIZES))
            .prop("stacked", Validator::Bool)
            .prop("tertiary", Validator::Bool)
            .prop("textAlign", Validator::one_of(TEXT_ALIGNMENTS))
            .prop("vertical", Validator::Bool),
    )
}
