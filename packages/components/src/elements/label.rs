use crate::shared::{base_contract, children_or_content, user_class};
use crate::vocab::{COLORS, SIZES};
use stencil_classnames::{
    use_key_only, use_key_or_value_and_key, use_value, use_value_and_key, ClassList,
};
use stencil_common::{ElementType, Props, ResolvedNode};
use stencil_engine::{
    Category, ComponentDef, ComponentMeta, EngineResult, MappingRule, PropPredicate, Render,
    TypeOverride,
};
use stencil_validator::{disallow, every, some, Validator};

const ATTACHED: [&str; 6] = ["top", "bottom", "top right", "top left", "bottom left", "bottom right"];
const CORNER: [&str; 2] = ["left", "right"];
const POINTING: [&str; 4] = ["above", "below", "left", "right"];
const RIBBON: [&str; 1] = ["right"];

fn render(scope: &Render<'_>) -> EngineResult<ResolvedNode> {
    let class_name = ClassList::new()
        .add("ui")
        .add_opt(use_value(scope.prop("color")))
        .add_opt(use_key_or_value_and_key(scope.prop("pointing"), "pointing"))
        .add_opt(use_value(scope.prop("size")))
        .add_opt(use_key_only(scope.prop("active"), "active"))
        .add_opt(use_key_only(scope.prop("basic"), "basic"))
        .add_opt(use_key_only(scope.prop("circular"), "circular"))
        .add_opt(use_key_only(scope.prop("empty"), "empty"))
        .add_opt(use_key_only(scope.prop("floating"), "floating"))
        .add_opt(use_key_only(scope.prop("horizontal"), "horizontal"))
        .add_opt(use_key_only(scope.prop("tag"), "tag"))
        .add_opt(use_value_and_key(scope.prop("corner"), "corner"))
        .add_opt(use_key_or_value_and_key(scope.prop("ribbon"), "ribbon"))
        .add_opt(use_value_and_key(scope.prop("attached"), "attached"))
        .add("label")
        .add_opt(user_class(scope))
        .build();

    let icon = scope.create("Icon", scope.prop("icon"), Props::new())?;
    let node = scope
        .element(&class_name)
        .with_optional_prop("onClick", scope.prop("onClick"))
        .with_children(icon.into_children())
        .with_children(children_or_content(scope));
    Ok(node)
}

/// A label displays content classification
pub fn label() -> ComponentDef {
    ComponentDef::new(
        ComponentMeta::new("Label", Category::Element)
            .with_domain("attached", ATTACHED)
            .with_domain("color", COLORS)
            .with_domain("corner", CORNER)
            .with_domain("pointing", POINTING)
            .with_domain("ribbon", RIBBON)
            .with_domain("size", SIZES),
        ElementType::tag("div"),
        render,
    )
    .with_contract(
        base_contract()
            .prop("active", Validator::Bool)
            .prop("attached", Validator::one_of(ATTACHED))
            .prop("basic", Validator::Bool)
            .prop("children", every([disallow(["content"]), Validator::Node]))
            .prop("circular", Validator::Bool)
            .prop("color", Validator::one_of(COLORS))
            .prop("content", every([disallow(["children"]), Validator::ContentShorthand]))
            .prop("corner", some([Validator::Bool, Validator::one_of(CORNER)]))
            .prop("empty", every([Validator::Bool, stencil_validator::demand(["circular"])]))
            .prop("floating", Validator::Bool)
            .prop("horizontal", Validator::Bool)
            .prop("icon", Validator::ItemShorthand)
            .prop("onClick", Validator::Func)
            .prop("pointing", some([Validator::Bool, Validator::one_of(POINTING)]))
            .prop("ribbon", some([Validator::Bool, Validator::one_of(RIBBON)]))
            .prop("size", Validator::one_of(SIZES))
            .prop("tag", Validator::Bool),
    )
    .with_type_override(TypeOverride::when(
        PropPredicate::any_truthy(["onClick"]),
        ElementType::tag("a"),
    ))
    .with_shorthand(MappingRule::prop("content"))
}
