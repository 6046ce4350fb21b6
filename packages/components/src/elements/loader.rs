use crate::shared::{base_contract, children_or_content, user_class};
use crate::vocab::SIZES;
use stencil_classnames::{use_key_only, use_key_or_value_and_key, use_value, ClassList};
use stencil_common::{ElementType, ResolvedNode};
use stencil_engine::{Category, ComponentDef, ComponentMeta, EngineResult, Render};
use stencil_validator::{some, Validator};

const INLINE: [&str; 1] = ["centered"];

fn render(scope: &Render<'_>) -> EngineResult<ResolvedNode> {
    let children = children_or_content(scope);
    let class_name = ClassList::new()
        .add("ui")
        .add_opt(use_value(scope.prop("size")))
        .add_opt(use_key_only(scope.prop("active"), "active"))
        .add_opt(use_key_only(scope.prop("disabled"), "disabled"))
        .add_opt(use_key_only(scope.prop("indeterminate"), "indeterminate"))
        .add_opt(use_key_only(scope.prop("inverted"), "inverted"))
        .add_opt((!children.is_empty()).then_some("text"))
        .add_opt(use_key_or_value_and_key(scope.prop("inline"), "inline"))
        .add("loader")
        .add_opt(user_class(scope))
        .build();

    Ok(scope.element(&class_name).with_children(children))
}

/// A loader alerts a user to wait for an activity to complete
pub fn loader() -> ComponentDef {
    ComponentDef::new(
        ComponentMeta::new("Loader", Category::Element)
            .with_domain("inline", INLINE)
            .with_domain("size", SIZES),
        ElementType::tag("div"),
        render,
    )
    .with_contract(
        base_contract()
            .prop("active", Validator::Bool)
            .prop("content", Validator::ContentShorthand)
            .prop("disabled", Validator::Bool)
            .prop("indeterminate", Validator::Bool)
            .prop("inline", some([Validator::Bool, Validator::one_of(INLINE)]))
            .prop("inverted", Validator::Bool)
            .prop("size", Validator::one_of(SIZES)),
    )
}
