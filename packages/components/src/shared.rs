use stencil_common::{Child, PropValue, ResolvedNode};
use stencil_engine::Render;
use stencil_validator::{Contract, Validator};

/// `as`, `children` and `className`, which every component declares
pub(crate) fn base_contract() -> Contract {
    Contract::new()
        .prop("as", Validator::ElementType)
        .prop("children", Validator::Node)
        .prop("className", Validator::String)
}

/// Classes the caller passed in
pub(crate) fn user_class(scope: &Render<'_>) -> Option<String> {
    scope.prop("className").and_then(PropValue::to_token)
}

/// `children` when given, otherwise the `content` shorthand
pub(crate) fn children_or_content(scope: &Render<'_>) -> Vec<Child> {
    if scope.has_children() {
        scope.children()
    } else {
        scope.prop("content").map(Child::from_value).unwrap_or_default()
    }
}

/// The common case: one element, its classes, its content
pub(crate) fn content_element(scope: &Render<'_>, class_name: &str) -> ResolvedNode {
    scope
        .element(class_name)
        .with_children(children_or_content(scope))
}

/// Numeric-or-string validator for size attributes
pub(crate) fn string_or_number() -> Validator {
    stencil_validator::some([Validator::String, Validator::Number])
}
