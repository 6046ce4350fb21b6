//! A small component set shared by the integration tests

use stencil_classnames::{use_key_only, use_value, ClassList};
use stencil_common::{props, ElementType, ResolvedNode};
use stencil_engine::{
    Category, ComponentDef, ComponentMeta, EngineResult, MappingRule, PropPredicate, Registry,
    Render, TypeOverride,
};
use stencil_validator::{disallow, every, Contract, Validator};

fn render_section(scope: &Render<'_>) -> EngineResult<ResolvedNode> {
    let class_name = ClassList::new()
        .add_opt(use_key_only(scope.prop("active"), "active"))
        .add("section")
        .add_opt(scope.prop("className").and_then(|v| v.to_token()))
        .build();

    let mut node = scope.element(&class_name);
    match scope.prop("content") {
        Some(content) if !scope.has_children() => {
            node = node.with_children(stencil_common::Child::from_value(content))
        }
        _ => node = node.with_children(scope.children()),
    }
    Ok(node)
}

fn render_label(scope: &Render<'_>) -> EngineResult<ResolvedNode> {
    let class_name = ClassList::new()
        .add("ui")
        .add_opt(use_value(scope.prop("color")))
        .add_opt(use_key_only(scope.prop("basic"), "basic"))
        .add("label")
        .add_opt(scope.prop("className").and_then(|v| v.to_token()))
        .build();

    let content = scope.prop("content").or_else(|| scope.prop("children"));
    Ok(scope
        .element(&class_name)
        .with_children(content.map(stencil_common::Child::from_value).unwrap_or_default()))
}

fn render_button(scope: &Render<'_>) -> EngineResult<ResolvedNode> {
    let label = scope.create("Label", scope.prop("label"), props! { "basic" => true })?;
    let class_name = ClassList::new()
        .add("ui")
        .add_opt(use_key_only(scope.prop("primary"), "primary"))
        .add("button")
        .build();

    let mut node = scope.element(&class_name).with_children(scope.children());
    if let Some(content) = scope.prop("content") {
        node = node.with_children(stencil_common::Child::from_value(content));
    }
    Ok(node.with_children(label.into_children()))
}

pub fn registry() -> Registry {
    let mut registry = Registry::new();

    registry
        .register(
            ComponentDef::new(
                ComponentMeta::new("BreadcrumbSection", Category::Collection).with_parent("Breadcrumb"),
                ElementType::tag("div"),
                render_section,
            )
            .with_contract(
                Contract::new()
                    .prop("active", Validator::Bool)
                    .prop("as", Validator::ElementType)
                    .prop("children", Validator::Node)
                    .prop("className", Validator::String)
                    .prop("content", Validator::ContentShorthand)
                    .prop("href", every([disallow(["link"]), Validator::String]))
                    .prop("link", every([disallow(["href"]), Validator::Bool]))
                    .prop("onClick", Validator::Func),
            )
            .with_type_override(TypeOverride::when(
                PropPredicate::any_truthy(["link", "onClick"]),
                ElementType::tag("a"),
            ))
            .with_shorthand(MappingRule::prop("content")),
        )
        .expect("register BreadcrumbSection");

    registry
        .register(
            ComponentDef::new(
                ComponentMeta::new("Label", Category::Element),
                ElementType::tag("div"),
                render_label,
            )
            .with_contract(
                Contract::new()
                    .prop("as", Validator::ElementType)
                    .prop("basic", Validator::Bool)
                    .prop("children", Validator::Node)
                    .prop("className", Validator::String)
                    .prop("color", Validator::one_of(["red", "blue"]))
                    .prop("content", Validator::ContentShorthand),
            )
            .with_shorthand(MappingRule::prop("content")),
        )
        .expect("register Label");

    registry
        .register(
            ComponentDef::new(
                ComponentMeta::new("Button", Category::Element),
                ElementType::tag("button"),
                render_button,
            )
            .with_contract(
                Contract::new()
                    .prop("as", Validator::ElementType)
                    .prop("children", every([disallow(["content", "label"]), Validator::Node]))
                    .prop("content", Validator::ContentShorthand)
                    .prop("label", Validator::ItemShorthand)
                    .prop("primary", Validator::Bool),
            )
            .with_type_override(TypeOverride::when(
                PropPredicate::any_truthy(["label"]),
                ElementType::tag("div"),
            )),
        )
        .expect("register Button");

    registry
}
