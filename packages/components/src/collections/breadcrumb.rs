use crate::shared::{base_contract, children_or_content, user_class};
use crate::vocab::{without, SIZES};
use stencil_classnames::{use_key_only, use_value, ClassList};
use stencil_common::{props, Child, ElementType, PropValue, Props, ResolvedNode};
use stencil_engine::{
    Category, ComponentDef, ComponentMeta, EngineResult, MappingRule, PropPredicate, Render,
    TypeOverride,
};
use stencil_validator::{disallow, every, Validator};

/// Sections name themselves by `text`; it renders as the section's content
fn section_shorthand(section: &PropValue) -> PropValue {
    let PropValue::Object(section) = section else {
        return section.clone();
    };

    let mut section = section.clone();
    if let Some(text) = section.remove("text") {
        if !section.get("key").is_some_and(PropValue::is_truthy) {
            section.insert("key", text.clone());
        }
        section.insert("content", text);
    }
    PropValue::Object(section)
}

fn render(scope: &Render<'_>) -> EngineResult<ResolvedNode> {
    let class_name = ClassList::new()
        .add("ui")
        .add_opt(user_class(scope))
        .add_opt(use_value(scope.prop("size")))
        .add("breadcrumb")
        .build();

    if scope.has_children() {
        return Ok(scope.element(&class_name).with_children(scope.children()));
    }

    let sections: Vec<PropValue> = match scope.prop("sections") {
        Some(PropValue::Array(sections)) => sections.iter().map(section_shorthand).collect(),
        Some(other) => vec![section_shorthand(other)],
        None => Vec::new(),
    };
    let sections = scope
        .create("BreadcrumbSection", Some(&PropValue::Array(sections)), Props::new())?
        .into_nodes();

    let last = sections.len().saturating_sub(1);
    let mut children = Vec::with_capacity(sections.len() * 2);
    for (index, section) in sections.into_iter().enumerate() {
        let divider_key = format!("{}-divider", section.key.as_deref().unwrap_or_default());
        children.push(Child::Node(section));

        if index != last {
            let mut divider = props! { "key" => divider_key };
            if let Some(icon) = scope.prop("icon") {
                divider.insert("icon", icon.clone());
            }
            if let Some(content) = scope.prop("divider") {
                divider.insert("children", content.clone());
            }
            let divider = scope.instantiate("BreadcrumbDivider", divider)?;
            children.push(Child::Node(divider));
        }
    }

    Ok(scope.element(&class_name).with_children(children))
}

/// A breadcrumb is used to show hierarchy between content
pub fn breadcrumb() -> ComponentDef {
    let sizes = without(&SIZES, "medium");

    ComponentDef::new(
        ComponentMeta::new("Breadcrumb", Category::Collection).with_domain("size", sizes.clone()),
        ElementType::tag("div"),
        render,
    )
    .with_contract(
        base_contract()
            .prop("divider", every([disallow(["icon"]), Validator::ContentShorthand]))
            .prop("icon", every([disallow(["divider"]), Validator::ItemShorthand]))
            .prop("sections", Validator::ItemsShorthand)
            .prop("size", Validator::one_of(sizes)),
    )
}

fn render_divider(scope: &Render<'_>) -> EngineResult<ResolvedNode> {
    let class_name = ClassList::new()
        .add("divider")
        .add_opt(user_class(scope))
        .build();

    if scope.is_truthy("icon") {
        let icon = scope.create(
            "Icon",
            scope.prop("icon"),
            scope.rest().clone().with("className", class_name.as_str()),
        )?;
        if let Some(icon) = icon.into_nodes().into_iter().next() {
            return Ok(icon);
        }
    }

    let mut children = children_or_content(scope);
    if children.is_empty() {
        children.push(Child::Text("/".to_string()));
    }
    Ok(scope.element(&class_name).with_children(children))
}

/// A divider between breadcrumb sections
pub fn breadcrumb_divider() -> ComponentDef {
    ComponentDef::new(
        ComponentMeta::new("BreadcrumbDivider", Category::Collection).with_parent("Breadcrumb"),
        ElementType::tag("div"),
        render_divider,
    )
    .with_contract(
        base_contract()
            .prop("content", Validator::ContentShorthand)
            .prop("icon", Validator::ItemShorthand),
    )
    .with_shorthand(MappingRule::prop("content"))
}

fn render_section(scope: &Render<'_>) -> EngineResult<ResolvedNode> {
    let class_name = ClassList::new()
        .add_opt(use_key_only(scope.prop("active"), "active"))
        .add("section")
        .add_opt(user_class(scope))
        .build();

    Ok(scope
        .element(&class_name)
        .with_optional_prop("href", scope.prop("href"))
        .with_optional_prop("onClick", scope.prop("onClick"))
        .with_children(children_or_content(scope)))
}

/// A section of a breadcrumb
pub fn breadcrumb_section() -> ComponentDef {
    ComponentDef::new(
        ComponentMeta::new("BreadcrumbSection", Category::Collection).with_parent("Breadcrumb"),
        ElementType::tag("div"),
        render_section,
    )
    .with_contract(
        base_contract()
            .prop("active", Validator::Bool)
            .prop("content", Validator::ContentShorthand)
            .prop("href", every([disallow(["link"]), Validator::String]))
            .prop("link", every([disallow(["href"]), Validator::Bool]))
            .prop("onClick", Validator::Func),
    )
    .with_type_override(TypeOverride::when(
        PropPredicate::any_truthy(["link", "onClick"]),
        ElementType::tag("a"),
    ))
    .with_shorthand(MappingRule::prop("content"))
}
