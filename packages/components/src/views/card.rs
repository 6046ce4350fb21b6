use crate::shared::{base_contract, content_element, user_class};
use crate::vocab::{widths, COLORS, TEXT_ALIGNMENTS};
use stencil_classnames::{use_key_only, use_text_align_prop, use_value, use_width_prop, ClassList};
use stencil_common::{Child, ElementType, PropValue, Props, ResolvedNode};
use stencil_engine::{
    Category, ComponentDef, ComponentMeta, EngineResult, MappingRule, PropPredicate, Render,
    TypeOverride,
};
use stencil_validator::{disallow, every, Validator};

/// Shorthand properties that render a `CardContent` block
const CONTENT_PROPS: [&str; 3] = ["description", "header", "meta"];

fn render(scope: &Render<'_>) -> EngineResult<ResolvedNode> {
    let class_name = ClassList::new()
        .add("ui")
        .add_opt(use_value(scope.prop("color")))
        .add_opt(use_key_only(scope.prop("centered"), "centered"))
        .add_opt(use_key_only(scope.prop("fluid"), "fluid"))
        .add_opt(use_key_only(scope.prop("raised"), "raised"))
        .add("card")
        .add_opt(user_class(scope))
        .build();

    let node = scope
        .element(&class_name)
        .with_optional_prop("href", scope.prop("href"))
        .with_optional_prop("onClick", scope.prop("onClick"));

    if scope.has_children() {
        return Ok(node.with_children(scope.children()));
    }

    let image = scope.create("Image", scope.prop("image"), Props::new())?;
    let mut node = node.with_children(image.into_children());

    if CONTENT_PROPS.iter().any(|name| scope.is_truthy(name)) {
        let content: Props = CONTENT_PROPS
            .iter()
            .filter_map(|name| scope.prop(name).map(|value| (name.to_string(), value.clone())))
            .collect();
        node = node.with_child(scope.instantiate("CardContent", content)?);
    }

    if let Some(extra) = scope.prop("extra").filter(|v| v.is_truthy()) {
        let content = Props::new().with("extra", true).with("children", extra.clone());
        node = node.with_child(scope.instantiate("CardContent", content)?);
    }

    Ok(node)
}

fn shorthand_for_content() -> Validator {
    every([disallow(["children"]), Validator::Node])
}

/// A card displays site content in a manner similar to a playing card
pub fn card() -> ComponentDef {
    ComponentDef::new(
        ComponentMeta::new("Card", Category::View).with_domain("color", COLORS),
        ElementType::tag("div"),
        render,
    )
    .with_contract(
        base_contract()
            .prop("centered", Validator::Bool)
            .prop(
                "children",
                every([
                    disallow(["description", "header", "image", "meta"]),
                    Validator::Node,
                ]),
            )
            .prop("color", Validator::one_of(COLORS))
            .prop("description", shorthand_for_content())
            .prop("extra", shorthand_for_content())
            .prop("fluid", Validator::Bool)
            .prop("header", shorthand_for_content())
            .prop("href", Validator::String)
            .prop("image", every([disallow(["children"]), Validator::ItemShorthand]))
            .prop("meta", shorthand_for_content())
            .prop("onClick", Validator::Func)
            .prop("raised", Validator::Bool),
    )
    .with_type_override(TypeOverride::when(
        PropPredicate::any_truthy(["href", "onClick"]),
        ElementType::tag("a"),
    ))
}

fn render_content(scope: &Render<'_>) -> EngineResult<ResolvedNode> {
    let class_name = ClassList::new()
        .add_opt(use_key_only(scope.prop("extra"), "extra"))
        .add("content")
        .add_opt(user_class(scope))
        .build();

    if scope.has_children() {
        return Ok(scope.element(&class_name).with_children(scope.children()));
    }

    let mut children: Vec<Child> = Vec::new();
    for (component, prop) in [
        ("CardHeader", "header"),
        ("CardMeta", "meta"),
        ("CardDescription", "description"),
    ] {
        let resolved = scope.create(component, scope.prop(prop), Props::new())?;
        children.extend(resolved.into_children());
    }

    Ok(scope.element(&class_name).with_children(children))
}

pub fn card_content() -> ComponentDef {
    ComponentDef::new(
        ComponentMeta::new("CardContent", Category::View).with_parent("Card"),
        ElementType::tag("div"),
        render_content,
    )
    .with_contract(
        base_contract()
            .prop("description", Validator::ItemShorthand)
            .prop("extra", Validator::Bool)
            .prop("header", Validator::ItemShorthand)
            .prop("meta", Validator::ItemShorthand),
    )
}

fn render_header(scope: &Render<'_>) -> EngineResult<ResolvedNode> {
    let class_name = ClassList::new().add_opt(user_class(scope)).add("header").build();
    Ok(content_element(scope, &class_name))
}

fn render_meta(scope: &Render<'_>) -> EngineResult<ResolvedNode> {
    let class_name = ClassList::new().add_opt(user_class(scope)).add("meta").build();
    Ok(content_element(scope, &class_name))
}

fn render_description(scope: &Render<'_>) -> EngineResult<ResolvedNode> {
    let class_name = ClassList::new()
        .add_opt(user_class(scope))
        .add("description")
        .build();
    Ok(content_element(scope, &class_name))
}

fn content_part(name: &str, render: stencil_engine::RenderFn) -> ComponentDef {
    ComponentDef::new(
        ComponentMeta::new(name, Category::View).with_parent("Card"),
        ElementType::tag("div"),
        render,
    )
    .with_contract(
        base_contract()
            .prop("children", every([disallow(["content"]), Validator::Node]))
            .prop("content", every([disallow(["children"]), Validator::ContentShorthand])),
    )
    .with_shorthand(MappingRule::prop("content"))
}

pub fn card_header() -> ComponentDef {
    content_part("CardHeader", render_header)
}

pub fn card_meta() -> ComponentDef {
    content_part("CardMeta", render_meta)
}

pub fn card_description() -> ComponentDef {
    content_part("CardDescription", render_description)
}

/// Cards are keyed by explicit `key`, else `header-description`
fn card_item(item: &PropValue) -> PropValue {
    let PropValue::Object(item) = item else {
        return item.clone();
    };

    if item.get("key").is_some_and(PropValue::is_truthy) {
        return PropValue::Object(item.clone());
    }
    let key = ["header", "description"]
        .iter()
        .map(|name| item.get(name).and_then(PropValue::to_token).unwrap_or_default())
        .collect::<Vec<_>>()
        .join("-");
    PropValue::Object(item.clone().with("key", key))
}

fn render_group(scope: &Render<'_>) -> EngineResult<ResolvedNode> {
    let class_name = ClassList::new()
        .add("ui")
        .add_opt(use_key_only(scope.prop("doubling"), "doubling"))
        .add_opt(use_key_only(scope.prop("stackable"), "stackable"))
        .add_opt(use_text_align_prop(scope.prop("textAlign")))
        .add_opt(use_width_prop(scope.prop("itemsPerRow"), "", false))
        .add("cards")
        .add_opt(user_class(scope))
        .build();

    if scope.has_children() {
        return Ok(scope.element(&class_name).with_children(scope.children()));
    }

    let items: Vec<PropValue> = match scope.prop("items") {
        Some(PropValue::Array(items)) => items.iter().map(card_item).collect(),
        Some(other) => vec![card_item(other)],
        None => Vec::new(),
    };
    let cards = scope.create_with(
        "Card",
        &MappingRule::prop("header"),
        Some(&PropValue::Array(items)),
        Props::new(),
    )?;

    Ok(scope.element(&class_name).with_children(cards.into_children()))
}

/// A group of cards
pub fn card_group() -> ComponentDef {
    ComponentDef::new(
        ComponentMeta::new("CardGroup", Category::View)
            .with_parent("Card")
            .with_domain("itemsPerRow", widths())
            .with_domain("textAlign", TEXT_ALIGNMENTS),
        ElementType::tag("div"),
        render_group,
    )
    .with_contract(
        base_contract()
            .prop("children", every([disallow(["items"]), Validator::Node]))
            .prop("doubling", Validator::Bool)
            .prop("items", every([disallow(["children"]), Validator::array_of(Validator::Object)]))
            .prop("itemsPerRow", Validator::one_of(widths()))
            .prop("stackable", Validator::Bool)
            .prop("textAlign", Validator::one_of(TEXT_ALIGNMENTS)),
    )
}
