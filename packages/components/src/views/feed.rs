use crate::shared::{base_contract, content_element, user_class};
use stencil_classnames::{use_key_only, ClassList};
use stencil_common::{props, Child, ElementType, PropValue, Props, ResolvedNode};
use stencil_engine::{Category, ComponentDef, ComponentMeta, EngineResult, MappingRule, Render};
use stencil_validator::{disallow, every, some, Validator};

fn feed_part(name: &str, render: stencil_engine::RenderFn) -> ComponentDef {
    ComponentDef::new(
        ComponentMeta::new(name, Category::View).with_parent("Feed"),
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

fn render_content(scope: &Render<'_>) -> EngineResult<ResolvedNode> {
    let class_name = ClassList::new()
        .add_opt(user_class(scope))
        .add("content")
        .build();

    if scope.has_children() {
        return Ok(scope.element(&class_name).with_children(scope.children()));
    }

    let content_rule = MappingRule::prop("content");
    let text_rule = MappingRule::prop_with("content", props! { "text" => true });
    let images_rule = MappingRule::prop("images");

    // an image list is one extra block, not a list of blocks
    let images = scope.prop("extraImages").map(|images| match images {
        PropValue::Array(_) => PropValue::from(props! { "images" => images.clone() }),
        other => other.clone(),
    });

    let date = scope.create_with("FeedDate", &content_rule, scope.prop("date"), Props::new())?;
    let summary =
        scope.create_with("FeedSummary", &content_rule, scope.prop("summary"), Props::new())?;
    let extra_text =
        scope.create_with("FeedExtra", &text_rule, scope.prop("extraText"), Props::new())?;
    let extra_images =
        scope.create_with("FeedExtra", &images_rule, images.as_ref(), Props::new())?;
    let meta = scope.create_with("FeedMeta", &content_rule, scope.prop("meta"), Props::new())?;

    Ok(scope
        .element(&class_name)
        .with_children(date.into_children())
        .with_children(summary.into_children())
        .with_children(scope.prop("content").map(Child::from_value).unwrap_or_default())
        .with_children(extra_text.into_children())
        .with_children(extra_images.into_children())
        .with_children(meta.into_children()))
}

pub fn feed_content() -> ComponentDef {
    ComponentDef::new(
        ComponentMeta::new("FeedContent", Category::View).with_parent("Feed"),
        ElementType::tag("div"),
        render_content,
    )
    .with_contract(
        base_contract()
            .prop("content", Validator::ContentShorthand)
            .prop("date", Validator::ItemShorthand)
            .prop("extraImages", extra_images())
            .prop("extraText", Validator::ItemShorthand)
            .prop("meta", Validator::ItemShorthand)
            .prop("summary", Validator::ItemShorthand),
    )
}

fn render_date(scope: &Render<'_>) -> EngineResult<ResolvedNode> {
    let class_name = ClassList::new().add_opt(user_class(scope)).add("date").build();
    Ok(content_element(scope, &class_name))
}

pub fn feed_date() -> ComponentDef {
    feed_part("FeedDate", render_date)
}

fn render_summary(scope: &Render<'_>) -> EngineResult<ResolvedNode> {
    let class_name = ClassList::new().add_opt(user_class(scope)).add("summary").build();
    Ok(content_element(scope, &class_name))
}

pub fn feed_summary() -> ComponentDef {
    feed_part("FeedSummary", render_summary)
}

fn render_meta(scope: &Render<'_>) -> EngineResult<ResolvedNode> {
    let class_name = ClassList::new().add_opt(user_class(scope)).add("meta").build();
    Ok(content_element(scope, &class_name))
}

pub fn feed_meta() -> ComponentDef {
    feed_part("FeedMeta", render_meta)
}

/// `true` marks the block as an image row; a list is image shorthand
fn extra_images() -> Validator {
    every([
        disallow(["text"]),
        some([Validator::Bool, Validator::array_of(Validator::ItemShorthand)]),
    ])
}

fn render_extra(scope: &Render<'_>) -> EngineResult<ResolvedNode> {
    let class_name = ClassList::new()
        .add_opt(user_class(scope))
        .add_opt(use_key_only(scope.prop("images"), "images"))
        .add_opt(
            (scope.is_truthy("content") || scope.is_truthy("text")).then_some("text"),
        )
        .add("extra")
        .build();

    if scope.has_children() {
        return Ok(scope.element(&class_name).with_children(scope.children()));
    }

    let mut node = scope.element(&class_name);
    if let Some(images) = scope.prop("images").filter(|v| matches!(v, PropValue::Array(_))) {
        let images = scope.create("Image", Some(images), Props::new())?;
        node = node.with_children(images.into_children());
    }
    Ok(node.with_children(scope.prop("content").map(Child::from_value).unwrap_or_default()))
}

pub fn feed_extra() -> ComponentDef {
    ComponentDef::new(
        ComponentMeta::new("FeedExtra", Category::View).with_parent("Feed"),
        ElementType::tag("div"),
        render_extra,
    )
    .with_contract(
        base_contract()
            .prop("children", every([disallow(["content"]), Validator::Node]))
            .prop("content", every([disallow(["children"]), Validator::ContentShorthand]))
            .prop("images", extra_images())
            .prop("text", Validator::Bool),
    )
    .with_shorthand(MappingRule::prop("content"))
}
