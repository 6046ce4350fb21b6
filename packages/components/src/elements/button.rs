use crate::shared::{base_contract, user_class};
use crate::vocab::{COLORS, FLOATS, SIZES};
use stencil_classnames::{
    use_key_only, use_key_or_value_and_key, use_value, use_value_and_key, ClassList,
};
use stencil_common::{props, Child, ElementType, PropValue, Props, ResolvedNode};
use stencil_engine::{
    Category, ComponentDef, ComponentMeta, EngineResult, MappingRule, PropPredicate, Render,
    TypeOverride,
};
use stencil_validator::{disallow, every, given_props, some, Validator};
use tracing::debug;

const ANIMATED: [&str; 2] = ["fade", "vertical"];
const ATTACHED: [&str; 4] = ["left", "right", "top", "bottom"];
const LABEL_POSITIONS: [&str; 2] = ["right", "left"];
const SOCIAL_COLORS: [&str; 7] = [
    "facebook", "twitter", "google plus", "vk", "linkedin", "instagram", "youtube",
];

fn colors() -> Vec<&'static str> {
    COLORS.iter().chain(SOCIAL_COLORS.iter()).copied().collect()
}

fn render(scope: &Render<'_>) -> EngineResult<ResolvedNode> {
    let label = scope.prop("label");
    let label_position = scope.prop("labelPosition").filter(|v| v.is_truthy());
    let icon = scope.prop("icon");
    let has_children = scope.has_children();
    let content = scope.prop("content");

    let labeled = match label_position {
        Some(position) => use_key_or_value_and_key(Some(position), "labeled"),
        None => use_key_only(label, "labeled"),
    };

    let icon_only = matches!(icon, Some(PropValue::Bool(true)))
        || (scope.is_truthy("icon")
            && (label_position.is_some() || (!has_children && !scope.is_truthy("content"))));

    let base = ClassList::new()
        .add_opt(use_value(scope.prop("color")))
        .add_opt(use_value(scope.prop("size")))
        .add_opt(use_key_only(scope.prop("active"), "active"))
        .add_opt(use_key_or_value_and_key(scope.prop("animated"), "animated"))
        .add_opt(use_key_or_value_and_key(scope.prop("attached"), "attached"))
        .add_opt(use_key_only(scope.prop("basic"), "basic"))
        .add_opt(use_key_only(scope.prop("circular"), "circular"))
        .add_opt(use_key_only(scope.prop("compact"), "compact"))
        .add_opt(use_key_only(scope.prop("disabled"), "disabled"))
        .add_opt(use_value_and_key(scope.prop("floated"), "floated"))
        .add_opt(use_key_only(scope.prop("fluid"), "fluid"))
        .add_opt(icon_only.then_some("icon"))
        .add_opt(use_key_only(scope.prop("inverted"), "inverted"))
        .add_opt(use_key_only(scope.prop("loading"), "loading"))
        .add_opt(use_key_only(scope.prop("negative"), "negative"))
        .add_opt(use_key_only(scope.prop("positive"), "positive"))
        .add_opt(use_key_only(scope.prop("primary"), "primary"))
        .add_opt(use_key_only(scope.prop("secondary"), "secondary"))
        .add_opt(use_key_only(scope.prop("toggle"), "toggle"))
        .build();

    let tab_index = scope.element_type().is_tag("div").then(|| PropValue::from(0));
    // a bare `icon` flag only adds the class
    let icon_shorthand = icon.filter(|v| !matches!(v, PropValue::Bool(_)));

    if has_children {
        let classes = ClassList::new()
            .add("ui")
            .add(&base)
            .add_opt(labeled.as_deref())
            .add("button")
            .add_opt(user_class(scope))
            .build();
        debug!(classes = %classes, "Rendering button children");
        return Ok(scope
            .element(&classes)
            .with_optional_prop("tabIndex", tab_index.as_ref())
            .with_children(scope.children()));
    }

    let content: Vec<Child> = content.map(Child::from_value).unwrap_or_default();

    if scope.is_truthy("label") {
        let classes = ClassList::new()
            .add("ui")
            .add(&base)
            .add("button")
            .add_opt(user_class(scope))
            .build();
        let container_classes = ClassList::new()
            .add("ui")
            .add_opt(labeled.as_deref())
            .add("button")
            .add_opt(user_class(scope))
            .build();
        debug!(classes = %classes, container = %container_classes, "Rendering labeled button");

        let on_left = label_position.and_then(PropValue::as_str) == Some("left");
        let pointing = if on_left { "right" } else { "left" };
        let label = scope
            .create("Label", label, props! { "basic" => true, "pointing" => pointing })?
            .into_children();
        let button = ResolvedNode::element("button")
            .with_prop("className", classes)
            .with_children(scope.create("Icon", icon_shorthand, Props::new())?.into_children())
            .with_children(content);

        let mut container = scope.element(&container_classes);
        if on_left {
            container = container.with_children(label).with_child(button);
        } else {
            container = container.with_child(button).with_children(label);
        }
        return Ok(container);
    }

    let classes = ClassList::new()
        .add("ui")
        .add_opt(labeled.as_deref())
        .add(&base)
        .add("button")
        .add_opt(user_class(scope))
        .build();
    debug!(classes = %classes, "Rendering button");

    let icon = scope.create("Icon", icon_shorthand, Props::new())?;
    Ok(scope
        .element(&classes)
        .with_optional_prop("tabIndex", tab_index.as_ref())
        .with_children(icon.into_children())
        .with_children(content))
}

/// A button indicates a possible user action
pub fn button() -> ComponentDef {
    ComponentDef::new(
        ComponentMeta::new("Button", Category::Element)
            .with_domain("animated", ANIMATED)
            .with_domain("attached", ATTACHED)
            .with_domain("color", colors())
            .with_domain("floated", FLOATS)
            .with_domain("labelPosition", LABEL_POSITIONS)
            .with_domain("size", SIZES),
        ElementType::tag("button"),
        render,
    )
    .with_contract(
        base_contract()
            .prop("active", Validator::Bool)
            .prop("animated", some([Validator::Bool, Validator::one_of(ANIMATED)]))
            .prop("attached", Validator::one_of(ATTACHED))
            .prop("basic", Validator::Bool)
            .prop(
                "children",
                every([
                    Validator::Node,
                    disallow(["label"]),
                    given_props(
                        [(
                            "icon",
                            some([
                                Validator::String.required(),
                                Validator::Object.required(),
                                Validator::Element.required(),
                            ]),
                        )],
                        disallow(["icon"]),
                    ),
                ]),
            )
            .prop("circular", Validator::Bool)
            .prop("color", Validator::one_of(colors()))
            .prop("compact", Validator::Bool)
            .prop("content", every([disallow(["children"]), Validator::ContentShorthand]))
            .prop("disabled", Validator::Bool)
            .prop("floated", Validator::one_of(FLOATS))
            .prop("fluid", Validator::Bool)
            .prop(
                "icon",
                some([
                    Validator::Bool,
                    Validator::String,
                    Validator::Object,
                    Validator::Element,
                ]),
            )
            .prop("inverted", Validator::Bool)
            .prop("label", some([Validator::String, Validator::Object, Validator::Element]))
            .prop("labelPosition", Validator::one_of(LABEL_POSITIONS))
            .prop("loading", Validator::Bool)
            .prop("negative", Validator::Bool)
            .prop("positive", Validator::Bool)
            .prop("primary", Validator::Bool)
            .prop("secondary", Validator::Bool)
            .prop("size", Validator::one_of(SIZES))
            .prop("toggle", Validator::Bool),
    )
    .with_type_override(TypeOverride::when(
        PropPredicate::any_truthy(["label", "attached"]),
        ElementType::tag("div"),
    ))
    .with_shorthand(MappingRule::prop("content"))
}

fn render_content(scope: &Render<'_>) -> EngineResult<ResolvedNode> {
    let class_name = ClassList::new()
        .add_opt(use_key_only(scope.prop("visible"), "visible"))
        .add_opt(use_key_only(scope.prop("hidden"), "hidden"))
        .add("content")
        .add_opt(user_class(scope))
        .build();

    Ok(scope.element(&class_name).with_children(scope.children()))
}

/// Used in some button types, such as `animated`
pub fn button_content() -> ComponentDef {
    ComponentDef::new(
        ComponentMeta::new("ButtonContent", Category::Element).with_parent("Button"),
        ElementType::tag("div"),
        render_content,
    )
    .with_contract(
        base_contract()
            .prop("children", Validator::Any)
            .prop("hidden", Validator::Bool)
            .prop("visible", Validator::Bool),
    )
}
