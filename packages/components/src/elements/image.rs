use crate::shared::{base_contract, string_or_number, user_class};
use crate::vocab::{FLOATS, SIZES, VERTICAL_ALIGNMENTS};
use stencil_classnames::{
    use_key_only, use_key_or_value_and_key, use_value, use_value_and_key,
    use_vertical_align_prop, ClassList,
};
use stencil_common::{props, ElementType, Props, ResolvedNode};
use stencil_engine::{
    Category, ComponentDef, ComponentMeta, EngineResult, MappingRule, Primitive, PropPredicate,
    Render, TypeOverride,
};
use stencil_validator::{disallow, every, some, Validator};

const SHAPES: [&str; 2] = ["rounded", "circular"];
const SPACED: [&str; 2] = ["left", "right"];
const IMG_ATTRIBUTES: [&str; 4] = ["src", "alt", "width", "height"];

fn render(scope: &Render<'_>) -> EngineResult<ResolvedNode> {
    let class_name = ClassList::new()
        .add_opt(use_key_only(scope.prop("ui"), "ui"))
        .add_opt(use_value(scope.prop("size")))
        .add_opt(use_vertical_align_prop(scope.prop("verticalAlign")))
        .add_opt(use_key_only(scope.prop("avatar"), "avatar"))
        .add_opt(use_key_only(scope.prop("bordered"), "bordered"))
        .add_opt(use_key_only(scope.prop("centered"), "centered"))
        .add_opt(use_key_only(scope.prop("disabled"), "disabled"))
        .add_opt(use_value_and_key(scope.prop("floated"), "floated"))
        .add_opt(use_key_only(scope.prop("fluid"), "fluid"))
        .add_opt(use_key_only(scope.prop("hidden"), "hidden"))
        .add_opt(use_key_only(scope.prop("inline"), "inline"))
        .add_opt(use_key_or_value_and_key(scope.prop("spaced"), "spaced"))
        .add_opt(use_value(scope.prop("shape")))
        .add_opt(user_class(scope))
        .add("image")
        .build();

    let img_attributes: Props = IMG_ATTRIBUTES
        .iter()
        .filter_map(|name| scope.prop(name).map(|value| (name.to_string(), value.clone())))
        .collect();

    if scope.element_type().is_tag("img") {
        return Ok(scope.element(&class_name).with_props(img_attributes));
    }

    let label = scope.create("Label", scope.prop("label"), Props::new())?;
    Ok(scope
        .element(&class_name)
        .with_optional_prop("href", scope.prop("href"))
        .with_children(label.into_children())
        .with_child(ResolvedNode::element("img").with_props(img_attributes)))
}

fn to_src(value: &Primitive) -> Props {
    props! { "src" => value.to_value() }
}

/// An image is a graphic representation of something
pub fn image() -> ComponentDef {
    ComponentDef::new(
        ComponentMeta::new("Image", Category::Element)
            .with_domain("floated", FLOATS)
            .with_domain("shape", SHAPES)
            .with_domain("size", SIZES)
            .with_domain("spaced", SPACED)
            .with_domain("verticalAlign", VERTICAL_ALIGNMENTS),
        ElementType::tag("img"),
        render,
    )
    .with_contract(
        base_contract()
            .prop("alt", Validator::String)
            .prop("avatar", Validator::Bool)
            .prop("bordered", Validator::Bool)
            .prop("centered", Validator::Bool)
            .prop("disabled", Validator::Bool)
            .prop("floated", Validator::one_of(FLOATS))
            .prop("fluid", every([Validator::Bool, disallow(["size"])]))
            .prop("height", string_or_number())
            .prop("hidden", Validator::Bool)
            .prop("href", Validator::String)
            .prop("inline", Validator::Bool)
            .prop("label", Validator::ItemShorthand)
            .prop("shape", Validator::one_of(SHAPES))
            .prop("size", Validator::one_of(SIZES))
            .prop("spaced", some([Validator::Bool, Validator::one_of(SPACED)]))
            .prop("src", Validator::String)
            .prop("ui", Validator::Bool)
            .prop("verticalAlign", Validator::one_of(VERTICAL_ALIGNMENTS))
            .prop("width", string_or_number())
            .prop("wrapped", every([Validator::Bool, disallow(["href"])])),
    )
    .with_default_props(props! { "ui" => true })
    .with_type_override(TypeOverride::when(
        PropPredicate::any_truthy(["label", "wrapped"]),
        ElementType::tag("div"),
    ))
    .with_shorthand(MappingRule::Custom(to_src))
}
