use crate::shared::{base_contract, user_class};
use stencil_classnames::ClassList;
use stencil_common::{ElementType, ResolvedNode};
use stencil_engine::{Category, ComponentDef, ComponentMeta, EngineResult, MappingRule, Render};

fn render_header(scope: &Render<'_>) -> EngineResult<ResolvedNode> {
    let class_name = ClassList::new()
        .add_opt(user_class(scope))
        .add("header")
        .build();
    Ok(crate::shared::content_element(scope, &class_name))
}

pub fn list_header() -> ComponentDef {
    ComponentDef::new(
        ComponentMeta::new("ListHeader", Category::Element).with_parent("List"),
        ElementType::tag("div"),
        render_header,
    )
    .with_contract(base_contract().prop("content", stencil_validator::Validator::ContentShorthand))
    .with_shorthand(MappingRule::prop("content"))
}
