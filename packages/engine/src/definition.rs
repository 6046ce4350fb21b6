use crate::element_type::TypeOverride;
use crate::error::EngineResult;
use crate::meta::ComponentMeta;
use crate::render::Render;
use crate::shorthand::MappingRule;
use std::fmt;
use stencil_common::{ComponentId, ElementType, Props, ResolvedNode};
use stencil_validator::Contract;

/// Per-component render logic
pub type RenderFn = fn(&Render<'_>) -> EngineResult<ResolvedNode>;

/// Everything the engine needs to know about one component
#[derive(Clone)]
pub struct ComponentDef {
    pub meta: ComponentMeta,
    /// Declared properties; exactly the names this component consumes
    pub contract: Contract,
    /// Merged under every instance's properties. Keep `as` out of here and use
    /// `default_as`, otherwise it would shadow the type override.
    pub default_props: Props,
    pub default_as: ElementType,
    pub type_override: TypeOverride,
    /// How a bare primitive becomes this component's properties
    pub shorthand: Option<MappingRule>,
    pub render: RenderFn,
}

impl ComponentDef {
    pub fn new(meta: ComponentMeta, default_as: ElementType, render: RenderFn) -> Self {
        Self {
            meta,
            contract: Contract::new(),
            default_props: Props::new(),
            default_as,
            type_override: TypeOverride::NoOverride,
            shorthand: None,
            render,
        }
    }

    pub fn id(&self) -> ComponentId {
        ComponentId::new(self.meta.name.as_str())
    }

    pub fn name(&self) -> &str {
        &self.meta.name
    }

    pub fn with_contract(mut self, contract: Contract) -> Self {
        self.contract = contract;
        self
    }

    pub fn with_default_props(mut self, props: Props) -> Self {
        self.default_props = props;
        self
    }

    pub fn with_type_override(mut self, rule: TypeOverride) -> Self {
        self.type_override = rule;
        self
    }

    pub fn with_shorthand(mut self, rule: MappingRule) -> Self {
        self.shorthand = Some(rule);
        self
    }
}

impl fmt::Debug for ComponentDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentDef")
            .field("meta", &self.meta)
            .field("props", &format!("{} declared", self.contract.len()))
            .field("default_props", &self.default_props)
            .field("default_as", &self.default_as)
            .field("type_override", &self.type_override)
            .field("shorthand", &self.shorthand)
            .finish()
    }
}
