//! The scope a component's render function runs in.

use crate::definition::ComponentDef;
use crate::engine::Engine;
use crate::error::EngineResult;
use crate::shorthand::{MappingRule, Resolution, Shorthand};
use stencil_common::{Child, ComponentId, ElementType, PropValue, Props, ResolvedNode};

pub struct Render<'a> {
    pub(crate) engine: &'a Engine,
    pub(crate) def: &'a ComponentDef,
    pub(crate) props: &'a Props,
    pub(crate) rest: Props,
    pub(crate) element_type: ElementType,
}

impl<'a> Render<'a> {
    pub fn engine(&self) -> &'a Engine {
        self.engine
    }

    pub fn definition(&self) -> &'a ComponentDef {
        self.def
    }

    /// Instance properties over the component's defaults
    pub fn props(&self) -> &'a Props {
        self.props
    }

    /// A property, if present
    pub fn prop(&self, name: &str) -> Option<&'a PropValue> {
        self.props.get_present(name)
    }

    pub fn is_truthy(&self, name: &str) -> bool {
        self.props.is_truthy(name)
    }

    /// Properties the component does not consume
    pub fn rest(&self) -> &Props {
        &self.rest
    }

    pub fn element_type(&self) -> &ElementType {
        &self.element_type
    }

    /// Renderable content of the `children` property
    pub fn children(&self) -> Vec<Child> {
        self.prop("children").map(Child::from_value).unwrap_or_default()
    }

    pub fn has_children(&self) -> bool {
        !self.children().is_empty()
    }

    /// A node of the resolved element type carrying the forwarded properties.
    /// An empty `class_name` adds no `className`.
    pub fn element(&self, class_name: &str) -> ResolvedNode {
        let node = ResolvedNode::new(self.element_type.clone()).with_props(self.rest.clone());
        if class_name.is_empty() {
            node
        } else {
            node.with_prop("className", class_name)
        }
    }

    /// Resolve `value` with the factory `component` declares
    pub fn create(
        &self,
        component: &str,
        value: Option<&PropValue>,
        defaults: Props,
    ) -> EngineResult<Resolution> {
        let factory = self.engine.factory(&ComponentId::new(component))?;
        factory.create_value(self.engine, value.cloned().unwrap_or_default(), Some(defaults))
    }

    /// Resolve `value` as `component` with an explicit mapping rule
    pub fn create_with(
        &self,
        component: &str,
        rule: &MappingRule,
        value: Option<&PropValue>,
        defaults: Props,
    ) -> EngineResult<Resolution> {
        let id = ComponentId::new(component);
        let shorthand = Shorthand::from_value(value.cloned().unwrap_or_default(), &id)?;
        self.engine.create_shorthand(&id, rule, shorthand, Some(&defaults))
    }

    /// Render a fixed sub-component
    pub fn instantiate(&self, component: &str, props: Props) -> EngineResult<ResolvedNode> {
        self.engine.instantiate(&ComponentId::new(component), props)
    }
}
