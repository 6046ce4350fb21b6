use crate::engine::Engine;
use crate::error::EngineResult;
use crate::shorthand::{MappingRule, Resolution, Shorthand};
use stencil_common::{ComponentId, PropValue, Props};

/// A component paired with the rule that turns its primitive shorthand into
/// properties
#[derive(Debug, Clone)]
pub struct ShorthandFactory {
    component: ComponentId,
    rule: MappingRule,
}

impl ShorthandFactory {
    pub fn new(component: ComponentId, rule: MappingRule) -> Self {
        Self { component, rule }
    }

    pub fn component(&self) -> &ComponentId {
        &self.component
    }

    pub fn rule(&self) -> &MappingRule {
        &self.rule
    }

    pub fn create(
        &self,
        engine: &Engine,
        shorthand: impl Into<Shorthand>,
        defaults: Option<Props>,
    ) -> EngineResult<Resolution> {
        engine.create_shorthand(&self.component, &self.rule, shorthand.into(), defaults.as_ref())
    }

    /// As [`create`](Self::create), from an untyped property value
    pub fn create_value(
        &self,
        engine: &Engine,
        value: PropValue,
        defaults: Option<Props>,
    ) -> EngineResult<Resolution> {
        let shorthand = Shorthand::from_value(value, &self.component)?;
        self.create(engine, shorthand, defaults)
    }
}

/// Package `rule` with `component` for reuse
pub fn create_factory(component: impl Into<ComponentId>, rule: MappingRule) -> ShorthandFactory {
    ShorthandFactory::new(component.into(), rule)
}
