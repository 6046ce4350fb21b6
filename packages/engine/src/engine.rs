use crate::definition::ComponentDef;
use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::element_type;
use crate::error::{EngineError, EngineResult};
use crate::factory::ShorthandFactory;
use crate::options::EngineOptions;
use crate::partition::{self, Partition};
use crate::registry::Registry;
use crate::render::Render;
use stencil_common::{ComponentId, ElementType, PropValue, Props, ResolvedNode};
use stencil_validator::ValidationError;
use tracing::debug;

/// Resolves component instances against a frozen registry.
///
/// Resolution only reads the registry, so the same inputs always produce the
/// same nodes.
pub struct Engine {
    registry: Registry,
    options: EngineOptions,
    sink: Box<dyn DiagnosticSink>,
}

impl Engine {
    pub fn new(registry: Registry, options: EngineOptions) -> Self {
        Self {
            registry,
            options,
            sink: Box::new(TracingSink),
        }
    }

    /// Replace the channel that receives contract violations
    pub fn with_sink(mut self, sink: impl DiagnosticSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// The shorthand factory a component declares
    pub fn factory(&self, id: &ComponentId) -> EngineResult<ShorthandFactory> {
        let def = self.registry.definition(id)?;
        def.shorthand
            .clone()
            .map(|rule| ShorthandFactory::new(id.clone(), rule))
            .ok_or_else(|| EngineError::NoShorthandRule {
                name: id.to_string(),
            })
    }

    /// Render one instance of `id`. A `key` property becomes the node key.
    pub fn instantiate(&self, id: &ComponentId, props: Props) -> EngineResult<ResolvedNode> {
        let key = props.get("key").and_then(PropValue::to_key);
        self.instantiate_keyed(id, props, key)
    }

    pub(crate) fn instantiate_keyed(
        &self,
        id: &ComponentId,
        props: Props,
        key: Option<String>,
    ) -> EngineResult<ResolvedNode> {
        let def = self.registry.definition(id)?;
        let props = props.merged_over(&def.default_props);

        if self.options.dev_mode {
            for error in def.contract.validate(def.name(), &props) {
                self.sink.report(&error);
            }
        }

        let Partition { unhandled, .. } = partition::partition_props(def, &props);
        let element_type = element_type::resolve_type(def, &props);

        debug!(
            component = %id,
            element_type = %element_type,
            forwarded = unhandled.len(),
            "Instantiating component"
        );

        let scope = Render {
            engine: self,
            def,
            props: &props,
            rest: unhandled,
            element_type,
        };

        let mut node = (def.render)(&scope)?;
        node.key = key;
        Ok(node)
    }

    /// Element type `id` renders as for `props`
    pub fn resolve_type(&self, id: &ComponentId, props: &Props) -> EngineResult<ElementType> {
        let def = self.registry.definition(id)?;
        Ok(element_type::resolve_type(def, &props.merged_over(&def.default_props)))
    }

    pub fn partition(&self, id: &ComponentId, props: &Props) -> EngineResult<Partition> {
        partition::partition(&self.registry, id, props)
    }

    /// Check `props` against the contract of `id`, regardless of dev mode
    pub fn validate(&self, id: &ComponentId, props: &Props) -> EngineResult<Vec<ValidationError>> {
        let def: &ComponentDef = self.registry.definition(id)?;
        Ok(def.contract.validate(def.name(), props))
    }
}
