//! Component registry.
//!
//! Populated once by the host application, then handed to the
//! [`Engine`](crate::Engine), which owns it for the rest of the process. There is
//! no mutation path other than [`Registry::register`], and no way back to a
//! mutable registry once the engine holds it.

use crate::definition::ComponentDef;
use crate::error::{EngineError, EngineResult};
use crate::meta::ComponentMeta;
use std::collections::{HashMap, HashSet};
use stencil_common::{ComponentId, ElementType};
use tracing::debug;

#[derive(Debug, Default)]
pub struct Registry {
    components: HashMap<ComponentId, ComponentDef>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a component definition.
    ///
    /// Fails if the component is already registered or if its default element
    /// type is an empty tag name.
    pub fn register(&mut self, def: ComponentDef) -> EngineResult<ComponentId> {
        let id = def.id();

        if def.meta.name.is_empty() {
            return Err(EngineError::InvalidDefinition {
                name: def.meta.name.clone(),
                reason: "component name is empty".to_string(),
            });
        }
        if matches!(&def.default_as, ElementType::Tag(tag) if tag.is_empty()) {
            return Err(EngineError::InvalidDefinition {
                name: def.meta.name.clone(),
                reason: "default element type is an empty tag name".to_string(),
            });
        }
        if self.components.contains_key(&id) {
            return Err(EngineError::DuplicateRegistration {
                name: def.meta.name.clone(),
            });
        }

        debug!(
            component = %id,
            category = %def.meta.category,
            declared = def.contract.len(),
            "Registering component"
        );
        self.components.insert(id.clone(), def);
        Ok(id)
    }

    /// Declared metadata of a component
    pub fn lookup(&self, id: &ComponentId) -> EngineResult<&ComponentMeta> {
        self.definition(id).map(|def| &def.meta)
    }

    /// Full definition of a component
    pub fn definition(&self, id: &ComponentId) -> EngineResult<&ComponentDef> {
        self.components
            .get(id)
            .ok_or_else(|| EngineError::UnknownComponent {
                name: id.to_string(),
            })
    }

    pub fn contains(&self, id: &ComponentId) -> bool {
        self.components.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// All definitions, ordered by name
    pub fn iter(&self) -> impl Iterator<Item = &ComponentDef> {
        let mut defs: Vec<&ComponentDef> = self.components.values().collect();
        defs.sort_by(|a, b| a.meta.name.cmp(&b.meta.name));
        defs.into_iter()
    }

    /// All registered identities, ordered by name
    pub fn names(&self) -> Vec<&ComponentId> {
        let mut names: Vec<&ComponentId> = self.components.keys().collect();
        names.sort();
        names
    }

    /// Sub-components grouped under `parent`, ordered by name
    pub fn children_of(&self, parent: &str) -> Vec<&ComponentDef> {
        self.iter()
            .filter(|def| def.meta.parent.as_deref() == Some(parent))
            .collect()
    }

    /// Metadata chain from `id` up to its root ancestor.
    ///
    /// Stops at the first parent that is not registered. Used for documentation
    /// grouping only.
    pub fn ancestors(&self, id: &ComponentId) -> EngineResult<Vec<&ComponentMeta>> {
        let mut chain = vec![self.lookup(id)?];
        let mut seen: HashSet<&str> = HashSet::from([id.as_str()]);

        while let Some(parent) = chain.last().copied().and_then(|meta| meta.parent.as_deref()) {
            if !seen.insert(parent) {
                break;
            }
            match self.components.get(&ComponentId::new(parent)) {
                Some(def) => chain.push(&def.meta),
                None => break,
            }
        }

        Ok(chain)
    }
}
