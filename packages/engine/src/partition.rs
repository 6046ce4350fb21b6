//! Splitting a component's properties into the ones it consumes and the ones it
//! forwards to the underlying node.
//!
//! A component's declared set is exactly its own contract plus the engine's
//! reserved names. Parent links are documentation grouping and contribute
//! nothing.

use crate::definition::ComponentDef;
use crate::error::EngineResult;
use crate::registry::Registry;
use std::collections::BTreeSet;
use stencil_common::{ComponentId, Props};

/// Names the engine always treats as handled: list identity and attachment keys
pub const RESERVED_PROPS: [&str; 3] = ["childKey", "key", "ref"];

/// Result of [`partition`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Partition {
    /// Properties the component consumes
    pub handled: Props,
    /// Properties forwarded verbatim to the rendered node
    pub unhandled: Props,
}

/// Every name a component consumes, reserved names included
pub fn declared_names(def: &ComponentDef) -> BTreeSet<&str> {
    def.contract
        .declared_names()
        .chain(RESERVED_PROPS.iter().copied())
        .collect()
}

/// Partition `props` against a definition
pub fn partition_props(def: &ComponentDef, props: &Props) -> Partition {
    let mut result = Partition::default();

    for (name, value) in props {
        if is_handled(def, name) {
            result.handled.insert(name.clone(), value.clone());
        } else {
            result.unhandled.insert(name.clone(), value.clone());
        }
    }

    result
}

fn is_handled(def: &ComponentDef, name: &str) -> bool {
    def.contract.declares(name) || RESERVED_PROPS.contains(&name)
}

/// Partition `props` for the registered component `id`
pub fn partition(registry: &Registry, id: &ComponentId, props: &Props) -> EngineResult<Partition> {
    let def = registry.definition(id)?;
    Ok(partition_props(def, props))
}

/// Only the forwarded half of [`partition`]
pub fn unhandled_props(registry: &Registry, id: &ComponentId, props: &Props) -> EngineResult<Props> {
    partition(registry, id, props).map(|p| p.unhandled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::meta::{Category, ComponentMeta};
    use crate::render::Render;
    use std::collections::HashSet;
    use stencil_common::{props, ElementType, PropValue, ResolvedNode};
    use stencil_validator::{Contract, Validator};

    fn render(scope: &Render<'_>) -> EngineResult<ResolvedNode> {
        Ok(scope.element("content"))
    }

    fn registry() -> Registry {
        let mut registry = Registry::new();
        registry
            .register(
                ComponentDef::new(
                    ComponentMeta::new("Card", Category::View),
                    ElementType::tag("div"),
                    render,
                )
                .with_contract(
                    Contract::new()
                        .prop("as", Validator::ElementType)
                        .prop("className", Validator::String)
                        .prop("raised", Validator::Bool),
                ),
            )
            .unwrap();
        registry
            .register(
                ComponentDef::new(
                    ComponentMeta::new("CardContent", Category::View).with_parent("Card"),
                    ElementType::tag("div"),
                    render,
                )
                .with_contract(Contract::new().prop("extra", Validator::Bool)),
            )
            .unwrap();
        registry
    }

    #[test]
    fn test_undeclared_props_are_forwarded() {
        let registry = registry();
        let props = props! {
            "raised" => true,
            "className" => "wide",
            "data-testid" => "card",
            "tabIndex" => 0,
        };

        let result = partition(&registry, &ComponentId::new("Card"), &props).unwrap();
        assert_eq!(result.handled, props! { "raised" => true, "className" => "wide" });
        assert_eq!(result.unhandled, props! { "data-testid" => "card", "tabIndex" => 0 });
    }

    #[test]
    fn test_reserved_props_are_always_handled() {
        let registry = registry();
        let props = props! { "key" => "a", "ref" => PropValue::handler("attach"), "childKey" => "b", "id" => "x" };

        let rest = unhandled_props(&registry, &ComponentId::new("Card"), &props).unwrap();
        assert_eq!(rest, props! { "id" => "x" });
    }

    #[test]
    fn test_parent_contract_is_not_inherited() {
        let registry = registry();
        let props = props! { "extra" => true, "raised" => true };

        let result = partition(&registry, &ComponentId::new("CardContent"), &props).unwrap();
        assert_eq!(result.handled, props! { "extra" => true });
        assert_eq!(result.unhandled, props! { "raised" => true });
    }

    #[test]
    fn test_partition_is_complete_and_disjoint() {
        let registry = registry();
        let id = ComponentId::new("Card");
        let def = registry.definition(&id).unwrap();
        let declared = declared_names(def);

        let records = [
            Props::new(),
            props! { "raised" => true },
            props! { "onClick" => PropValue::handler("go"), "key" => "k", "as" => "a" },
            props! { "className" => "x", "style" => props! { "color" => "red" }, "ref" => "r" },
        ];

        for props in records {
            let result = partition(&registry, &id, &props).unwrap();
            let handled: HashSet<&str> = result.handled.keys().collect();
            let unhandled: HashSet<&str> = result.unhandled.keys().collect();
            let all: HashSet<&str> = props.keys().collect();

            assert!(handled.is_disjoint(&unhandled));
            assert_eq!(handled.union(&unhandled).copied().collect::<HashSet<_>>(), all);
            assert!(handled.iter().all(|name| declared.contains(name)));
        }
    }

    #[test]
    fn test_unknown_component() {
        let err = partition(&registry(), &ComponentId::new("Menu"), &Props::new()).unwrap_err();
        assert!(matches!(err, EngineError::UnknownComponent { .. }));
    }
}
