//! Element-type resolution.
//!
//! Precedence, highest first:
//! 1. an explicit `as` property (tag name or component reference)
//! 2. the component's [`TypeOverride`] strategy
//! 3. the component's declared default element type

use crate::definition::ComponentDef;
use stencil_common::{ElementType, PropValue, Props};

/// Condition over a property record
#[derive(Debug, Clone, PartialEq)]
pub enum PropPredicate {
    /// Any of the named properties is truthy
    AnyTruthy(Vec<String>),
    /// All of the named properties are truthy
    AllTruthy(Vec<String>),
    /// The named property equals the value
    Equals(String, PropValue),
}

impl PropPredicate {
    pub fn any_truthy<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PropPredicate::AnyTruthy(names.into_iter().map(Into::into).collect())
    }

    pub fn all_truthy<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PropPredicate::AllTruthy(names.into_iter().map(Into::into).collect())
    }

    pub fn matches(&self, props: &Props) -> bool {
        match self {
            PropPredicate::AnyTruthy(names) => names.iter().any(|name| props.is_truthy(name)),
            PropPredicate::AllTruthy(names) => {
                !names.is_empty() && names.iter().all(|name| props.is_truthy(name))
            }
            PropPredicate::Equals(name, value) => props.get(name) == Some(value),
        }
    }
}

/// Per-component rule that can replace the default element type
#[derive(Debug, Clone, PartialEq, Default)]
pub enum TypeOverride {
    #[default]
    NoOverride,
    /// Always render as this type
    FixedTag(ElementType),
    /// Render as `tag` when the predicate holds
    PropertyDependentTag { when: PropPredicate, tag: ElementType },
}

impl TypeOverride {
    pub fn when(when: PropPredicate, tag: ElementType) -> Self {
        TypeOverride::PropertyDependentTag { when, tag }
    }

    /// The override's answer for `props`, if it has one
    pub fn evaluate(&self, props: &Props) -> Option<&ElementType> {
        match self {
            TypeOverride::NoOverride => None,
            TypeOverride::FixedTag(tag) => Some(tag),
            TypeOverride::PropertyDependentTag { when, tag } => when.matches(props).then_some(tag),
        }
    }
}

/// Resolve the element type for `props` from explicit parts
pub fn resolve_element_type(
    default: &ElementType,
    rule: &TypeOverride,
    props: &Props,
) -> ElementType {
    if let Some(explicit) = props.get("as").and_then(ElementType::from_value) {
        return explicit;
    }
    if let Some(computed) = rule.evaluate(props) {
        return computed.clone();
    }
    default.clone()
}

/// Resolve the element type a component renders as for `props`
pub fn resolve_type(def: &ComponentDef, props: &Props) -> ElementType {
    resolve_element_type(&def.default_as, &def.type_override, props)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stencil_common::{props, ComponentId};

    fn link_rule() -> TypeOverride {
        TypeOverride::when(
            PropPredicate::any_truthy(["onClick", "href"]),
            ElementType::tag("a"),
        )
    }

    #[test]
    fn test_explicit_as_wins_over_override() {
        let props = props! { "as" => "span", "href" => "/x" };
        let resolved = resolve_element_type(&ElementType::tag("div"), &link_rule(), &props);
        assert_eq!(resolved, ElementType::tag("span"));
    }

    #[test]
    fn test_override_wins_over_default() {
        let props = props! { "onClick" => PropValue::handler("select") };
        let resolved = resolve_element_type(&ElementType::tag("div"), &link_rule(), &props);
        assert_eq!(resolved, ElementType::tag("a"));
    }

    #[test]
    fn test_default_when_nothing_else_applies() {
        let props = props! { "href" => "" };
        let resolved = resolve_element_type(&ElementType::tag("div"), &link_rule(), &props);
        assert_eq!(resolved, ElementType::tag("div"));
    }

    #[test]
    fn test_as_component_reference() {
        let props = props! { "as" => ComponentId::new("Link") };
        let resolved =
            resolve_element_type(&ElementType::tag("div"), &TypeOverride::NoOverride, &props);
        assert_eq!(resolved, ElementType::component("Link"));
    }

    #[test]
    fn test_invalid_as_falls_through() {
        let props = props! { "as" => 42 };
        let rule = TypeOverride::FixedTag(ElementType::tag("section"));
        let resolved = resolve_element_type(&ElementType::tag("div"), &rule, &props);
        assert_eq!(resolved, ElementType::tag("section"));
    }

    #[test]
    fn test_predicates() {
        let props = props! { "label" => "2,048", "attached" => false, "size" => "large" };
        assert!(PropPredicate::any_truthy(["label", "attached"]).matches(&props));
        assert!(!PropPredicate::all_truthy(["label", "attached"]).matches(&props));
        assert!(!PropPredicate::all_truthy(Vec::<String>::new()).matches(&props));
        assert!(PropPredicate::Equals("size".into(), PropValue::from("large")).matches(&props));
    }
}
