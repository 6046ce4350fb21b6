use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Documentation category of a component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Element,
    Collection,
    View,
    Module,
    Behavior,
    Addon,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Element => "element",
            Category::Collection => "collection",
            Category::View => "view",
            Category::Module => "module",
            Category::Behavior => "behavior",
            Category::Addon => "addon",
        };
        f.write_str(name)
    }
}

/// Declared metadata of a component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentMeta {
    pub name: String,
    /// Grouping for documentation only; properties are never inherited
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    pub category: Category,
    /// Enumerated values accepted by enum-like properties
    #[serde(default)]
    pub prop_domains: BTreeMap<String, Vec<String>>,
}

impl ComponentMeta {
    pub fn new(name: impl Into<String>, category: Category) -> Self {
        Self {
            name: name.into(),
            parent: None,
            category,
            prop_domains: BTreeMap::new(),
        }
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn with_domain<I, S>(mut self, prop: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prop_domains
            .insert(prop.into(), values.into_iter().map(Into::into).collect());
        self
    }

    pub fn domain(&self, prop: &str) -> Option<&[String]> {
        self.prop_domains.get(prop).map(Vec::as_slice)
    }
}
