use crate::error::CommonError;
use crate::result::CommonResult;
use crate::value::PropValue;
use serde::{Deserialize, Serialize};
use std::collections::btree_map;
use std::collections::BTreeMap;

/// A property record: property name to value.
///
/// Backed by an ordered map so iteration and serialisation are deterministic.
/// Key order carries no meaning. The engine never mutates a caller's record;
/// every transformation returns a new one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Props(BTreeMap<String, PropValue>);

impl Props {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Builder-style insert
    pub fn with(mut self, name: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<PropValue>) -> Option<PropValue> {
        self.0.insert(name.into(), value.into())
    }

    pub fn remove(&mut self, name: &str) -> Option<PropValue> {
        self.0.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&PropValue> {
        self.0.get(name)
    }

    /// The value of `name` unless it is missing or `Null`
    pub fn get_present(&self, name: &str) -> Option<&PropValue> {
        self.0.get(name).filter(|value| !value.is_null())
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(PropValue::as_str)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Present means defined and not `Null`
    pub fn is_present(&self, name: &str) -> bool {
        self.get_present(name).is_some()
    }

    pub fn is_truthy(&self, name: &str) -> bool {
        self.0.get(name).map(PropValue::is_truthy).unwrap_or(false)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, PropValue> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `defaults ⊕ self`: every key of `self` wins over the same key in `defaults`
    pub fn merged_over(&self, defaults: &Props) -> Props {
        let mut merged = defaults.clone();
        for (name, value) in &self.0 {
            merged.0.insert(name.clone(), value.clone());
        }
        merged
    }

    /// A copy without the given keys
    pub fn without(&self, names: &[&str]) -> Props {
        self.0
            .iter()
            .filter(|(name, _)| !names.contains(&name.as_str()))
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect()
    }

    /// Parse a JSON object into a property record
    pub fn from_json(source: &str) -> CommonResult<Props> {
        let json: serde_json::Value = serde_json::from_str(source)?;
        match PropValue::try_from(json)? {
            PropValue::Object(props) => Ok(props),
            other => Err(CommonError::NotAnObject {
                found: other.kind().to_string(),
            }),
        }
    }
}

impl FromIterator<(String, PropValue)> for Props {
    fn from_iter<I: IntoIterator<Item = (String, PropValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<(String, PropValue)> for Props {
    fn extend<I: IntoIterator<Item = (String, PropValue)>>(&mut self, iter: I) {
        self.0.extend(iter)
    }
}

impl IntoIterator for Props {
    type Item = (String, PropValue);
    type IntoIter = btree_map::IntoIter<String, PropValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Props {
    type Item = (&'a String, &'a PropValue);
    type IntoIter = btree_map::Iter<'a, String, PropValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Build a [`Props`] record inline.
///
/// ```
/// use stencil_common::props;
///
/// let props = props! { "content" => "Home", "active" => true };
/// assert_eq!(props.get_str("content"), Some("Home"));
/// ```
#[macro_export]
macro_rules! props {
    () => {
        $crate::Props::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {
        $crate::Props::new()$(.with($name, $value))+
    };
}
