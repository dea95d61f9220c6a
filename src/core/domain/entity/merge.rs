//! Update input for [`Entity::merge_deep_with`](super::Entity::merge_deep_with).

use super::Serializable;
use serde_json::Value;
use std::fmt;

/// A single merge value: either raw plain data or a nested entity that is
/// flattened with [`Serializable::to_record`] before the overlay.
pub enum MergeValue {
    Raw(Value),
    Entity(Box<dyn Serializable>),
}

impl MergeValue {
    pub fn entity<E: Serializable + 'static>(entity: E) -> Self {
        MergeValue::Entity(Box::new(entity))
    }

    /// Flattens the value to plain data.
    pub fn into_value(self) -> Value {
        match self {
            MergeValue::Raw(value) => value,
            MergeValue::Entity(entity) => Value::Object(entity.to_record()),
        }
    }
}

impl From<Value> for MergeValue {
    fn from(value: Value) -> Self {
        MergeValue::Raw(value)
    }
}

impl fmt::Debug for MergeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MergeValue::Raw(value) => f.debug_tuple("Raw").field(value).finish(),
            MergeValue::Entity(entity) => f.debug_tuple("Entity").field(&entity.to_record()).finish(),
        }
    }
}

/// A partial update keyed by accessor name (e.g. `dnsPort`).
///
/// Setting the same accessor twice keeps the last value.
#[derive(Debug, Default)]
pub struct Partial {
    entries: Vec<(String, MergeValue)>,
}

impl Partial {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a raw value.
    ///
    /// # Examples
    ///
    /// ```
    /// use entity_record::Partial;
    ///
    /// let partial = Partial::new().set("dnsPort", 9953).set("webPort", 8080);
    /// assert_eq!(partial.len(), 2);
    /// ```
    pub fn set(mut self, accessor: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(accessor, MergeValue::Raw(value.into()));
        self
    }

    /// Sets a nested entity.
    pub fn set_entity<E: Serializable + 'static>(
        mut self,
        accessor: impl Into<String>,
        entity: E,
    ) -> Self {
        self.insert(accessor, MergeValue::entity(entity));
        self
    }

    pub fn insert(&mut self, accessor: impl Into<String>, value: MergeValue) {
        let accessor = accessor.into();
        match self.entries.iter_mut().find(|(key, _)| *key == accessor) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((accessor, value)),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> impl Iterator<Item = (String, MergeValue)> {
        self.entries.into_iter()
    }
}
