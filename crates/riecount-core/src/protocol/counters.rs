//! Counter set: ordered name -> count mapping.
//!
//! Entries keep document order so views render counters in the order they
//! were loaded; a counter seen for the first time is appended. A name -> slot
//! index sits beside the ordered entries so lookups stay O(1) and loading a
//! file is linear in its size.

use std::collections::HashMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, RiecountError};

/// Name used when a request does not carry `name`.
pub const DEFAULT_COUNTER_NAME: &str = "default-counter";

#[derive(Debug, Clone, Default)]
pub struct CounterSet {
    entries: Vec<(String, u64)>,
    index: HashMap<String, usize>,
}

// `index` is derived from `entries`.
impl PartialEq for CounterSet {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for CounterSet {}

impl CounterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count for `name`; absent counters are 0.
    pub fn get(&self, name: &str) -> u64 {
        self.position(name).map(|i| self.entries[i].1).unwrap_or(0)
    }

    /// Add one to `name` and return the new value.
    ///
    /// Fails without touching the set when the counter is already at
    /// `u64::MAX`.
    pub fn increment(&mut self, name: &str) -> Result<u64> {
        match self.position(name) {
            Some(i) => {
                let slot = &mut self.entries[i].1;
                let next = slot.checked_add(1).ok_or_else(|| {
                    RiecountError::Internal(format!("counter overflow: {name}"))
                })?;
                *slot = next;
                Ok(next)
            }
            None => {
                self.append(name.to_string(), 1);
                Ok(1)
            }
        }
    }

    /// Set `name` to `count`, keeping its position if already present.
    pub fn insert(&mut self, name: impl Into<String>, count: u64) {
        let name = name.into();
        match self.position(&name) {
            Some(i) => self.entries[i].1 = count,
            None => self.append(name, count),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate in load order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    fn append(&mut self, name: String, count: u64) {
        self.index.insert(name.clone(), self.entries.len());
        self.entries.push((name, count));
    }
}

impl<K: Into<String>> FromIterator<(K, u64)> for CounterSet {
    fn from_iter<I: IntoIterator<Item = (K, u64)>>(iter: I) -> Self {
        let mut set = CounterSet::new();
        for (k, v) in iter {
            set.insert(k, v);
        }
        set
    }
}

impl Serialize for CounterSet {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

// Duplicate keys: last value wins, first position is kept.
impl<'de> Deserialize<'de> for CounterSet {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CounterSetVisitor;

        impl<'de> Visitor<'de> for CounterSetVisitor {
            type Value = CounterSet;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping counter names to non-negative integers")
            }

            fn visit_map<A>(self, mut access: A) -> std::result::Result<CounterSet, A::Error>
            where
                A: MapAccess<'de>,
            {
                let capacity = access.size_hint().unwrap_or(0);
                let mut set = CounterSet {
                    entries: Vec::with_capacity(capacity),
                    index: HashMap::with_capacity(capacity),
                };
                while let Some((name, count)) = access.next_entry::<String, u64>()? {
                    set.insert(name, count);
                }
                Ok(set)
            }
        }

        deserializer.deserialize_map(CounterSetVisitor)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn absent_counter_is_zero() {
        let set = CounterSet::new();
        assert_eq!(set.get("nope"), 0);
        assert!(!set.contains("nope"));
    }

    #[test]
    fn increment_appends_then_bumps() {
        let mut set: CounterSet = [("a", 5)].into_iter().collect();
        assert_eq!(set.increment("b").unwrap(), 1);
        assert_eq!(set.increment("a").unwrap(), 6);
        let order: Vec<_> = set.iter().map(|(k, _)| k).collect();
        assert_eq!(order, ["a", "b"]);
    }

    #[test]
    fn increment_at_max_is_rejected() {
        let mut set: CounterSet = [("full", u64::MAX)].into_iter().collect();
        let err = set.increment("full").unwrap_err();
        assert_eq!(err.client_code().as_str(), "INTERNAL");
        assert_eq!(set.get("full"), u64::MAX);
    }
}
