use crate::domain::objects::mistake::MistakeRecord;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Mistakes of every compared pair, keyed by pair label in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComparisonReport {
    entries: Vec<(String, Vec<MistakeRecord>)>,
}

impl ComparisonReport {
    /// Adds the mistakes of a pair. A label that is already present keeps its
    /// position and gets the new mistakes.
    pub fn insert(&mut self, label: String, mistakes: Vec<MistakeRecord>) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == label) {
            Some((_, slot)) => *slot = mistakes,
            None => self.entries.push((label, mistakes)),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_mistakes(&self) -> usize {
        self.entries.iter().map(|(_, mistakes)| mistakes.len()).sum()
    }

    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Serialize for ComparisonReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, mistakes) in &self.entries {
            map.serialize_entry(label, mistakes)?;
        }
        map.end()
    }
}
