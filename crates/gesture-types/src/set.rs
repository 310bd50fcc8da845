use std::collections::HashSet;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::GestureError;
use crate::gesture::Gesture;

/// The gestures of one character or word, in stroke order.
///
/// Serialized as a plain JSON array. Deserialization sorts by `index` and
/// rejects repeated indices.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Gesture>", into = "Vec<Gesture>")]
pub struct GestureSet {
    gestures: Vec<Gesture>,
}

impl GestureSet {
    /// Order gestures by their `index`.
    pub fn from_unordered(mut gestures: Vec<Gesture>) -> Result<Self, GestureError> {
        let mut seen = HashSet::with_capacity(gestures.len());
        if let Some(dup) = gestures.iter().find(|g| !seen.insert(g.index)) {
            return Err(GestureError::DuplicateIndex(dup.index));
        }
        gestures.sort_by_key(|g| g.index);
        Ok(Self { gestures })
    }

    pub fn from_json(json: &str) -> Result<Self, GestureError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, GestureError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, GestureError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The gesture with stroke index `index`.
    pub fn get(&self, index: u32) -> Option<&Gesture> {
        self.gestures
            .binary_search_by_key(&index, |g| g.index)
            .ok()
            .map(|pos| &self.gestures[pos])
    }

    /// The gesture at position `pos` in stroke order.
    pub fn nth(&self, pos: usize) -> Option<&Gesture> {
        self.gestures.get(pos)
    }

    pub fn gestures(&self) -> &[Gesture] {
        &self.gestures
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Gesture> {
        self.gestures.iter()
    }

    pub fn len(&self) -> usize {
        self.gestures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gestures.is_empty()
    }

    /// Time to replay every gesture back to back.
    pub fn total_duration(&self) -> Duration {
        Duration::from_millis(self.gestures.iter().map(|g| g.duration).sum())
    }
}

impl TryFrom<Vec<Gesture>> for GestureSet {
    type Error = GestureError;

    fn try_from(gestures: Vec<Gesture>) -> Result<Self, Self::Error> {
        Self::from_unordered(gestures)
    }
}

impl From<GestureSet> for Vec<Gesture> {
    fn from(set: GestureSet) -> Self {
        set.gestures
    }
}

impl<'a> IntoIterator for &'a GestureSet {
    type Item = &'a Gesture;
    type IntoIter = std::slice::Iter<'a, Gesture>;

    fn into_iter(self) -> Self::IntoIter {
        self.gestures.iter()
    }
}
