use serde::{ser::SerializeMap, Serialize, Serializer};
use std::collections::{hash_map::Entry, HashMap};

use super::DailyValue;

/// Insertion-ordered mapping of date to value.
///
/// A repeated date overwrites the earlier value but keeps the position where
/// the date was first seen, so rows from several stations on the same day
/// collapse to whichever row came last.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailySeries {
    entries: Vec<(String, Option<f64>)>,
    positions: HashMap<String, usize>,
}

impl DailySeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, date: String, value: Option<f64>) {
        match self.positions.entry(date) {
            Entry::Occupied(existing) => self.entries[*existing.get()].1 = value,
            Entry::Vacant(slot) => {
                self.entries.push((slot.key().clone(), value));
                slot.insert(self.entries.len() - 1);
            }
        }
    }

    /// Drops the dates, keeping values in insertion order
    pub fn into_values(self) -> Vec<Option<f64>> {
        self.entries.into_iter().map(|(_, value)| value).collect()
    }
}

#[cfg(test)]
impl DailySeries {
    fn get(&self, date: &str) -> Option<Option<f64>> {
        self.positions.get(date).map(|&idx| self.entries[idx].1)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn dates(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(date, _)| date.as_str())
    }
}

impl FromIterator<DailyValue> for DailySeries {
    fn from_iter<I: IntoIterator<Item = DailyValue>>(iter: I) -> Self {
        let mut series = DailySeries::new();
        for row in iter {
            series.insert(row.date, row.value);
        }
        series
    }
}

impl Serialize for DailySeries {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (date, value) in &self.entries {
            map.serialize_entry(date, value)?;
        }
        map.end()
    }
}
