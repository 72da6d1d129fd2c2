//! Insertion-ordered tallies used for grouping and top-k selection.
//!
//! Keys keep the order in which they were first seen, and every ranking is a
//! stable sort over that order, so ties always go to the first-encountered key.

use std::collections::HashMap;
use std::hash::Hash;

#[derive(Debug, Clone)]
pub struct Tally<K, V> {
    index: HashMap<K, usize>,
    entries: Vec<(K, V)>,
}

impl<K, V> Default for Tally<K, V> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }
}

impl<K: Eq + Hash + Clone, V: Default> Tally<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mutable access to the value for `key`, inserting a default on first sight.
    pub fn entry(&mut self, key: K) -> &mut V {
        let idx = match self.index.get(&key) {
            Some(&idx) => idx,
            None => {
                let idx = self.entries.len();
                self.index.insert(key.clone(), idx);
                self.entries.push((key, V::default()));
                idx
            }
        };
        &mut self.entries[idx].1
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.index.get(key).map(|&idx| &self.entries[idx].1)
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }
}

impl<K: Eq + Hash + Clone> Tally<K, usize> {
    pub fn increment(&mut self, key: K) {
        *self.entry(key) += 1;
    }

    /// The `k` highest counts, descending; equal counts keep first-seen order.
    pub fn top(&self, k: usize) -> Vec<(K, usize)> {
        let mut ranked: Vec<(K, usize)> = self.entries.clone();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(k);
        ranked
    }
}

/// First entry whose metric strictly exceeds `floor` and every earlier
/// candidate; ties keep the earlier entry.
pub fn first_max_by<K, V, F>(tally: &Tally<K, V>, floor: f64, metric: F) -> Option<(&K, f64)>
where
    K: Eq + Hash + Clone,
    V: Default,
    F: Fn(&V) -> f64,
{
    let mut best: Option<(&K, f64)> = None;
    let mut best_value = floor;
    for (key, value) in tally.iter() {
        let m = metric(value);
        if m > best_value {
            best_value = m;
            best = Some((key, m));
        }
    }
    best
}
