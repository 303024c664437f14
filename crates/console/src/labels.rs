//! Label registries for counters and timers.

use std::time::Instant;

/// Entries stored in a [`LabelRegistry`] expose their label.
pub trait Labeled {
    fn label(&self) -> &str;
}

/// Ordered collection of labeled entries with first-match lookup.
///
/// Registries hold one entry per distinct label a page uses, so lookup is a
/// linear scan in insertion order.
#[derive(Debug)]
pub struct LabelRegistry<E> {
    entries: Vec<E>,
}

impl<E> LabelRegistry<E> {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<E: Labeled> LabelRegistry<E> {
    /// Find the first entry with the given label.
    pub fn find(&self, label: &str) -> Option<&E> {
        self.entries.iter().find(|e| e.label() == label)
    }

    pub fn find_mut(&mut self, label: &str) -> Option<&mut E> {
        self.entries.iter_mut().find(|e| e.label() == label)
    }

    /// Find the entry with the given label, inserting a new one if absent.
    pub fn get_or_create(&mut self, label: &str, create: impl FnOnce() -> E) -> &mut E {
        let index = match self.entries.iter().position(|e| e.label() == label) {
            Some(index) => index,
            None => {
                self.entries.push(create());
                self.entries.len() - 1
            }
        };
        &mut self.entries[index]
    }
}

impl<E> Default for LabelRegistry<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-label invocation counter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterEntry {
    pub label: String,
    pub count: u64,
}

impl CounterEntry {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into(), count: 0 }
    }
}

impl Labeled for CounterEntry {
    fn label(&self) -> &str {
        &self.label
    }
}

/// Per-label timer anchored to a monotonic start instant.
#[derive(Clone, Debug)]
pub struct TimerEntry {
    pub label: String,
    pub started: Instant,
}

impl TimerEntry {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into(), started: Instant::now() }
    }

    /// Elapsed whole milliseconds since the timer started.
    pub fn elapsed_millis(&self) -> u128 {
        self.started.elapsed().as_millis()
    }
}

impl Labeled for TimerEntry {
    fn label(&self) -> &str {
        &self.label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_or_create_inserts_once() {
        let mut registry = LabelRegistry::new();
        registry.get_or_create("a", || CounterEntry::new("a")).count += 1;
        registry.get_or_create("a", || CounterEntry::new("a")).count += 1;
        registry.get_or_create("b", || CounterEntry::new("b")).count += 1;

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.find("a").map(|e| e.count), Some(2));
        assert_eq!(registry.find("b").map(|e| e.count), Some(1));
    }

    #[test]
    fn test_find_missing_label() {
        let registry: LabelRegistry<CounterEntry> = LabelRegistry::new();
        assert!(registry.find("nope").is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_timer_elapsed_is_monotonic() {
        let timer = TimerEntry::new("t");
        let first = timer.elapsed_millis();
        let second = timer.elapsed_millis();
        assert!(second >= first);
    }
}
