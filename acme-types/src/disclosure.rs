/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Open/closed state for menus and accordions.

use std::collections::BTreeSet;

/// A single independent disclosure, e.g. the mobile navigation drawer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Disclosure {
    open: bool,
}

impl Disclosure {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Flips the state and returns the new one.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// A link inside the disclosure was activated.
    pub fn follow_link(&mut self) {
        self.close();
    }
}

/// Independent disclosures keyed by identifier. Any number may be open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisclosureSet<K: Ord> {
    open: BTreeSet<K>,
}

impl<K: Ord> Default for DisclosureSet<K> {
    fn default() -> Self {
        Self {
            open: BTreeSet::new(),
        }
    }
}

impl<K: Ord + Clone> DisclosureSet<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self, id: &K) -> bool {
        self.open.contains(id)
    }

    pub fn open(&mut self, id: K) {
        self.open.insert(id);
    }

    pub fn close(&mut self, id: &K) {
        self.open.remove(id);
    }

    pub fn toggle(&mut self, id: K) -> bool {
        if self.open.remove(&id) {
            false
        } else {
            self.open.insert(id);
            true
        }
    }

    pub fn open_ids(&self) -> impl Iterator<Item = &K> {
        self.open.iter()
    }
}

/// Which entry of a single-select group is expanded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Expanded<K> {
    #[default]
    Closed,
    Open(K),
}

/// A single-select accordion: at most one entry is open at a time.
///
/// In a collapsible group, re-triggering the open entry closes it. A
/// non-collapsible group keeps the entry open once something is expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccordionGroup<K> {
    expanded: Expanded<K>,
    collapsible: bool,
}

impl<K: PartialEq> AccordionGroup<K> {
    pub fn collapsible() -> Self {
        Self {
            expanded: Expanded::Closed,
            collapsible: true,
        }
    }

    pub fn non_collapsible() -> Self {
        Self {
            expanded: Expanded::Closed,
            collapsible: false,
        }
    }

    pub fn is_collapsible(&self) -> bool {
        self.collapsible
    }

    pub fn state(&self) -> &Expanded<K> {
        &self.expanded
    }

    pub fn expanded(&self) -> Option<&K> {
        match &self.expanded {
            Expanded::Open(id) => Some(id),
            Expanded::Closed => None,
        }
    }

    pub fn is_open(&self, id: &K) -> bool {
        self.expanded() == Some(id)
    }

    /// Opens `id`, closing whatever else was open.
    pub fn open(&mut self, id: K) {
        self.expanded = Expanded::Open(id);
    }

    /// Closes `id` if it is the open entry.
    pub fn close(&mut self, id: &K) {
        if self.is_open(id) && self.collapsible {
            self.expanded = Expanded::Closed;
        }
    }

    /// Returns whether `id` is open afterwards.
    pub fn toggle(&mut self, id: K) -> bool {
        if self.is_open(&id) {
            self.close(&id);
            self.is_open(&id)
        } else {
            self.open(id);
            true
        }
    }
}

impl<K: PartialEq> Default for AccordionGroup<K> {
    fn default() -> Self {
        Self::collapsible()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disclosure_starts_closed() {
        assert!(!Disclosure::new().is_open());
        assert!(!DisclosureSet::<u8>::new().is_open(&0));
        assert_eq!(AccordionGroup::<u8>::default().state(), &Expanded::Closed);
    }

    #[test]
    fn disclosure_toggle_flips() {
        let mut menu = Disclosure::new();
        assert!(menu.toggle());
        assert!(menu.is_open());
        assert!(!menu.toggle());
        assert!(!menu.is_open());
    }

    #[test]
    fn following_a_link_closes_the_menu() {
        let mut menu = Disclosure::new();
        menu.open();
        menu.follow_link();
        assert!(!menu.is_open());

        // already closed stays closed
        menu.follow_link();
        assert!(!menu.is_open());
    }

    #[test]
    fn disclosure_set_entries_are_independent() {
        let mut set = DisclosureSet::new();
        set.open("a");
        assert!(set.toggle("b"));
        assert!(set.is_open(&"a") && set.is_open(&"b"));
        assert!(!set.toggle("a"));
        set.close(&"c");
        assert_eq!(set.open_ids().copied().collect::<Vec<_>>(), vec!["b"]);
    }

    #[test]
    fn opening_another_entry_closes_the_first() {
        let mut faq = AccordionGroup::collapsible();
        faq.open('A');
        faq.toggle('B');
        assert!(faq.is_open(&'B'));
        assert!(!faq.is_open(&'A'));
        assert!(!faq.is_open(&'C'));
        assert_eq!(faq.state(), &Expanded::Open('B'));
    }

    #[test]
    fn collapsible_group_closes_on_retrigger() {
        let mut faq = AccordionGroup::collapsible();
        assert!(faq.toggle(1));
        assert!(!faq.toggle(1));
        assert_eq!(faq.expanded(), None);
    }

    #[test]
    fn non_collapsible_group_keeps_entry_open() {
        let mut tabs = AccordionGroup::non_collapsible();
        assert!(tabs.toggle(1));
        assert!(tabs.toggle(1));
        tabs.close(&1);
        assert_eq!(tabs.expanded(), Some(&1));
        assert!(tabs.toggle(2));
        assert_eq!(tabs.expanded(), Some(&2));
    }

    #[test]
    fn closing_a_closed_entry_leaves_the_open_one() {
        let mut faq = AccordionGroup::collapsible();
        faq.open(0);
        faq.close(&2);
        assert!(faq.is_open(&0));
    }
}
