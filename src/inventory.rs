//! # Inventory
//!
//! Quantities of typed items, unique per kind.
//!
//! Invariants held after every call:
//! - at most one entry per kind;
//! - every stored quantity is strictly positive (entries that reach zero or
//!   below are dropped on the spot, whether through `consume` or a negative
//!   `add` delta);
//! - stored quantities saturate at `Quantity::MAX` instead of overflowing;
//! - entries keep the order their kind was first seen in.
//!
//! Nothing here fails: a miss is `None`, a declined consume is `false`.

use std::fmt::Debug;

use tracing::{debug, trace};

use crate::symbol::Symbol;

/// Signed item count. Only positive values are ever stored.
pub type Quantity = i64;

/// A `(kind, quantity)` pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Item<K = Symbol> {
    pub kind: K,
    pub quantity: Quantity,
}

impl<K> Item<K> {
    #[inline]
    pub fn new(kind: K, quantity: Quantity) -> Self {
        Self { kind, quantity }
    }
}

/// Ordered item container keyed by kind identity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Inventory<K = Symbol> {
    items: Vec<Item<K>>,
}

impl<K> Default for Inventory<K> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<K: Copy + Eq + Debug> Inventory<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an inventory from a sequence of items; duplicates are summed.
    pub fn from_items<I: IntoIterator<Item = Item<K>>>(items: I) -> Self {
        let mut inv = Self::new();
        inv.add(items);
        inv
    }

    /// Adds each item's quantity to the entry of its kind.
    ///
    /// A kind not yet present is only inserted for a positive quantity; zero or
    /// negative amounts for unknown kinds are dropped. A delta that takes an
    /// existing entry to zero or below removes that entry. Sums saturate at
    /// `Quantity::MAX`.
    pub fn add<I: IntoIterator<Item = Item<K>>>(&mut self, items: I) {
        for item in items {
            self.add_one(item);
        }
    }

    /// Single-item form of [`add`](Self::add).
    pub fn add_one(&mut self, Item { kind, quantity }: Item<K>) {
        match self.position(kind) {
            Some(idx) => {
                let entry = &mut self.items[idx];
                entry.quantity = entry.quantity.saturating_add(quantity);
                if entry.quantity <= 0 {
                    trace!(target: "idle_craft::inventory", ?kind, "entry emptied by add");
                    self.items.remove(idx);
                }
            }
            None if quantity > 0 => self.items.push(Item { kind, quantity }),
            None => {
                trace!(target: "idle_craft::inventory", ?kind, quantity, "discarded non-positive add");
            }
        }
    }

    /// Takes `item.quantity` of `item.kind` out of the inventory.
    ///
    /// Returns `false` without touching anything when the kind is absent, the
    /// stored amount is short, or the requested amount is negative. Consuming
    /// zero of a stored kind succeeds and changes nothing.
    pub fn consume(&mut self, Item { kind, quantity }: Item<K>) -> bool {
        if quantity < 0 {
            debug!(target: "idle_craft::inventory", ?kind, quantity, "declined negative consume");
            return false;
        }
        let Some(idx) = self.position(kind) else {
            debug!(target: "idle_craft::inventory", ?kind, quantity, "declined consume of absent kind");
            return false;
        };
        let entry = &mut self.items[idx];
        if entry.quantity < quantity {
            debug!(
                target: "idle_craft::inventory",
                ?kind,
                requested = quantity,
                available = entry.quantity,
                "declined consume"
            );
            return false;
        }
        entry.quantity -= quantity;
        if entry.quantity <= 0 {
            self.items.remove(idx);
        }
        true
    }

    /// Entry for `kind`, if stored.
    pub fn get(&self, kind: K) -> Option<&Item<K>> {
        self.items.iter().find(|it| it.kind == kind)
    }

    /// Stored quantity of `kind`, zero when absent.
    pub fn quantity(&self, kind: K) -> Quantity {
        self.get(kind).map_or(0, |it| it.quantity)
    }

    /// Entries whose kind is one of `kinds`, in inventory order.
    pub fn filter(&self, kinds: &[K]) -> Vec<&Item<K>> {
        self.items.iter().filter(|it| kinds.contains(&it.kind)).collect()
    }

    /// Whether any entry of `kind` exists.
    pub fn has(&self, kind: K) -> bool {
        self.position(kind).is_some()
    }

    /// Whether `item.kind` is stored with at least `item.quantity`.
    pub fn has_quantity(&self, item: &Item<K>) -> bool {
        self.get(item.kind).is_some_and(|it| it.quantity >= item.quantity)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item<K>> {
        self.items.iter()
    }

    #[inline]
    fn position(&self, kind: K) -> Option<usize> {
        self.items.iter().position(|it| it.kind == kind)
    }
}

impl<K: Copy + Eq + Debug> FromIterator<Item<K>> for Inventory<K> {
    fn from_iter<I: IntoIterator<Item = Item<K>>>(iter: I) -> Self {
        Self::from_items(iter)
    }
}

impl<K: Copy + Eq + Debug> Extend<Item<K>> for Inventory<K> {
    fn extend<I: IntoIterator<Item = Item<K>>>(&mut self, iter: I) {
        self.add(iter);
    }
}

impl<'a, K> IntoIterator for &'a Inventory<K> {
    type Item = &'a Item<K>;
    type IntoIter = std::slice::Iter<'a, Item<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Kind {
        Lumber,
        Berry,
        Water,
    }

    fn item(kind: Kind, quantity: Quantity) -> Item<Kind> {
        Item::new(kind, quantity)
    }

    #[test]
    fn constructor_sums_duplicates() {
        let inv = Inventory::from_items([item(Kind::Lumber, 5), item(Kind::Lumber, 5)]);
        assert_eq!(inv.filter(&[Kind::Lumber]).len(), 1);
        assert_eq!(inv.get(Kind::Lumber).map(|it| it.quantity), Some(10));
    }

    #[test]
    fn add_increases_existing_entry() {
        let mut inv = Inventory::from_items([item(Kind::Lumber, 5)]);
        inv.add([item(Kind::Lumber, 5)]);
        assert_eq!(inv.quantity(Kind::Lumber), 10);
    }

    #[test]
    fn add_discards_non_positive_for_new_kind() {
        let mut inv = Inventory::<Kind>::new();
        inv.add([item(Kind::Lumber, -1), item(Kind::Berry, 0)]);
        assert!(inv.get(Kind::Lumber).is_none());
        assert!(inv.get(Kind::Berry).is_none());
        assert!(inv.is_empty());
    }

    #[test]
    fn negative_add_reduces_and_prunes() {
        let mut inv = Inventory::from_items([item(Kind::Lumber, 5)]);
        inv.add_one(item(Kind::Lumber, -2));
        assert_eq!(inv.quantity(Kind::Lumber), 3);
        inv.add_one(item(Kind::Lumber, -7));
        assert!(inv.get(Kind::Lumber).is_none());
        assert!(inv.is_empty());
    }

    #[test]
    fn consume_decrements() {
        let mut inv = Inventory::from_items([item(Kind::Lumber, 5)]);
        assert!(inv.consume(item(Kind::Lumber, 1)));
        assert_eq!(inv.quantity(Kind::Lumber), 4);
    }

    #[test]
    fn consume_more_than_stored_is_declined() {
        let mut inv = Inventory::from_items([item(Kind::Lumber, 5)]);
        assert!(!inv.consume(item(Kind::Lumber, 10)));
        assert_eq!(inv.quantity(Kind::Lumber), 5);
    }

    #[test]
    fn consume_absent_kind_is_declined() {
        let mut inv = Inventory::from_items([item(Kind::Lumber, 5)]);
        assert!(!inv.consume(item(Kind::Berry, 1)));
        assert_eq!(inv.len(), 1);
    }

    #[test]
    fn consume_zero_succeeds_and_negative_is_declined() {
        let mut inv = Inventory::from_items([item(Kind::Lumber, 5)]);
        assert!(inv.consume(item(Kind::Lumber, 0)));
        assert_eq!(inv.quantity(Kind::Lumber), 5);
        assert!(!inv.consume(item(Kind::Lumber, -3)));
        assert_eq!(inv.quantity(Kind::Lumber), 5);
        assert!(!inv.consume(item(Kind::Berry, 0)));
    }

    #[test]
    fn large_adds_saturate() {
        let mut inv = Inventory::from_items([item(Kind::Lumber, Quantity::MAX - 1)]);
        inv.add([item(Kind::Lumber, 10), item(Kind::Lumber, Quantity::MAX)]);
        assert_eq!(inv.quantity(Kind::Lumber), Quantity::MAX);
        inv.add_one(item(Kind::Lumber, Quantity::MIN));
        assert!(inv.is_empty());
    }

    #[test]
    fn consume_to_zero_removes_entry() {
        let mut inv = Inventory::from_items([item(Kind::Lumber, 5)]);
        assert!(inv.consume(item(Kind::Lumber, 5)));
        assert!(inv.get(Kind::Lumber).is_none());
    }

    #[test]
    fn filter_returns_matching_kinds_in_order() {
        let mut inv = Inventory::from_items([item(Kind::Lumber, 5)]);
        inv.add([item(Kind::Water, 1), item(Kind::Berry, 22)]);
        let found = inv.filter(&[Kind::Berry, Kind::Lumber]);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].kind, Kind::Lumber);
        assert_eq!(found[1].kind, Kind::Berry);
    }

    #[test]
    fn has_checks_kind_and_quantity() {
        let inv = Inventory::from_items([item(Kind::Lumber, 5)]);
        assert!(inv.has(Kind::Lumber));
        assert!(!inv.has(Kind::Berry));
        assert!(inv.has_quantity(&item(Kind::Lumber, 4)));
        assert!(inv.has_quantity(&item(Kind::Lumber, 5)));
        assert!(!inv.has_quantity(&item(Kind::Lumber, 6)));
        assert!(!inv.has_quantity(&item(Kind::Berry, 1)));
    }

    #[test]
    fn clear_empties() {
        let mut inv = Inventory::from_items([item(Kind::Lumber, 5), item(Kind::Berry, 5)]);
        assert_eq!(inv.filter(&[Kind::Lumber, Kind::Berry]).len(), 2);
        inv.clear();
        assert!(inv.filter(&[Kind::Lumber, Kind::Berry]).is_empty());
    }

    #[test]
    fn collect_and_extend_go_through_add() {
        let mut inv: Inventory<Kind> =
            [item(Kind::Water, 2), item(Kind::Water, 3), item(Kind::Berry, -1)].into_iter().collect();
        assert_eq!(inv.len(), 1);
        inv.extend([item(Kind::Berry, 4)]);
        let kinds: Vec<Kind> = (&inv).into_iter().map(|it| it.kind).collect();
        assert_eq!(kinds, vec![Kind::Water, Kind::Berry]);
    }
}
