//! Nine-slot stacking hotbar
//!
//! The only inventory in the game. A slot is either empty or holds a stack
//! with a positive count; stacks are unbounded.

use super::{ItemKind, ItemStack};
use crate::constants::gameplay::HOTBAR_SLOTS;

/// Player's hotbar
#[derive(Debug, Clone, PartialEq)]
pub struct Hotbar {
    slots: [Option<ItemStack>; HOTBAR_SLOTS],
    selected: usize,
}

impl Hotbar {
    /// Create an empty hotbar with the first slot selected
    pub fn new() -> Self {
        Self {
            slots: [None; HOTBAR_SLOTS],
            selected: 0,
        }
    }

    /// Add one unit of `item`.
    ///
    /// Merges into the first slot already holding the item, otherwise fills
    /// the first empty slot. Returns `false` when neither exists; the item is
    /// then lost.
    pub fn add_item(&mut self, item: ItemKind) -> bool {
        if let Some(stack) = self.slots.iter_mut().flatten().find(|s| s.item == item) {
            stack.count += 1;
            return true;
        }

        match self.slots.iter_mut().find(|slot| slot.is_none()) {
            Some(slot) => {
                *slot = Some(ItemStack::single(item));
                true
            }
            None => false,
        }
    }

    /// Take one unit from the selected slot, clearing it at zero
    pub fn take_selected(&mut self) -> Option<ItemKind> {
        let slot = &mut self.slots[self.selected];
        let stack = slot.as_mut()?;
        let item = stack.item;

        stack.count -= 1;
        if stack.count == 0 {
            *slot = None;
        }
        Some(item)
    }

    pub fn selected_stack(&self) -> Option<&ItemStack> {
        self.slots[self.selected].as_ref()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Select a slot; out-of-range indices are ignored
    pub fn select(&mut self, index: usize) {
        if index < HOTBAR_SLOTS {
            self.selected = index;
        }
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % HOTBAR_SLOTS;
    }

    pub fn select_previous(&mut self) {
        self.selected = (self.selected + HOTBAR_SLOTS - 1) % HOTBAR_SLOTS;
    }

    pub fn slots(&self) -> &[Option<ItemStack>] {
        &self.slots
    }

    pub fn slot(&self, index: usize) -> Option<&ItemStack> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Total units of `item` across all slots
    pub fn count_of(&self, item: ItemKind) -> u32 {
        self.slots
            .iter()
            .flatten()
            .filter(|s| s.item == item)
            .map(|s| s.count)
            .sum()
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }
}

impl Default for Hotbar {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stacks_before_filling_empty_slot() {
        let mut hotbar = Hotbar::new();
        assert!(hotbar.add_item(ItemKind::Dirt));
        assert!(hotbar.add_item(ItemKind::Stone));
        assert!(hotbar.add_item(ItemKind::Dirt));

        assert_eq!(hotbar.slot(0), Some(&ItemStack::new(ItemKind::Dirt, 2)));
        assert_eq!(hotbar.slot(1), Some(&ItemStack::new(ItemKind::Stone, 1)));
        assert_eq!(hotbar.slot(2), None);
    }

    #[test]
    fn test_merges_into_later_slot_even_with_earlier_gap() {
        let mut hotbar = Hotbar::new();
        hotbar.add_item(ItemKind::Dirt);
        hotbar.add_item(ItemKind::Wood);
        hotbar.take_selected(); // empties slot 0

        assert!(hotbar.add_item(ItemKind::Wood));
        assert_eq!(hotbar.slot(0), None);
        assert_eq!(hotbar.count_of(ItemKind::Wood), 2);
    }

    #[test]
    fn test_full_hotbar_drops_new_item() {
        let mut hotbar = Hotbar::new();
        hotbar.slots = [Some(ItemStack::single(ItemKind::Dirt)); HOTBAR_SLOTS];
        assert!(hotbar.is_full());

        // Existing type still stacks into the first matching slot
        assert!(hotbar.add_item(ItemKind::Dirt));
        assert_eq!(hotbar.slot(0).map(|s| s.count), Some(2));

        let before = hotbar.clone();
        assert!(!hotbar.add_item(ItemKind::Stone));
        assert_eq!(hotbar, before);
    }

    #[test]
    fn test_take_selected_clears_at_zero() {
        let mut hotbar = Hotbar::new();
        hotbar.add_item(ItemKind::Coal);
        hotbar.add_item(ItemKind::Coal);

        assert_eq!(hotbar.take_selected(), Some(ItemKind::Coal));
        assert_eq!(hotbar.selected_stack().map(|s| s.count), Some(1));
        assert_eq!(hotbar.take_selected(), Some(ItemKind::Coal));
        assert_eq!(hotbar.selected_stack(), None);
        assert_eq!(hotbar.take_selected(), None);
    }

    #[test]
    fn test_selection_wraps() {
        let mut hotbar = Hotbar::new();
        hotbar.select_previous();
        assert_eq!(hotbar.selected_index(), 8);
        hotbar.select_next();
        assert_eq!(hotbar.selected_index(), 0);
        hotbar.select(42);
        assert_eq!(hotbar.selected_index(), 0);
    }
}
