//! The host inventory collaborator trait.
//!
//! Slot bookkeeping, item value scoring, and the actual world-side effects
//! of grabbing/using/dropping all live host-side.  The decision tree only
//! needs the yes/no surface below; every method that can fail reports
//! `false`, which leaves translate into `Failure`.

use sv_core::{EntityInfo, ItemKind};

/// Inventory operations the decision tree invokes.
pub trait Inventory {
    /// Pick up a visible item entity.  `false` when out of reach, the
    /// inventory is full, or the entity is not an item.
    fn grab(&mut self, item: &EntityInfo) -> bool;

    /// Consume/apply one held item of `kind` (eat food, apply a medkit).
    fn use_kind(&mut self, kind: ItemKind) -> bool;

    /// Make a held item of `kind` the active one.  `false` when none held.
    fn equip(&mut self, kind: ItemKind) -> bool;

    /// Use whatever is currently equipped (fire the equipped weapon).
    fn use_equipped(&mut self) -> bool;

    /// Drop one held item of `kind`.
    fn drop_kind(&mut self, kind: ItemKind) -> bool;

    /// Drop one spent item (empty weapon, used-up consumable).
    fn drop_empty(&mut self) -> bool;

    /// Drop the least valuable held item, by the host's value scoring.
    fn drop_lowest_value(&mut self) -> bool;

    /// `true` if at least one item of `kind` is held.
    fn has_kind(&self, kind: ItemKind) -> bool;

    /// `true` if any weapon is held.
    fn has_weapon(&self) -> bool {
        self.has_kind(ItemKind::Pistol) || self.has_kind(ItemKind::Shotgun)
    }

    /// `true` if a spent item is occupying a slot.
    fn has_empty(&self) -> bool;

    /// `true` when no slot is free.
    fn is_full(&self) -> bool;
}
