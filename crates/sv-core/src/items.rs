//! Item kind enum shared across memory, inventory, and decision crates.

/// The kind of a lootable item, as reported by the host world.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum ItemKind {
    /// Ranged weapon, limited ammo.
    Pistol,
    /// Ranged weapon, limited ammo, short effective range.
    Shotgun,
    /// Restores health when used.
    Medkit,
    /// Restores energy when used.
    Food,
    /// Worthless; occupies an inventory slot until dropped.
    Garbage,
}

impl ItemKind {
    /// `true` for either weapon kind.  "I need a weapon" requests match on
    /// this rather than a specific model.
    #[inline]
    pub fn is_weapon(self) -> bool {
        matches!(self, ItemKind::Pistol | ItemKind::Shotgun)
    }

    /// Human-readable label for diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            ItemKind::Pistol  => "pistol",
            ItemKind::Shotgun => "shotgun",
            ItemKind::Medkit  => "medkit",
            ItemKind::Food    => "food",
            ItemKind::Garbage => "garbage",
        }
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
