//! Record types for remembered world features.

use sv_core::{ItemKind, Rect, Vec2};

// ── LocatedHouse ──────────────────────────────────────────────────────────────

/// A house the agent has seen at least once.
///
/// Created on first sighting and mutated in place afterwards; never removed
/// during the agent's lifetime.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocatedHouse {
    bounds: Rect,
    cleared: bool,
    /// Seconds until the cleared flag drops again.  `Some` only while
    /// cleared; counts down in [`SurvivorMemory::update`][crate::SurvivorMemory::update].
    reset_in: Option<f32>,
}

impl LocatedHouse {
    pub fn new(bounds: Rect) -> Self {
        Self { bounds, cleared: false, reset_in: None }
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.bounds.center
    }

    /// `true` while the house's area counts as swept.
    #[inline]
    pub fn is_cleared(&self) -> bool {
        self.cleared
    }

    pub(crate) fn mark_cleared(&mut self, reset_after: f32) {
        self.cleared = true;
        self.reset_in = Some(reset_after);
    }

    /// Advance the re-visit countdown.  Returns `true` when it expires this
    /// frame (the caller un-scans the house's cells).
    pub(crate) fn tick_reset(&mut self, dt: f32) -> bool {
        let Some(remaining) = self.reset_in.as_mut() else {
            return false;
        };
        *remaining -= dt;
        if *remaining > 0.0 {
            return false;
        }
        self.cleared = false;
        self.reset_in = None;
        true
    }
}

// ── LocatedItem ───────────────────────────────────────────────────────────────

/// An item the agent has seen but not yet picked up.
///
/// At most one item is remembered per grid cell; the exact world position is
/// kept so the grab approach does not aim at the cell center.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocatedItem {
    pub kind: ItemKind,
    pub position: Vec2,
}

// ── ItemQuery ─────────────────────────────────────────────────────────────────

/// What kind of item a lookup is after.
///
/// "I need a weapon" matches either weapon model, so it cannot be expressed
/// as a single [`ItemKind`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ItemQuery {
    /// Any item for which [`ItemKind::is_weapon`] holds.
    AnyWeapon,
    /// Exactly this kind.
    Kind(ItemKind),
}

impl ItemQuery {
    /// `true` if an item of `kind` satisfies this query.
    pub fn matches(self, kind: ItemKind) -> bool {
        match self {
            ItemQuery::AnyWeapon => kind.is_weapon(),
            ItemQuery::Kind(want) => kind == want,
        }
    }
}
