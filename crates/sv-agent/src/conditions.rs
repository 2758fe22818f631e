//! Read-only predicates over the blackboard.
//!
//! Each function is the body of one `Conditional` leaf.  Conditions never
//! mutate anything and never panic: a missing value reads as `false`, which
//! the tree treats as ordinary `Failure`.

use sv_core::{EntityKind, ItemKind};

use crate::{Blackboard, SurvivorState};

pub fn enemy_in_fov(bb: &Blackboard) -> bool {
    bb.entities.iter().any(|e| e.kind == EntityKind::Enemy)
}

pub fn item_in_fov(bb: &Blackboard) -> bool {
    bb.entities.iter().any(|e| e.kind == EntityKind::Item)
}

pub fn purge_zone_in_fov(bb: &Blackboard) -> bool {
    !bb.purge_zones.is_empty()
}

/// Negative influence within sensor range — trouble remembered or smelled,
/// even with no enemy currently visible.
pub fn danger_near(bb: &Blackboard) -> bool {
    bb.memory.danger_within(bb.agent.position, bb.agent.fov_range)
}

pub fn health_low(bb: &Blackboard) -> bool {
    bb.agent.is_health_low()
}

pub fn energy_low(bb: &Blackboard) -> bool {
    bb.agent.is_energy_low()
}

/// Something is missing badly enough to loot for it on purpose.
pub fn needs_item(bb: &Blackboard) -> bool {
    bb.needed_item().is_some()
}

pub fn has_weapon(bb: &Blackboard) -> bool {
    bb.inventory.has_weapon()
}

pub fn inventory_full(bb: &Blackboard) -> bool {
    bb.inventory.is_full()
}

pub fn has_garbage(bb: &Blackboard) -> bool {
    bb.inventory.has_kind(ItemKind::Garbage)
}

pub fn has_empty_item(bb: &Blackboard) -> bool {
    bb.inventory.has_empty()
}

pub fn has_uncleared_house(bb: &Blackboard) -> bool {
    bb.memory.has_uncleared_house()
}

/// Majority of the cells around the agent already swept.
pub fn area_scanned(bb: &Blackboard) -> bool {
    bb.memory.neighborhood_scanned(bb.agent.position)
}

pub fn is_defensive(bb: &Blackboard) -> bool {
    bb.state == SurvivorState::Defensive
}
