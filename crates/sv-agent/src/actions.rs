//! Side-effecting leaves.
//!
//! Each function is the body of one `Action` node.  Actions are the only
//! place the tree mutates anything: the movement request, the focus target,
//! the survivor state, the inventory, and pickup bookkeeping in memory.
//! They return `Running` while work is in progress, `Success` on
//! completion, and `Failure` when a precondition is unmet — never an error.

use log::debug;

use sv_bt::BehaviorState;
use sv_core::{ItemKind, Vec2};

use crate::{Blackboard, MovementMode, SurvivorState};

use BehaviorState::{Failure, Running, Success};

/// Facing tolerance for firing a weapon.
const SHOOT_TOLERANCE_DEG: f32 = 5.0;
/// Facing tolerance for grabbing an item.
const GRAB_TOLERANCE_DEG: f32 = 5.0;
/// Fraction of grab range to close to before attempting a grab.
const GRAB_APPROACH: f32 = 0.8;

// ── Movement fallbacks ────────────────────────────────────────────────────────

pub fn set_wander(bb: &mut Blackboard) -> BehaviorState {
    bb.state = SurvivorState::Exploring;
    bb.movement.mode = MovementMode::Wander;
    bb.movement.run = false;
    Success
}

/// Stand still and sweep the sensors — fills in the scanned map around the
/// current position before wandering off.
pub fn set_look_around(bb: &mut Blackboard) -> BehaviorState {
    bb.state = SurvivorState::Exploring;
    bb.movement.mode = MovementMode::LookAround;
    bb.movement.run = false;
    Success
}

// ── Targeting ─────────────────────────────────────────────────────────────────

pub fn set_closest_enemy_as_target(bb: &mut Blackboard) -> BehaviorState {
    match bb.closest_enemy() {
        Some(pos) => {
            bb.target = Some(pos);
            Success
        }
        None => Failure,
    }
}

pub fn set_closest_visible_item_as_target(bb: &mut Blackboard) -> BehaviorState {
    match bb.closest_visible_item() {
        Some(item) => {
            bb.target = Some(item.position);
            Success
        }
        None => Failure,
    }
}

/// Target the closest remembered item of the kind the agent currently
/// lacks.  Fails when nothing is needed or nothing matching is known.
pub fn set_needed_item_as_target(bb: &mut Blackboard) -> BehaviorState {
    let Some(query) = bb.needed_item() else {
        return Failure;
    };
    match bb.memory.closest_item_matching(bb.agent.position, query) {
        Some(pos) => {
            bb.target = Some(pos);
            Success
        }
        None => Failure,
    }
}

// ── Combat and escape ─────────────────────────────────────────────────────────

/// Face the target, equip a weapon, fire.  `Running` while still turning.
pub fn shoot_target(bb: &mut Blackboard) -> BehaviorState {
    let Some(target) = bb.target else {
        return Failure;
    };
    if !bb.inventory.has_weapon() {
        return Failure;
    }

    bb.state = SurvivorState::Aggro;
    bb.movement.mode = MovementMode::LookAt { target };
    bb.movement.run = false;
    if !bb.aligned_with(target, SHOOT_TOLERANCE_DEG) {
        return Running;
    }

    if bb.inventory.equip(ItemKind::Shotgun) || bb.inventory.equip(ItemKind::Pistol) {
        if bb.inventory.use_equipped() {
            return Success;
        }
    }
    Failure
}

/// Sprint away from the current target.
pub fn flee_from_target(bb: &mut Blackboard) -> BehaviorState {
    let Some(from) = bb.target else {
        return Failure;
    };
    bb.state = SurvivorState::Defensive;
    bb.movement.mode = MovementMode::Flee { from };
    bb.movement.run = true;
    Success
}

/// Sprint away from the most dangerous influence cell in sensor range.
pub fn flee_danger(bb: &mut Blackboard) -> BehaviorState {
    let search = bb.agent.fov_range * 2.0;
    let Some(from) = bb.memory.strongest_danger_within(bb.agent.position, search) else {
        return Failure;
    };
    bb.state = SurvivorState::Defensive;
    bb.movement.mode = MovementMode::Flee { from };
    bb.movement.run = true;
    Success
}

/// Sprint to the nearest known house.  `Running` until close to its center.
pub fn flee_to_nearest_house(bb: &mut Blackboard) -> BehaviorState {
    let Some(house) = bb.memory.closest_house(bb.agent.position) else {
        return Failure;
    };
    let target = house.center();

    bb.state = SurvivorState::Defensive;
    bb.movement.mode = MovementMode::Seek { target };
    bb.movement.run = true;

    let arrive = bb.agent.grab_range * 0.5;
    if bb.agent.position.distance_squared(target) > arrive * arrive {
        return Running;
    }
    Success
}

/// Sprint out of the closest visible purge zone, aiming past its rim.
pub fn escape_purge_zone(bb: &mut Blackboard) -> BehaviorState {
    let pos = bb.agent.position;
    let Some(zone) = bb.purge_zones.iter().min_by(|a, b| {
        a.center
            .distance_squared(pos)
            .partial_cmp(&b.center.distance_squared(pos))
            .unwrap_or(std::cmp::Ordering::Equal)
    }) else {
        return Failure;
    };
    let zone = *zone;

    let mut away = (pos - zone.center).normalized();
    if away == Vec2::ZERO {
        // Dead center: any direction beats standing still.
        away = Vec2::from_angle(bb.rng.gen_range(0.0..std::f32::consts::TAU));
    }
    let exit = zone.center + away * (zone.radius + bb.agent.fov_range);

    debug!("escaping purge zone at {} via {}", zone.center, exit);
    bb.state = SurvivorState::Defensive;
    bb.movement.mode = MovementMode::Seek { target: exit };
    bb.movement.run = true;

    if pos.distance(zone.center) <= zone.radius {
        return Running;
    }
    Success
}

// ── Looting ───────────────────────────────────────────────────────────────────

/// Close in on the target position, face it, and grab the item there.
///
/// `Running` while approaching or turning; `Success` once the inventory
/// accepts the item (memory forgets it in the same breath); `Failure` when
/// there is no target, nothing grabbable at the target, or the grab is
/// refused.
pub fn grab_target_item(bb: &mut Blackboard) -> BehaviorState {
    let Some(target) = bb.target else {
        return Failure;
    };
    bb.state = SurvivorState::Looting;

    let reach = bb.agent.grab_range * GRAB_APPROACH;
    if bb.agent.position.distance_squared(target) > reach * reach {
        bb.movement.mode = MovementMode::Seek { target };
        bb.movement.run = false;
        return Running;
    }

    if !bb.aligned_with(target, GRAB_TOLERANCE_DEG) {
        bb.movement.mode = MovementMode::LookAt { target };
        return Running;
    }

    // In reach and facing it — take the closest visible item.
    let Some(item) = bb.closest_visible_item() else {
        return Failure;
    };
    if bb.inventory.grab(&item) {
        debug!("grabbed {:?} at {}", item.item_kind, item.position);
        bb.memory.on_item_taken(item.position);
        bb.target = None;
        return Success;
    }
    Failure
}

/// Sweep the unscanned cells of the closest uncleared house.
///
/// `Running` while cells remain (seeking the nearest one); `Success` once
/// the area is swept; `Failure` when no uncleared house is known.
pub fn explore_house_area(bb: &mut Blackboard) -> BehaviorState {
    let pos = bb.agent.position;
    let Some(area) = bb.memory.closest_unscanned_house_area(pos) else {
        return Failure;
    };
    if area.is_empty() {
        return Success;
    }

    let graph = bb.memory.influence().graph();
    let Some(target) = area
        .iter()
        .map(|&idx| graph.cell_center(idx))
        .min_by(|a, b| {
            a.distance_squared(pos)
                .partial_cmp(&b.distance_squared(pos))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    else {
        return Success;
    };

    bb.state = SurvivorState::Exploring;
    bb.movement.mode = MovementMode::Seek { target };
    bb.movement.run = false;
    Running
}

// ── Consumables and hygiene ───────────────────────────────────────────────────

pub fn heal(bb: &mut Blackboard) -> BehaviorState {
    if bb.inventory.use_kind(ItemKind::Medkit) {
        debug!("used a medkit");
        return Success;
    }
    Failure
}

pub fn eat(bb: &mut Blackboard) -> BehaviorState {
    if bb.inventory.use_kind(ItemKind::Food) {
        debug!("ate food");
        return Success;
    }
    Failure
}

pub fn drop_garbage(bb: &mut Blackboard) -> BehaviorState {
    if bb.inventory.drop_kind(ItemKind::Garbage) {
        Success
    } else {
        Failure
    }
}

pub fn drop_empty_item(bb: &mut Blackboard) -> BehaviorState {
    if bb.inventory.drop_empty() {
        Success
    } else {
        Failure
    }
}

pub fn drop_lowest_value_item(bb: &mut Blackboard) -> BehaviorState {
    if bb.inventory.drop_lowest_value() {
        Success
    } else {
        Failure
    }
}
