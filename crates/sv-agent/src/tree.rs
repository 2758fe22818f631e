//! The hand-authored survivor decision tree.
//!
//! One priority-ordered selector, fixed at build time.  Order is the whole
//! design: earlier branches preempt later ones every single tick, so an
//! enemy appearing mid-loot instantly flips the agent into self-defense
//! without any explicit state transition.

use sv_bt::builder::{action, condition, condition_inverted, selector, sequence};
use sv_bt::BehaviorTree;

use crate::{actions, conditions, Blackboard};

/// Build the survivor's decision tree.
///
/// Priorities, highest first:
///
/// 1. escape a visible purge zone;
/// 2. self-defense — engage a visible enemy when armed, flee otherwise;
///    fall back to remembered danger (flee to a known house, else away
///    from the hot cell);
/// 3. basic survival — medkit below the health threshold, food below the
///    energy threshold;
/// 4. urgent looting — seek and grab the item kind the agent lacks, else
///    explore the nearest uncleared house for it;
/// 5. opportunistic looting — grab whatever is visible while there is room
///    (suppressed while defensive);
/// 6. inventory hygiene — shed garbage, spent items, then the least
///    valuable item when full;
/// 7. exploration fallback — sweep the nearest uncleared house, else scan
///    the neighborhood, else wander.
pub fn survivor_tree() -> BehaviorTree<Blackboard> {
    BehaviorTree::new(selector(vec![
        // ── 1. Purge-zone escape ──────────────────────────────────────────
        sequence(vec![
            condition(conditions::purge_zone_in_fov),
            action(actions::escape_purge_zone),
        ]),
        // ── 2. Self-defense: visible enemy ────────────────────────────────
        sequence(vec![
            condition(conditions::enemy_in_fov),
            action(actions::set_closest_enemy_as_target),
            selector(vec![
                sequence(vec![
                    condition(conditions::has_weapon),
                    action(actions::shoot_target),
                ]),
                action(actions::flee_from_target),
            ]),
        ]),
        // ── 2. Self-defense: remembered danger ────────────────────────────
        sequence(vec![
            condition(conditions::danger_near),
            selector(vec![
                action(actions::flee_to_nearest_house),
                action(actions::flee_danger),
            ]),
        ]),
        // ── 3. Basic survival ─────────────────────────────────────────────
        sequence(vec![condition(conditions::health_low), action(actions::heal)]),
        sequence(vec![condition(conditions::energy_low), action(actions::eat)]),
        // ── 4. Urgent looting ─────────────────────────────────────────────
        sequence(vec![
            condition(conditions::needs_item),
            selector(vec![
                sequence(vec![
                    action(actions::set_needed_item_as_target),
                    action(actions::grab_target_item),
                ]),
                action(actions::explore_house_area),
            ]),
        ]),
        // ── 5. Opportunistic looting ──────────────────────────────────────
        sequence(vec![
            condition_inverted(conditions::is_defensive),
            condition_inverted(conditions::inventory_full),
            condition(conditions::item_in_fov),
            action(actions::set_closest_visible_item_as_target),
            action(actions::grab_target_item),
        ]),
        // ── 6. Inventory hygiene ──────────────────────────────────────────
        selector(vec![
            sequence(vec![
                condition(conditions::has_garbage),
                action(actions::drop_garbage),
            ]),
            sequence(vec![
                condition(conditions::has_empty_item),
                action(actions::drop_empty_item),
            ]),
            sequence(vec![
                condition(conditions::inventory_full),
                action(actions::drop_lowest_value_item),
            ]),
        ]),
        // ── 7. Exploration fallback ───────────────────────────────────────
        selector(vec![
            sequence(vec![
                condition(conditions::has_uncleared_house),
                action(actions::explore_house_area),
            ]),
            sequence(vec![
                condition_inverted(conditions::area_scanned),
                action(actions::set_look_around),
            ]),
            action(actions::set_wander),
        ]),
    ]))
}
