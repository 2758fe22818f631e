//! The agent's aggregated spatial memory.

use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};

use sv_core::{AgentSnapshot, CellIndex, Cooldown, EntityInfo, EntityKind, HouseInfo, ItemKind,
              PurgeZoneInfo, Rect, Vec2};
use sv_spatial::InfluenceMap;

use crate::{ItemQuery, LocatedHouse, LocatedItem};

// ── Influence event weights ───────────────────────────────────────────────────

/// Stamped at a visible enemy's cell every frame it stays in view.
pub const ENEMY_INFLUENCE: f32 = -20.0;
/// Stamped at an item's cell when it is first recorded.
pub const ITEM_INFLUENCE: f32 = 50.0;
/// Stamped at the agent's own cell on the frame it was bitten.
pub const BITTEN_INFLUENCE: f32 = -100.0;
/// Per metre of purge-zone radius, stamped over the whole zone.
pub const PURGE_INFLUENCE_PER_RADIUS: f32 = -2.0;

/// Influence below this (negative) magnitude counts as danger; above the
/// positive magnitude as reward.
const SIGNAL_THRESHOLD: f32 = 5.0;
/// Scanned fraction at which an area counts as explored (inclusive).
const EXPLORED_THRESHOLD: f32 = 0.5;
/// Seconds between sighting-intake passes.
const SIGHTING_INTERVAL: f32 = 0.1;
/// Default seconds a cleared house stays cleared before re-opening.
const HOUSE_RESET_INTERVAL: f32 = 90.0;

/// Aggregates the influence map with located houses/items and the
/// house-clearing bookkeeping.  Owned by one agent, touched only inside its
/// own update call.
pub struct SurvivorMemory {
    influence: InfluenceMap,
    houses: FxHashMap<CellIndex, LocatedHouse>,
    items: FxHashMap<CellIndex, LocatedItem>,
    sighting_cooldown: Cooldown,
    house_reset_interval: f32,
}

impl SurvivorMemory {
    pub fn new(influence: InfluenceMap) -> Self {
        Self {
            influence,
            houses: FxHashMap::default(),
            items: FxHashMap::default(),
            sighting_cooldown: Cooldown::ready(SIGHTING_INTERVAL),
            house_reset_interval: HOUSE_RESET_INTERVAL,
        }
    }

    /// How long a cleared house stays cleared before its cells are un-marked
    /// and it becomes a re-visit candidate again.
    pub fn set_house_reset_interval(&mut self, seconds: f32) {
        self.house_reset_interval = seconds.max(0.0);
    }

    pub fn influence(&self) -> &InfluenceMap {
        &self.influence
    }

    pub fn influence_mut(&mut self) -> &mut InfluenceMap {
        &mut self.influence
    }

    // ── Per-frame update ──────────────────────────────────────────────────

    /// Integrate this frame's percepts.  Runs before the decision tree
    /// ticks; see the crate docs for the pipeline.
    pub fn update(
        &mut self,
        dt: f32,
        agent: &AgentSnapshot,
        entities: &[EntityInfo],
        houses: &[HouseInfo],
        purge_zones: &[PurgeZoneInfo],
    ) {
        // 1. Re-visit countdowns.
        let mut reopened: Vec<Rect> = Vec::new();
        for house in self.houses.values_mut() {
            if house.tick_reset(dt) {
                reopened.push(house.bounds());
            }
        }
        for bounds in reopened {
            let area = self.influence.graph().cells_in_rect(bounds);
            self.influence.set_scanned_over(&area, false);
            debug!("house at {} re-opened for looting", bounds.center);
        }

        // 2. Sensor sweep.
        let swept = self.influence.graph().cells_in_radius(agent.position, agent.fov_range);
        self.influence.set_scanned_over(&swept, true);

        // 3. Throttled sighting intake.
        if self.sighting_cooldown.tick(dt) {
            for entity in entities {
                if entity.kind == EntityKind::Item {
                    if let Some(kind) = entity.item_kind {
                        self.record_item(entity.position, kind);
                    }
                }
            }
            for house in houses {
                self.record_house(house);
            }
        }

        // 4. Danger stamps, every frame while visible.
        for entity in entities {
            if entity.kind == EntityKind::Enemy {
                self.influence.set_influence_at(entity.position, ENEMY_INFLUENCE);
            }
        }
        for zone in purge_zones {
            let area = self.influence.graph().cells_in_radius(zone.center, zone.radius);
            self.influence
                .set_influence_over(&area, zone.radius * PURGE_INFLUENCE_PER_RADIUS);
        }
        if agent.was_bitten {
            debug!("bitten at {}", agent.position);
            self.influence.set_influence_at(agent.position, BITTEN_INFLUENCE);
        }

        // 5. Clearing bookkeeping.
        let newly_cleared: Vec<CellIndex> = self
            .houses
            .iter()
            .filter(|(_, house)| !house.is_cleared())
            .filter(|(_, house)| {
                let area = self.influence.graph().cells_in_rect(house.bounds());
                self.is_area_explored(&area)
            })
            .map(|(&key, _)| key)
            .collect();
        for key in newly_cleared {
            if let Some(house) = self.houses.get_mut(&key) {
                house.mark_cleared(self.house_reset_interval);
                debug!("house at {} cleared", house.center());
            }
        }

        // 6. Influence diffusion.
        self.influence.propagate(dt);
    }

    // ── Sighting records ──────────────────────────────────────────────────

    /// Remember an item.  At most one item per cell; re-sighting the same
    /// cell overwrites it.  Positions off the grid are ignored.
    pub fn record_item(&mut self, position: Vec2, kind: ItemKind) {
        let cell = self.influence.graph().cell_at_world(position);
        if !cell.is_valid() {
            return;
        }
        if self.items.insert(cell, LocatedItem { kind, position }).is_none() {
            debug!("located {kind} at {position}");
        }
        self.influence.set_influence(cell, ITEM_INFLUENCE);
    }

    /// Remember a house, keyed by the cell of its center so the same house
    /// re-entering the FOV is a no-op.
    pub fn record_house(&mut self, house: &HouseInfo) {
        let cell = self.influence.graph().cell_at_world(house.center);
        if !cell.is_valid() {
            return;
        }
        self.houses.entry(cell).or_insert_with(|| {
            debug!("located house at {}", house.center);
            LocatedHouse::new(house.bounds())
        });
    }

    /// Forget the item at `position` after a successful grab, and hold the
    /// sighting intake back one interval so this frame's stale percepts
    /// cannot re-record it.
    pub fn on_item_taken(&mut self, position: Vec2) {
        let cell = self.influence.graph().cell_at_world(position);
        if self.items.remove(&cell).is_some() {
            self.influence.set_influence(cell, 0.0);
        }
        self.sighting_cooldown.reset();
    }

    // ── House queries ─────────────────────────────────────────────────────

    pub fn located_houses(&self) -> impl Iterator<Item = &LocatedHouse> + '_ {
        self.houses.values()
    }

    pub fn has_seen_houses(&self) -> bool {
        !self.houses.is_empty()
    }

    /// Whether any known house is still uncleared.
    pub fn has_uncleared_house(&self) -> bool {
        self.houses.values().any(|h| !h.is_cleared())
    }

    /// The known house closest to `pos`, or `None` when none are known.
    pub fn closest_house(&self, pos: Vec2) -> Option<&LocatedHouse> {
        self.houses
            .values()
            .min_by(|a, b| cmp_distance(a.center(), b.center(), pos))
    }

    /// The closest known house that is not currently cleared.
    pub fn closest_uncleared_house(&self, pos: Vec2) -> Option<&LocatedHouse> {
        self.houses
            .values()
            .filter(|h| !h.is_cleared())
            .min_by(|a, b| cmp_distance(a.center(), b.center(), pos))
    }

    /// The grid cells spanned by a house's bounds.
    pub fn house_area(&self, house: &LocatedHouse) -> FxHashSet<CellIndex> {
        self.influence.graph().cells_in_rect(house.bounds())
    }

    /// The not-yet-scanned cells of the closest uncleared house — the sweep
    /// targets for an explore-house behavior.  `None` when every known
    /// house is cleared (or none are known).
    pub fn closest_unscanned_house_area(&self, pos: Vec2) -> Option<FxHashSet<CellIndex>> {
        let house = self.closest_uncleared_house(pos)?;
        let area = self.house_area(house);
        Some(
            area.into_iter()
                .filter(|&idx| !self.influence.is_scanned(idx))
                .collect(),
        )
    }

    // ── Explored-area queries ─────────────────────────────────────────────

    /// `true` once the scanned fraction of `cells` reaches the explored
    /// threshold (inclusive).  Monotonic under additional scanning.
    pub fn is_area_explored(&self, cells: &FxHashSet<CellIndex>) -> bool {
        self.influence.scanned_fraction(cells) >= EXPLORED_THRESHOLD
    }

    /// Majority-of-neighbors scan check around `pos` — cheap "have I looked
    /// around here" probe used by sweep behaviors.
    pub fn neighborhood_scanned(&self, pos: Vec2) -> bool {
        let cell = self.influence.graph().cell_at_world(pos);
        if !cell.is_valid() {
            return false;
        }
        let total = self.influence.graph().neighbor_count(cell);
        if total == 0 {
            return self.influence.is_scanned(cell);
        }
        let scanned = self
            .influence
            .graph()
            .neighbors(cell)
            .filter(|&(n, _)| self.influence.is_scanned(n))
            .count();
        scanned * 2 > total
    }

    // ── Item queries ──────────────────────────────────────────────────────

    pub fn has_seen_items(&self) -> bool {
        !self.items.is_empty()
    }

    pub fn located_items(&self) -> impl Iterator<Item = &LocatedItem> + '_ {
        self.items.values()
    }

    /// Exact position of the known item closest to `pos`.
    pub fn closest_item(&self, pos: Vec2) -> Option<Vec2> {
        self.items
            .values()
            .min_by(|a, b| cmp_distance(a.position, b.position, pos))
            .map(|item| item.position)
    }

    /// Exact position of the closest known item satisfying `query`.
    pub fn closest_item_matching(&self, pos: Vec2, query: ItemQuery) -> Option<Vec2> {
        self.items
            .values()
            .filter(|item| query.matches(item.kind))
            .min_by(|a, b| cmp_distance(a.position, b.position, pos))
            .map(|item| item.position)
    }

    // ── Influence queries ─────────────────────────────────────────────────

    /// `true` if any connected cell within `radius` of `pos` carries
    /// influence below the danger threshold.
    pub fn danger_within(&self, pos: Vec2, radius: f32) -> bool {
        self.influence
            .graph()
            .cells_in_radius(pos, radius)
            .iter()
            .any(|&idx| self.influence.influence(idx) < -SIGNAL_THRESHOLD)
    }

    /// World position of the most dangerous cell within `radius` of `pos` —
    /// the point a flee behavior should move away from.  `None` when no cell
    /// in range is below the danger threshold.
    pub fn strongest_danger_within(&self, pos: Vec2, radius: f32) -> Option<Vec2> {
        self.influence
            .graph()
            .cells_in_radius(pos, radius)
            .into_iter()
            .map(|idx| (idx, self.influence.influence(idx)))
            .filter(|&(_, v)| v < -SIGNAL_THRESHOLD)
            .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(idx, _)| self.influence.graph().cell_center(idx))
    }

    /// `true` if any connected cell within `radius` of `pos` carries
    /// influence above the reward threshold.
    pub fn reward_within(&self, pos: Vec2, radius: f32) -> bool {
        self.influence
            .graph()
            .cells_in_radius(pos, radius)
            .iter()
            .any(|&idx| self.influence.influence(idx) > SIGNAL_THRESHOLD)
    }
}

/// Distance ordering helper for `min_by` over candidate positions.
fn cmp_distance(a: Vec2, b: Vec2, from: Vec2) -> std::cmp::Ordering {
    a.distance_squared(from)
        .partial_cmp(&b.distance_squared(from))
        .unwrap_or(std::cmp::Ordering::Equal)
}
