//! The typed context shared by every tree node.
//!
//! The classic blackboard is a stringly-typed map checked at run time; this
//! one is a plain struct, so every lookup is a field access checked at
//! compile time.  The read/write contract is unchanged: conditionals read,
//! actions write, and the "documented miss" cases survive as `Option`
//! fields and possibly-empty percept buffers.

use sv_bt::FrameTime;
use sv_core::{AgentRng, AgentSnapshot, EntityInfo, EntityKind, HouseInfo, ItemKind,
              PurgeZoneInfo, Vec2, WorldInfo};
use sv_memory::{ItemQuery, SurvivorMemory};

use crate::{Inventory, MovementRequest};

// ── SurvivorState ─────────────────────────────────────────────────────────────

/// Coarse label for what the agent is currently busy with, written by leaf
/// actions and readable by conditionals.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum SurvivorState {
    #[default]
    Exploring,
    Looting,
    Defensive,
    Aggro,
}

// ── Blackboard ────────────────────────────────────────────────────────────────

/// Everything a tree node can see or touch.
///
/// Created once per agent and dropped with its tree.  The percept buffers
/// are frame-scoped: overwritten in bulk by
/// [`begin_frame`](Blackboard::begin_frame), never mutated element-wise.
pub struct Blackboard {
    // ── Per-frame percepts ────────────────────────────────────────────────
    pub agent: AgentSnapshot,
    pub entities: Vec<EntityInfo>,
    pub houses: Vec<HouseInfo>,
    pub purge_zones: Vec<PurgeZoneInfo>,

    // ── Persistent agent-owned state ──────────────────────────────────────
    pub world: WorldInfo,
    pub memory: SurvivorMemory,
    pub inventory: Box<dyn Inventory>,
    pub state: SurvivorState,
    pub movement: MovementRequest,
    /// Current focus position (enemy to face, item to grab).  `None` means
    /// "no target" — dependent leaves fail rather than guess.
    pub target: Option<Vec2>,
    pub rng: AgentRng,

    dt: f32,
}

impl Blackboard {
    pub fn new(
        world: WorldInfo,
        memory: SurvivorMemory,
        inventory: Box<dyn Inventory>,
        rng: AgentRng,
    ) -> Self {
        Self {
            agent: AgentSnapshot::default(),
            entities: Vec::new(),
            houses: Vec::new(),
            purge_zones: Vec::new(),
            world,
            memory,
            inventory,
            state: SurvivorState::default(),
            movement: MovementRequest::default(),
            target: None,
            rng,
            dt: 0.0,
        }
    }

    /// Install this frame's percepts, replacing last frame's in bulk.
    pub fn begin_frame(
        &mut self,
        dt: f32,
        agent: AgentSnapshot,
        entities: Vec<EntityInfo>,
        houses: Vec<HouseInfo>,
        purge_zones: Vec<PurgeZoneInfo>,
    ) {
        self.dt = dt;
        self.agent = agent;
        self.entities = entities;
        self.houses = houses;
        self.purge_zones = purge_zones;
    }

    // ── Percept helpers ───────────────────────────────────────────────────

    /// Position of the closest visible enemy.
    pub fn closest_enemy(&self) -> Option<Vec2> {
        self.closest_entity_of(EntityKind::Enemy).map(|e| e.position)
    }

    /// The closest visible item entity (full record — grabbing needs it).
    pub fn closest_visible_item(&self) -> Option<EntityInfo> {
        self.closest_entity_of(EntityKind::Item)
    }

    fn closest_entity_of(&self, kind: EntityKind) -> Option<EntityInfo> {
        let pos = self.agent.position;
        self.entities
            .iter()
            .filter(|e| e.kind == kind)
            .min_by(|a, b| {
                a.position
                    .distance_squared(pos)
                    .partial_cmp(&b.position.distance_squared(pos))
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .copied()
    }

    /// The item kind the agent most urgently lacks, in priority order:
    /// a weapon, then food when energy is low, then a medkit when health is
    /// low.  `None` when nothing is pressing.
    pub fn needed_item(&self) -> Option<ItemQuery> {
        if !self.inventory.has_weapon() {
            return Some(ItemQuery::AnyWeapon);
        }
        if self.agent.is_energy_low() {
            return Some(ItemQuery::Kind(ItemKind::Food));
        }
        if self.agent.is_health_low() {
            return Some(ItemQuery::Kind(ItemKind::Medkit));
        }
        None
    }

    /// `true` when the agent's facing is within `tolerance_deg` degrees of
    /// pointing at `target`.
    pub fn aligned_with(&self, target: Vec2, tolerance_deg: f32) -> bool {
        let to_target = target - self.agent.position;
        let angle = self.agent.forward().angle_between(to_target);
        angle.to_degrees() < tolerance_deg
    }
}

impl FrameTime for Blackboard {
    fn delta_time(&self) -> f32 {
        self.dt
    }
}
