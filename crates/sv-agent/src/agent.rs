//! The once-per-frame agent driver.

use sv_bt::{BehaviorState, BehaviorTree};
use sv_core::{AgentRng, EntityKind, PurgeZoneInfo};
use sv_memory::SurvivorMemory;
use sv_spatial::{GridGraph, InfluenceMap};

use crate::{survivor_tree, AgentResult, Blackboard, Inventory, Steering, SteeringOutput,
            WorldInterface};

/// Side length of a grid cell, in world metres.  Coarse enough that a
/// world-sized grid stays small, fine enough that one cell is within a
/// single sensor sweep.
const CELL_SIZE: f32 = 10.0;

/// One autonomous survivor: decision tree, blackboard, and the steering
/// collaborator that turns decisions into motion.
///
/// All state is owned here and touched only inside [`update`] — the host
/// drives one call per simulation frame and consumes the returned command.
///
/// [`update`]: SurvivorAgent::update
pub struct SurvivorAgent {
    tree: BehaviorTree<Blackboard>,
    blackboard: Blackboard,
    steering: Box<dyn Steering>,
}

impl SurvivorAgent {
    /// Build the agent: size the spatial grid from the world bounds, wire
    /// up memory and blackboard, and compose the decision tree.
    pub fn new(
        world: &dyn WorldInterface,
        inventory: Box<dyn Inventory>,
        steering: Box<dyn Steering>,
        seed: u64,
    ) -> AgentResult<Self> {
        let info = world.world_info();
        let graph = GridGraph::covering(info.bounds(), CELL_SIZE, true)?;
        let memory = SurvivorMemory::new(InfluenceMap::new(graph));
        let blackboard = Blackboard::new(info, memory, inventory, AgentRng::new(seed, 0));

        Ok(Self { tree: survivor_tree(), blackboard, steering })
    }

    /// Run one frame: percepts → memory → decision tree → steering.
    ///
    /// A failed root is not a fault — the previous movement request stays
    /// cached and the steering collaborator keeps producing a command.
    pub fn update(&mut self, dt: f32, world: &dyn WorldInterface) -> SteeringOutput {
        // ── Phase 1: percepts ─────────────────────────────────────────────
        let agent = world.agent_info();
        let entities = world.entities_in_fov();
        let houses = world.houses_in_fov();
        let purge_zones: Vec<PurgeZoneInfo> = entities
            .iter()
            .filter(|e| e.kind == EntityKind::PurgeZone)
            .filter_map(|e| world.purge_zone_info(e))
            .collect();
        self.blackboard.begin_frame(dt, agent, entities, houses, purge_zones);

        // ── Phase 2: memory ───────────────────────────────────────────────
        let bb = &mut self.blackboard;
        bb.memory.update(dt, &bb.agent, &bb.entities, &bb.houses, &bb.purge_zones);

        // ── Phase 3: decide ───────────────────────────────────────────────
        self.tree.tick(&mut self.blackboard);

        // ── Phase 4: steer ────────────────────────────────────────────────
        self.steering
            .calculate(dt, &self.blackboard.movement, &self.blackboard.agent)
    }

    /// Read-only view of the agent's context (tests, debug overlays).
    pub fn blackboard(&self) -> &Blackboard {
        &self.blackboard
    }

    /// The tree root's result from the most recent update.
    pub fn last_decision(&self) -> BehaviorState {
        self.tree.state()
    }
}
