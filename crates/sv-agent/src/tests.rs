//! Unit tests for sv-agent.
//!
//! The decision layer is driven end-to-end through scripted test doubles: a
//! `ScriptedWorld` that reports whatever percepts a scenario needs and a
//! shared-state `TestInventory` the assertions can inspect afterwards.

#[cfg(test)]
mod doubles {
    use std::cell::RefCell;
    use std::rc::Rc;

    use sv_core::{AgentSnapshot, EntityInfo, HouseInfo, ItemKind, PurgeZoneInfo, Vec2,
                  WorldInfo};

    use crate::{Inventory, WorldInterface};

    // ── ScriptedWorld ─────────────────────────────────────────────────────

    /// A world double whose percepts are plain fields the test edits
    /// between frames.  Bounds are 60×70 at origin (0, 0) — a 6×7 grid of
    /// 10-metre cells.
    pub struct ScriptedWorld {
        pub agent: AgentSnapshot,
        pub entities: Vec<EntityInfo>,
        pub houses: Vec<HouseInfo>,
        pub zones: Vec<PurgeZoneInfo>,
    }

    impl Default for ScriptedWorld {
        fn default() -> Self {
            Self {
                agent: AgentSnapshot {
                    position: Vec2::new(25.0, 25.0),
                    ..AgentSnapshot::default()
                },
                entities: Vec::new(),
                houses: Vec::new(),
                zones: Vec::new(),
            }
        }
    }

    impl WorldInterface for ScriptedWorld {
        fn agent_info(&self) -> AgentSnapshot {
            self.agent
        }

        fn world_info(&self) -> WorldInfo {
            WorldInfo { center: Vec2::new(30.0, 35.0), dimensions: Vec2::new(60.0, 70.0) }
        }

        fn entities_in_fov(&self) -> Vec<EntityInfo> {
            self.entities.clone()
        }

        fn houses_in_fov(&self) -> Vec<HouseInfo> {
            self.houses.clone()
        }

        fn purge_zone_info(&self, entity: &EntityInfo) -> Option<PurgeZoneInfo> {
            self.zones.iter().find(|z| z.center == entity.position).copied()
        }
    }

    // ── TestInventory ─────────────────────────────────────────────────────

    /// Observable inventory state shared between the boxed trait object
    /// handed to the agent and the test's own handle.
    #[derive(Default)]
    pub struct InventoryState {
        pub items: Vec<ItemKind>,
        pub spent: Vec<ItemKind>,
        pub capacity: usize,
        pub equipped: Option<ItemKind>,
        pub shots_fired: u32,
        pub used: Vec<ItemKind>,
        pub dropped: Vec<ItemKind>,
    }

    #[derive(Clone)]
    pub struct TestInventory(pub Rc<RefCell<InventoryState>>);

    impl TestInventory {
        pub fn with_items(items: &[ItemKind]) -> Self {
            Self(Rc::new(RefCell::new(InventoryState {
                items: items.to_vec(),
                capacity: 5,
                ..InventoryState::default()
            })))
        }
    }

    impl Inventory for TestInventory {
        fn grab(&mut self, item: &EntityInfo) -> bool {
            let mut s = self.0.borrow_mut();
            let Some(kind) = item.item_kind else {
                return false;
            };
            if s.items.len() + s.spent.len() >= s.capacity {
                return false;
            }
            s.items.push(kind);
            true
        }

        fn use_kind(&mut self, kind: ItemKind) -> bool {
            let mut s = self.0.borrow_mut();
            let Some(i) = s.items.iter().position(|&k| k == kind) else {
                return false;
            };
            s.items.remove(i);
            s.used.push(kind);
            true
        }

        fn equip(&mut self, kind: ItemKind) -> bool {
            let mut s = self.0.borrow_mut();
            if !s.items.contains(&kind) {
                return false;
            }
            s.equipped = Some(kind);
            true
        }

        fn use_equipped(&mut self) -> bool {
            let mut s = self.0.borrow_mut();
            if s.equipped.is_none() {
                return false;
            }
            s.shots_fired += 1;
            true
        }

        fn drop_kind(&mut self, kind: ItemKind) -> bool {
            let mut s = self.0.borrow_mut();
            let Some(i) = s.items.iter().position(|&k| k == kind) else {
                return false;
            };
            s.items.remove(i);
            s.dropped.push(kind);
            true
        }

        fn drop_empty(&mut self) -> bool {
            let mut s = self.0.borrow_mut();
            match s.spent.pop() {
                Some(kind) => {
                    s.dropped.push(kind);
                    true
                }
                None => false,
            }
        }

        fn drop_lowest_value(&mut self) -> bool {
            let mut s = self.0.borrow_mut();
            match s.items.pop() {
                Some(kind) => {
                    s.dropped.push(kind);
                    true
                }
                None => false,
            }
        }

        fn has_kind(&self, kind: ItemKind) -> bool {
            self.0.borrow().items.contains(&kind)
        }

        fn has_empty(&self) -> bool {
            !self.0.borrow().spent.is_empty()
        }

        fn is_full(&self) -> bool {
            let s = self.0.borrow();
            s.items.len() + s.spent.len() >= s.capacity
        }
    }

    // ── Harness ───────────────────────────────────────────────────────────

    pub fn agent_with(
        world: &ScriptedWorld,
        inventory: TestInventory,
    ) -> crate::SurvivorAgent {
        crate::SurvivorAgent::new(world, Box::new(inventory), Box::new(crate::NullSteering), 7)
            .expect("scripted world has valid bounds")
    }

    /// Small dt: advances the frame without firing influence propagation,
    /// so influence assertions see raw event stamps.
    pub const SMALL_DT: f32 = 0.01;
}

// ── Construction ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod construction {
    use sv_core::{Vec2, WorldInfo};

    use super::doubles::{agent_with, ScriptedWorld, TestInventory};
    use crate::{AgentError, NullSteering, SurvivorAgent, WorldInterface};

    #[test]
    fn grid_is_sized_from_world_bounds() {
        let world = ScriptedWorld::default();
        let agent = agent_with(&world, TestInventory::with_items(&[]));
        let graph = agent.blackboard().memory.influence().graph();
        assert_eq!(graph.columns(), 6);
        assert_eq!(graph.rows(), 7);
        assert_eq!(graph.origin(), Vec2::ZERO);
    }

    #[test]
    fn degenerate_world_bounds_are_an_error() {
        struct FlatWorld(ScriptedWorld);
        impl crate::WorldInterface for FlatWorld {
            fn agent_info(&self) -> sv_core::AgentSnapshot {
                self.0.agent_info()
            }
            fn world_info(&self) -> WorldInfo {
                WorldInfo { center: Vec2::ZERO, dimensions: Vec2::ZERO }
            }
            fn entities_in_fov(&self) -> Vec<sv_core::EntityInfo> {
                vec![]
            }
            fn houses_in_fov(&self) -> Vec<sv_core::HouseInfo> {
                vec![]
            }
            fn purge_zone_info(&self, _: &sv_core::EntityInfo) -> Option<sv_core::PurgeZoneInfo> {
                None
            }
        }

        let world = FlatWorld(ScriptedWorld::default());
        let result = SurvivorAgent::new(
            &world,
            Box::new(TestInventory::with_items(&[])),
            Box::new(NullSteering),
            0,
        );
        assert!(matches!(result, Err(AgentError::Spatial(_))));
    }
}

// ── Self-defense priorities ───────────────────────────────────────────────────

#[cfg(test)]
mod defense {
    use sv_bt::BehaviorState;
    use sv_core::{EntityInfo, ItemKind, PurgeZoneInfo, Vec2};

    use super::doubles::{agent_with, ScriptedWorld, TestInventory, SMALL_DT};
    use crate::{MovementMode, SurvivorState};

    #[test]
    fn armed_agent_engages_visible_enemy() {
        let mut world = ScriptedWorld::default();
        // Dead ahead (orientation 0 faces +x): already aligned.
        world.entities = vec![EntityInfo::enemy(Vec2::new(35.0, 25.0))];
        let inventory = TestInventory::with_items(&[ItemKind::Pistol]);
        let mut agent = agent_with(&world, inventory.clone());

        agent.update(SMALL_DT, &world);

        assert_eq!(agent.last_decision(), BehaviorState::Success);
        assert_eq!(agent.blackboard().state, SurvivorState::Aggro);
        assert_eq!(inventory.0.borrow().shots_fired, 1);
        assert_eq!(inventory.0.borrow().equipped, Some(ItemKind::Pistol));
        assert!(matches!(agent.blackboard().movement.mode, MovementMode::LookAt { .. }));
    }

    #[test]
    fn misaligned_agent_turns_before_firing() {
        let mut world = ScriptedWorld::default();
        // Enemy behind the agent.
        world.entities = vec![EntityInfo::enemy(Vec2::new(15.0, 25.0))];
        let inventory = TestInventory::with_items(&[ItemKind::Shotgun]);
        let mut agent = agent_with(&world, inventory.clone());

        agent.update(SMALL_DT, &world);

        assert_eq!(agent.last_decision(), BehaviorState::Running);
        assert_eq!(inventory.0.borrow().shots_fired, 0);
        assert_eq!(
            agent.blackboard().movement.mode,
            MovementMode::LookAt { target: Vec2::new(15.0, 25.0) }
        );
    }

    #[test]
    fn unarmed_agent_flees_visible_enemy() {
        let mut world = ScriptedWorld::default();
        let enemy_pos = Vec2::new(35.0, 25.0);
        world.entities = vec![EntityInfo::enemy(enemy_pos)];
        let mut agent = agent_with(&world, TestInventory::with_items(&[]));

        agent.update(SMALL_DT, &world);

        assert_eq!(agent.blackboard().state, SurvivorState::Defensive);
        assert_eq!(agent.blackboard().movement.mode, MovementMode::Flee { from: enemy_pos });
        assert!(agent.blackboard().movement.run, "fleeing is done at a sprint");
    }

    #[test]
    fn remembered_danger_triggers_flight_after_enemy_leaves() {
        let mut world = ScriptedWorld::default();
        let enemy_pos = Vec2::new(35.0, 25.0);
        world.entities = vec![EntityInfo::enemy(enemy_pos)];
        // Armed, healthy, nothing needed — only danger can move this agent.
        let inventory = TestInventory::with_items(&[ItemKind::Pistol]);
        let mut agent = agent_with(&world, inventory);
        agent.update(SMALL_DT, &world);

        // Enemy gone; the −20 stamp remains on the influence map.
        world.entities.clear();
        agent.update(SMALL_DT, &world);

        assert_eq!(agent.blackboard().state, SurvivorState::Defensive);
        assert!(matches!(agent.blackboard().movement.mode, MovementMode::Flee { .. }));
    }

    #[test]
    fn purge_zone_outranks_everything() {
        let mut world = ScriptedWorld::default();
        let zone_center = Vec2::new(25.0, 25.0);
        world.agent.position = Vec2::new(30.0, 25.0); // inside the zone
        world.entities = vec![
            EntityInfo::purge_zone(zone_center),
            EntityInfo::enemy(Vec2::new(35.0, 25.0)),
        ];
        world.zones = vec![PurgeZoneInfo { center: zone_center, radius: 20.0 }];
        let inventory = TestInventory::with_items(&[ItemKind::Pistol]);
        let mut agent = agent_with(&world, inventory.clone());

        agent.update(SMALL_DT, &world);

        // Fleeing the zone, not shooting the enemy.
        assert_eq!(inventory.0.borrow().shots_fired, 0);
        assert_eq!(agent.last_decision(), BehaviorState::Running);
        assert!(agent.blackboard().movement.run);
        // Exit point: past the rim, straight away from the center.
        let expected_exit = Vec2::new(25.0 + 20.0 + world.agent.fov_range, 25.0);
        assert_eq!(
            agent.blackboard().movement.mode,
            MovementMode::Seek { target: expected_exit }
        );
    }
}

// ── Survival and looting priorities ───────────────────────────────────────────

#[cfg(test)]
mod survival {
    use sv_bt::BehaviorState;
    use sv_core::{EntityInfo, ItemKind, Vec2};

    use super::doubles::{agent_with, ScriptedWorld, TestInventory, SMALL_DT};
    use crate::{MovementMode, SurvivorState};

    #[test]
    fn low_health_uses_a_medkit() {
        let mut world = ScriptedWorld::default();
        world.agent.health = 3.0; // below the 4.0 threshold
        let inventory = TestInventory::with_items(&[ItemKind::Pistol, ItemKind::Medkit]);
        let mut agent = agent_with(&world, inventory.clone());

        agent.update(SMALL_DT, &world);

        assert_eq!(agent.last_decision(), BehaviorState::Success);
        assert_eq!(inventory.0.borrow().used, vec![ItemKind::Medkit]);
    }

    #[test]
    fn low_energy_eats() {
        let mut world = ScriptedWorld::default();
        world.agent.energy = 3.0;
        let inventory = TestInventory::with_items(&[ItemKind::Pistol, ItemKind::Food]);
        let mut agent = agent_with(&world, inventory.clone());

        agent.update(SMALL_DT, &world);

        assert_eq!(inventory.0.borrow().used, vec![ItemKind::Food]);
    }

    #[test]
    fn unarmed_agent_seeks_remembered_weapon() {
        let mut world = ScriptedWorld::default();
        let pistol_pos = Vec2::new(45.0, 45.0);
        world.entities = vec![EntityInfo::item(pistol_pos, ItemKind::Pistol)];
        let mut agent = agent_with(&world, TestInventory::with_items(&[]));

        // Frame 1: the pistol is sighted and remembered; the urgent-looting
        // branch immediately starts the approach.
        agent.update(SMALL_DT, &world);
        assert_eq!(agent.blackboard().state, SurvivorState::Looting);
        assert_eq!(
            agent.blackboard().movement.mode,
            MovementMode::Seek { target: pistol_pos }
        );
        assert_eq!(agent.last_decision(), BehaviorState::Running);

        // Frame 2: the pistol left the FOV — memory still drives the seek.
        world.entities.clear();
        agent.update(SMALL_DT, &world);
        assert_eq!(
            agent.blackboard().movement.mode,
            MovementMode::Seek { target: pistol_pos }
        );
    }

    #[test]
    fn nearby_visible_item_is_grabbed() {
        let mut world = ScriptedWorld::default();
        // One metre ahead, inside 80% of grab range (1.6) and aligned.
        let food_pos = Vec2::new(26.0, 25.0);
        world.entities = vec![EntityInfo::item(food_pos, ItemKind::Food)];
        let inventory = TestInventory::with_items(&[ItemKind::Pistol]);
        let mut agent = agent_with(&world, inventory.clone());

        agent.update(SMALL_DT, &world);

        assert_eq!(agent.last_decision(), BehaviorState::Success);
        assert!(inventory.0.borrow().items.contains(&ItemKind::Food));
        assert!(
            !agent.blackboard().memory.has_seen_items(),
            "grabbed item must be forgotten"
        );
        assert_eq!(agent.blackboard().target, None);
    }

    #[test]
    fn grab_waits_for_alignment() {
        let mut world = ScriptedWorld::default();
        // In reach but behind the agent.
        let item_pos = Vec2::new(24.0, 25.0);
        world.entities = vec![EntityInfo::item(item_pos, ItemKind::Food)];
        let inventory = TestInventory::with_items(&[ItemKind::Pistol]);
        let mut agent = agent_with(&world, inventory.clone());

        agent.update(SMALL_DT, &world);

        assert_eq!(agent.last_decision(), BehaviorState::Running);
        assert!(inventory.0.borrow().items.len() == 1, "nothing grabbed yet");
        assert_eq!(
            agent.blackboard().movement.mode,
            MovementMode::LookAt { target: item_pos }
        );
    }
}

// ── Hygiene and fallback priorities ───────────────────────────────────────────

#[cfg(test)]
mod hygiene_and_fallback {
    use sv_bt::BehaviorState;
    use sv_core::{HouseInfo, ItemKind, Vec2};

    use super::doubles::{agent_with, ScriptedWorld, TestInventory, SMALL_DT};
    use crate::{MovementMode, SurvivorState};

    #[test]
    fn garbage_is_dropped_first() {
        let world = ScriptedWorld::default();
        let inventory = TestInventory::with_items(&[ItemKind::Pistol, ItemKind::Garbage]);
        let mut agent = agent_with(&world, inventory.clone());

        agent.update(SMALL_DT, &world);

        assert_eq!(agent.last_decision(), BehaviorState::Success);
        assert_eq!(inventory.0.borrow().dropped, vec![ItemKind::Garbage]);
    }

    #[test]
    fn spent_items_are_dropped() {
        let world = ScriptedWorld::default();
        let inventory = TestInventory::with_items(&[ItemKind::Pistol]);
        inventory.0.borrow_mut().spent.push(ItemKind::Pistol);
        let mut agent = agent_with(&world, inventory.clone());

        agent.update(SMALL_DT, &world);

        assert_eq!(inventory.0.borrow().dropped, vec![ItemKind::Pistol]);
    }

    #[test]
    fn full_inventory_sheds_lowest_value() {
        let world = ScriptedWorld::default();
        let inventory = TestInventory::with_items(&[
            ItemKind::Pistol,
            ItemKind::Medkit,
            ItemKind::Food,
            ItemKind::Food,
            ItemKind::Medkit,
        ]);
        let mut agent = agent_with(&world, inventory.clone());

        agent.update(SMALL_DT, &world);

        assert_eq!(inventory.0.borrow().dropped.len(), 1);
        assert_eq!(inventory.0.borrow().items.len(), 4, "one slot freed");
    }

    #[test]
    fn uncleared_house_is_explored() {
        let mut world = ScriptedWorld::default();
        world.houses = vec![HouseInfo {
            center: Vec2::new(45.0, 55.0),
            size: Vec2::new(20.0, 20.0),
        }];
        let inventory = TestInventory::with_items(&[ItemKind::Pistol]);
        let mut agent = agent_with(&world, inventory);

        agent.update(SMALL_DT, &world);

        assert_eq!(agent.last_decision(), BehaviorState::Running);
        assert_eq!(agent.blackboard().state, SurvivorState::Exploring);
        assert!(matches!(agent.blackboard().movement.mode, MovementMode::Seek { .. }));
    }

    #[test]
    fn short_sighted_agent_scans_before_wandering() {
        let mut world = ScriptedWorld::default();
        // FOV shorter than one cell: the sweep cannot reach the neighbor
        // cells, so the agent stops to look around first.
        world.agent.fov_range = 4.0;
        let inventory = TestInventory::with_items(&[ItemKind::Pistol]);
        let mut agent = agent_with(&world, inventory);

        agent.update(SMALL_DT, &world);

        assert_eq!(agent.blackboard().movement.mode, MovementMode::LookAround);
    }

    #[test]
    fn nothing_left_to_do_means_wander() {
        let world = ScriptedWorld::default(); // default FOV sweeps the whole neighborhood
        let inventory = TestInventory::with_items(&[ItemKind::Pistol]);
        let mut agent = agent_with(&world, inventory);

        agent.update(SMALL_DT, &world);

        assert_eq!(agent.blackboard().movement.mode, MovementMode::Wander);
        assert_eq!(agent.blackboard().state, SurvivorState::Exploring);
        assert!(!agent.blackboard().movement.run);
    }
}

// ── Driver plumbing ───────────────────────────────────────────────────────────

#[cfg(test)]
mod driver {
    use sv_core::{EntityInfo, Vec2};

    use super::doubles::{agent_with, ScriptedWorld, TestInventory, SMALL_DT};
    use crate::WorldInterface;

    #[test]
    fn update_sweeps_memory_and_returns_command() {
        use sv_bt::FrameTime;

        let world = ScriptedWorld::default();
        let mut agent = agent_with(&world, TestInventory::with_items(&[]));

        let out = agent.update(SMALL_DT, &world);

        // NullSteering stands still but reports the run flag faithfully.
        assert_eq!(out.linear_velocity, Vec2::ZERO);
        assert_eq!(agent.blackboard().delta_time(), SMALL_DT);
        let cell = agent
            .blackboard()
            .memory
            .influence()
            .graph()
            .cell_at_world(world.agent.position);
        assert!(agent.blackboard().memory.influence().is_scanned(cell));
    }

    #[test]
    fn run_flag_reaches_the_steering_output() {
        let mut world = ScriptedWorld::default();
        world.entities = vec![EntityInfo::enemy(Vec2::new(35.0, 25.0))];
        let mut agent = agent_with(&world, TestInventory::with_items(&[]));

        let out = agent.update(SMALL_DT, &world);
        assert!(out.run_mode, "fleeing must surface as run_mode in the command");
    }

    #[test]
    fn defensive_state_suppresses_opportunistic_looting() {
        use crate::{conditions, survivor_tree, SurvivorState};

        let mut world = ScriptedWorld::default();
        world.entities = vec![EntityInfo::enemy(Vec2::new(35.0, 25.0))];
        let mut agent = agent_with(&world, TestInventory::with_items(&[]));
        agent.update(SMALL_DT, &world); // flees → Defensive
        assert!(conditions::is_defensive(agent.blackboard()));

        // A lone tree over the same blackboard shape: defensive + item in
        // view + no enemy must NOT enter the grab branch.
        let mut tree = survivor_tree();
        let mut bb = crate::Blackboard::new(
            world.world_info(),
            sv_memory::SurvivorMemory::new(sv_spatial::InfluenceMap::new(
                sv_spatial::GridGraph::covering(world.world_info().bounds(), 10.0, true)
                    .unwrap(),
            )),
            Box::new(TestInventory::with_items(&[])),
            sv_core::AgentRng::new(0, 0),
        );
        bb.state = SurvivorState::Defensive;
        bb.begin_frame(
            SMALL_DT,
            world.agent_info(),
            vec![EntityInfo::item(Vec2::new(26.0, 25.0), sv_core::ItemKind::Garbage)],
            vec![],
            vec![],
        );
        tree.tick(&mut bb);
        assert_eq!(bb.target, None, "defensive agent must not start a grab");
    }
}
