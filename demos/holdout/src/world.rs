//! A tiny scripted survival world for the holdout demo.
//!
//! The world owns the ground truth — agent body, a patrolling enemy, items
//! stashed in two houses — and answers the agent's percept queries with
//! plain FOV-range filtering.  After each decision the demo loop integrates
//! the returned steering command back into the world.
//!
//! The item list is shared (`Rc<RefCell<…>>`) between the world and the
//! inventory so a successful grab removes the ground-truth item, exactly as
//! a real host would.

use std::cell::RefCell;
use std::rc::Rc;

use sv_agent::{Inventory, WorldInterface};
use sv_core::{AgentSnapshot, EntityInfo, HouseInfo, ItemKind, PurgeZoneInfo, Vec2, WorldInfo};

pub type WorldItems = Rc<RefCell<Vec<(Vec2, ItemKind)>>>;

// ── World ─────────────────────────────────────────────────────────────────────

pub struct HoldoutWorld {
    pub agent: AgentSnapshot,
    pub enemy_pos: Vec2,
    enemy_phase: f32,
    pub items: WorldItems,
    pub houses: Vec<HouseInfo>,
}

impl HoldoutWorld {
    pub fn new() -> Self {
        let houses = vec![
            HouseInfo { center: Vec2::new(30.0, 100.0), size: Vec2::new(30.0, 24.0) },
            HouseInfo { center: Vec2::new(110.0, 40.0), size: Vec2::new(24.0, 24.0) },
        ];
        let items = Rc::new(RefCell::new(vec![
            (Vec2::new(28.0, 102.0), ItemKind::Pistol),
            (Vec2::new(34.0, 96.0), ItemKind::Food),
            (Vec2::new(110.0, 42.0), ItemKind::Medkit),
            (Vec2::new(108.0, 38.0), ItemKind::Garbage),
        ]));
        Self {
            agent: AgentSnapshot {
                position: Vec2::new(70.0, 70.0),
                fov_range: 25.0,
                grab_range: 3.0,
                max_linear_speed: 8.0,
                max_angular_speed: 3.0,
                ..AgentSnapshot::default()
            },
            enemy_pos: Vec2::new(70.0, 20.0),
            enemy_phase: 0.0,
            items,
            houses,
        }
    }

    /// Advance world ground truth: the enemy patrols a slow circle, the
    /// applied command moves the agent.
    pub fn step(&mut self, dt: f32, command: &sv_agent::SteeringOutput) {
        self.enemy_phase += dt * 0.25;
        self.enemy_pos = Vec2::new(70.0, 55.0) + Vec2::from_angle(self.enemy_phase) * 35.0;

        let speed_scale = if command.run_mode { 1.5 } else { 1.0 };
        self.agent.position =
            self.agent.position + command.linear_velocity * (dt * speed_scale);
        if command.auto_orient {
            let v = command.linear_velocity;
            if v.length() > 0.01 {
                self.agent.orientation = v.y.atan2(v.x);
            }
        } else {
            self.agent.orientation += command.angular_velocity * dt;
        }
    }

    fn in_fov(&self, pos: Vec2) -> bool {
        self.agent.position.distance(pos) <= self.agent.fov_range
    }
}

impl WorldInterface for HoldoutWorld {
    fn agent_info(&self) -> AgentSnapshot {
        self.agent
    }

    fn world_info(&self) -> WorldInfo {
        WorldInfo { center: Vec2::new(70.0, 70.0), dimensions: Vec2::new(140.0, 140.0) }
    }

    fn entities_in_fov(&self) -> Vec<EntityInfo> {
        let mut out = Vec::new();
        if self.in_fov(self.enemy_pos) {
            out.push(EntityInfo::enemy(self.enemy_pos));
        }
        for &(pos, kind) in self.items.borrow().iter() {
            if self.in_fov(pos) {
                out.push(EntityInfo::item(pos, kind));
            }
        }
        out
    }

    fn houses_in_fov(&self) -> Vec<HouseInfo> {
        self.houses
            .iter()
            .filter(|h| self.in_fov(h.center))
            .copied()
            .collect()
    }

    fn purge_zone_info(&self, _entity: &EntityInfo) -> Option<PurgeZoneInfo> {
        None // no purge zones in this scenario
    }
}

// ── Inventory ─────────────────────────────────────────────────────────────────

/// Observable slot state, shared with the demo loop for the end-of-run
/// summary.
#[derive(Default)]
pub struct InventoryLog {
    pub held: Vec<ItemKind>,
    pub equipped: Option<ItemKind>,
    pub shots_fired: u32,
    pub grabs: u32,
    pub drops: u32,
}

/// Five slots; grabbing removes the ground-truth item from the shared world
/// list.  Value model: weapons beat consumables beat junk.
pub struct DemoInventory {
    world_items: WorldItems,
    pub log: Rc<RefCell<InventoryLog>>,
}

impl DemoInventory {
    pub fn new(world_items: WorldItems) -> Self {
        Self { world_items, log: Rc::new(RefCell::new(InventoryLog::default())) }
    }

    fn value(kind: ItemKind) -> u32 {
        match kind {
            ItemKind::Pistol | ItemKind::Shotgun => 3,
            ItemKind::Medkit | ItemKind::Food => 2,
            ItemKind::Garbage => 0,
            _ => 0,
        }
    }
}

impl Inventory for DemoInventory {
    fn grab(&mut self, item: &EntityInfo) -> bool {
        let Some(kind) = item.item_kind else {
            return false;
        };
        let mut log = self.log.borrow_mut();
        if log.held.len() >= 5 {
            return false;
        }
        // Remove the ground-truth item; refuse if it is already gone.
        let mut world = self.world_items.borrow_mut();
        let Some(i) = world
            .iter()
            .position(|&(p, k)| k == kind && p.distance(item.position) < 0.5)
        else {
            return false;
        };
        world.swap_remove(i);
        log.held.push(kind);
        log.grabs += 1;
        true
    }

    fn use_kind(&mut self, kind: ItemKind) -> bool {
        let mut log = self.log.borrow_mut();
        match log.held.iter().position(|&k| k == kind) {
            Some(i) => {
                log.held.remove(i);
                true
            }
            None => false,
        }
    }

    fn equip(&mut self, kind: ItemKind) -> bool {
        let mut log = self.log.borrow_mut();
        if !log.held.contains(&kind) {
            return false;
        }
        log.equipped = Some(kind);
        true
    }

    fn use_equipped(&mut self) -> bool {
        let mut log = self.log.borrow_mut();
        if log.equipped.is_none() {
            return false;
        }
        log.shots_fired += 1;
        true
    }

    fn drop_kind(&mut self, kind: ItemKind) -> bool {
        let mut log = self.log.borrow_mut();
        match log.held.iter().position(|&k| k == kind) {
            Some(i) => {
                log.held.remove(i);
                log.drops += 1;
                true
            }
            None => false,
        }
    }

    fn drop_empty(&mut self) -> bool {
        false // demo items never wear out
    }

    fn drop_lowest_value(&mut self) -> bool {
        let mut log = self.log.borrow_mut();
        let Some((i, _)) = log
            .held
            .iter()
            .enumerate()
            .min_by_key(|&(_, &k)| Self::value(k))
        else {
            return false;
        };
        log.held.remove(i);
        log.drops += 1;
        true
    }

    fn has_kind(&self, kind: ItemKind) -> bool {
        self.log.borrow().held.contains(&kind)
    }

    fn has_empty(&self) -> bool {
        false
    }

    fn is_full(&self) -> bool {
        self.log.borrow().held.len() >= 5
    }
}

// ── Steering ──────────────────────────────────────────────────────────────────

/// Minimal kinematics: full speed toward/away from the point, spin for the
/// look modes, straight-ahead drift for wander.
pub struct DemoSteering;

impl sv_agent::Steering for DemoSteering {
    fn calculate(
        &mut self,
        _dt: f32,
        request: &sv_agent::MovementRequest,
        agent: &AgentSnapshot,
    ) -> sv_agent::SteeringOutput {
        use sv_agent::MovementMode;

        let mut out = sv_agent::SteeringOutput { run_mode: request.run, ..Default::default() };
        match request.mode {
            MovementMode::Idle => {}
            MovementMode::Wander => {
                out.linear_velocity =
                    Vec2::from_angle(agent.orientation) * agent.max_linear_speed;
            }
            MovementMode::Seek { target } => {
                out.linear_velocity =
                    (target - agent.position).normalized() * agent.max_linear_speed;
            }
            MovementMode::Flee { from } => {
                out.linear_velocity =
                    (agent.position - from).normalized() * agent.max_linear_speed;
            }
            MovementMode::LookAt { target } => {
                let to = target - agent.position;
                let desired = to.y.atan2(to.x);
                let mut diff = desired - agent.orientation;
                while diff > std::f32::consts::PI {
                    diff -= std::f32::consts::TAU;
                }
                while diff < -std::f32::consts::PI {
                    diff += std::f32::consts::TAU;
                }
                out.angular_velocity = diff.clamp(-1.0, 1.0) * agent.max_angular_speed;
                out.auto_orient = false;
            }
            MovementMode::LookAround => {
                out.angular_velocity = agent.max_angular_speed;
                out.auto_orient = false;
            }
        }
        out
    }
}
