//! holdout — smallest end-to-end run of the survivor-ai stack.
//!
//! One agent wakes up empty-handed between two houses while an enemy
//! patrols the open ground.  Over a few simulated minutes it should locate
//! the houses, loot a weapon and supplies, and keep clear of (or shoot at)
//! the patroller — all emergent from the decision tree, the influence map,
//! and spatial memory.

mod world;

use std::time::Instant;

use anyhow::Result;

use sv_agent::{MovementMode, SurvivorAgent};

use world::{DemoInventory, DemoSteering, HoldoutWorld};

// ── Constants ─────────────────────────────────────────────────────────────────

const DT: f32 = 0.05; // 20 Hz decision rate
const FRAMES: u32 = 6_000; // 5 simulated minutes
const REPORT_EVERY: u32 = 400;
const SEED: u64 = 44;

fn mode_label(mode: MovementMode) -> &'static str {
    match mode {
        MovementMode::Idle => "idle",
        MovementMode::Wander => "wander",
        MovementMode::Seek { .. } => "seek",
        MovementMode::Flee { .. } => "flee",
        MovementMode::LookAt { .. } => "look-at",
        MovementMode::LookAround => "look-around",
    }
}

fn main() -> Result<()> {
    env_logger::init();

    println!("=== holdout — survivor-ai demo ===");
    println!("Frames: {FRAMES}  |  dt: {DT} s  |  Seed: {SEED}");
    println!();

    let mut world = HoldoutWorld::new();
    let inventory = DemoInventory::new(world.items.clone());
    let inventory_log = inventory.log.clone();

    let mut agent = SurvivorAgent::new(&world, Box::new(inventory), Box::new(DemoSteering), SEED)?;
    {
        let graph = agent.blackboard().memory.influence().graph();
        println!(
            "Grid: {}x{} cells of {} m ({} connections)",
            graph.columns(),
            graph.rows(),
            graph.cell_size(),
            graph.connection_count()
        );
        println!();
    }

    // ── Run ───────────────────────────────────────────────────────────────
    let t0 = Instant::now();
    for frame in 0..FRAMES {
        let command = agent.update(DT, &world);
        world.step(DT, &command);

        if frame % REPORT_EVERY == 0 {
            let bb = agent.blackboard();
            println!(
                "t={:6.1}s  pos=({:5.1},{:5.1})  mode={:<11}  state={:?}  items={}",
                frame as f32 * DT,
                world.agent.position.x,
                world.agent.position.y,
                mode_label(bb.movement.mode),
                bb.state,
                inventory_log.borrow().held.len(),
            );
        }
    }
    let elapsed = t0.elapsed();

    // ── Summary ───────────────────────────────────────────────────────────
    let log = inventory_log.borrow();
    let bb = agent.blackboard();
    let graph = bb.memory.influence().graph();
    let scanned = (0..graph.cell_count() as u32)
        .filter(|&i| bb.memory.influence().is_scanned(sv_core::CellIndex(i)))
        .count();

    println!();
    println!("Run complete in {:.3} s wall time", elapsed.as_secs_f64());
    println!("  grabs: {}  drops: {}  shots: {}", log.grabs, log.drops, log.shots_fired);
    println!(
        "  holding: {:?}  (weapon: {})",
        log.held,
        log.held.iter().any(|k| k.is_weapon())
    );
    println!(
        "  houses located: {}  (cleared: {})",
        bb.memory.located_houses().count(),
        bb.memory.located_houses().filter(|h| h.is_cleared()).count()
    );
    println!(
        "  cells scanned: {}/{}  items still on the ground: {}",
        scanned,
        graph.cell_count(),
        world.items.borrow().len()
    );

    if !log.held.iter().any(|k| k.is_weapon()) {
        println!("  (agent never armed itself — unlucky wander path)");
    }

    Ok(())
}
