//! `sv-agent` — the survivor agent's decision layer.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                       |
//! |---------------|----------------------------------------------------------------|
//! | [`world`]     | `WorldInterface` — the host world collaborator trait           |
//! | [`inventory`] | `Inventory` — the host inventory collaborator trait            |
//! | [`steering`]  | `MovementMode`, `MovementRequest`, `SteeringOutput`, `Steering`|
//! | [`blackboard`]| `Blackboard` — the typed context the tree reads and writes     |
//! | [`conditions`]| Read-only predicates over the blackboard                       |
//! | [`actions`]   | Side-effecting leaves (movement requests, inventory calls)     |
//! | [`tree`]      | `survivor_tree()` — the hand-authored priority selector        |
//! | [`agent`]     | `SurvivorAgent` — the once-per-frame driver                    |
//! | [`error`]     | `AgentError`, `AgentResult<T>`                                 |
//!
//! # Per-frame pipeline
//!
//! ```text
//! SurvivorAgent::update(dt, world):
//!   ① Percepts — snapshot agent state, FOV entities/houses, purge zones
//!               into the blackboard's frame-scoped buffers.
//!   ② Memory  — SurvivorMemory::update integrates the percepts
//!               (scanned cells, sightings, danger stamps, propagation).
//!   ③ Decide  — the behavior tree ticks against the blackboard; leaves
//!               rewrite the movement request and call the inventory.
//!   ④ Steer   — the Steering collaborator turns the movement request
//!               into the host-facing SteeringOutput command.
//! ```
//!
//! Everything is synchronous and owned by one agent; the host calls
//! `update` once per simulation frame.  A failed tree root simply leaves
//! the previous movement request in place — never a fault.

pub mod actions;
pub mod agent;
pub mod blackboard;
pub mod conditions;
pub mod error;
pub mod inventory;
pub mod steering;
pub mod tree;
pub mod world;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use agent::SurvivorAgent;
pub use blackboard::{Blackboard, SurvivorState};
pub use error::{AgentError, AgentResult};
pub use inventory::Inventory;
pub use steering::{MovementMode, MovementRequest, NullSteering, Steering, SteeringOutput};
pub use tree::survivor_tree;
pub use world::WorldInterface;
