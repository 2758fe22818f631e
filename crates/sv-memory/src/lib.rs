//! `sv-memory` — what the agent remembers about a partially observed world.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                     |
//! |-------------|--------------------------------------------------------------|
//! | [`records`] | `LocatedHouse`, `LocatedItem`, `ItemQuery`                   |
//! | [`memory`]  | `SurvivorMemory` — percept intake, clearing, queries         |
//!
//! # Update pipeline
//!
//! [`SurvivorMemory::update`] runs once per frame, before the decision tree
//! ticks:
//!
//! 1. house re-visit countdowns advance; expired houses lose their cleared
//!    flag and their cells are un-marked as scanned;
//! 2. every cell inside the agent's FOV radius is marked scanned;
//! 3. (throttled) newly sighted items and houses become records — items
//!    stamp positive influence, houses are keyed by the cell of their
//!    center so re-sighting is a no-op;
//! 4. visible enemies and purge zones stamp negative influence; a bite
//!    stamps the agent's own cell;
//! 5. uncleared houses whose area passes the explored threshold become
//!    cleared and start their re-visit countdown;
//! 6. the influence map runs its throttled propagation.
//!
//! Every "closest …" query returns `Option` — an empty candidate set is an
//! explicit miss, never an assumption.

pub mod memory;
pub mod records;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use memory::SurvivorMemory;
pub use records::{ItemQuery, LocatedHouse, LocatedItem};
