//! `sv-core` — foundational types for the `survivor-ai` framework.
//!
//! This crate is a dependency of every other `sv-*` crate.  It intentionally
//! has no `sv-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                             |
//! |-------------|------------------------------------------------------|
//! | [`ids`]     | `CellIndex` typed id with an `INVALID` sentinel      |
//! | [`math`]    | `Vec2`, `Rect`, `lerp`, angle helpers                |
//! | [`time`]    | `Cooldown` — interval throttle for per-frame work    |
//! | [`rng`]     | `AgentRng` — deterministic per-agent randomness      |
//! | [`items`]   | `ItemKind` enum                                      |
//! | [`percept`] | FOV snapshot types fed in by the host world          |
//! | [`error`]   | `SvError`, `SvResult`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod error;
pub mod ids;
pub mod items;
pub mod math;
pub mod percept;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{SvError, SvResult};
pub use ids::CellIndex;
pub use items::ItemKind;
pub use math::{lerp, Rect, Vec2};
pub use percept::{AgentSnapshot, EntityInfo, EntityKind, HouseInfo, PurgeZoneInfo, WorldInfo};
pub use rng::AgentRng;
pub use time::Cooldown;
