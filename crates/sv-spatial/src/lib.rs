//! `sv-spatial` — the agent's spatial index and influence layer.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                      |
//! |---------------|---------------------------------------------------------------|
//! | [`grid`]      | `GridGraph` — fixed-size cell grid in CSR adjacency format    |
//! | [`influence`] | `InfluenceMap` — decaying scalar layer + scanned flags        |
//! | [`error`]     | `SpatialError`, `SpatialResult<T>`                            |
//!
//! # Data layout
//!
//! The grid's neighbor adjacency uses **Compressed Sparse Row (CSR)**
//! format: given a `CellIndex c`, its outgoing connections occupy the slice
//!
//! ```text
//! conn_to[ conn_start[c] .. conn_start[c+1] ]
//! ```
//!
//! Each cell connects to its 4 straight neighbors at cost 1.0 and — when
//! diagonal connectivity is enabled — its 4 diagonal neighbors at cost 1.5.
//! The graph is built once from the world bounds at agent initialization and
//! never resized; iteration over a cell's neighbors is a contiguous memory
//! scan, which both the flood-fill queries and the influence propagation's
//! inner loop depend on.

pub mod error;
pub mod grid;
pub mod influence;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{SpatialError, SpatialResult};
pub use grid::GridGraph;
pub use influence::InfluenceMap;
