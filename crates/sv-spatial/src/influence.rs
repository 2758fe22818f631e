//! Influence map — a decaying scalar "danger/opportunity" layer plus a
//! per-cell scanned flag, on top of a [`GridGraph`].
//!
//! # Propagation model
//!
//! Propagation is a bounded heuristic diffusion, not a physical simulation.
//! Each pass computes, for every in-scope cell, a candidate value as the
//! highest-magnitude `neighbor * exp(-cost * decay)` over all neighbors and
//! blends it with the cell's current value:
//!
//! ```text
//! next = lerp(candidate, current, momentum)     // momentum 1 = never change
//! ```
//!
//! Results are written to a separate buffer and committed only after the
//! full scan, so one pass never mixes already-updated and not-yet-updated
//! neighbor values.  Passes are throttled to once per configured interval;
//! calls in between accumulate time and otherwise do nothing.
//!
//! Direct event writes (`set_influence*`) bypass the blending entirely;
//! every write path clamps to `±max_influence`.

use rustc_hash::FxHashSet;

use sv_core::{lerp, CellIndex, Cooldown, Vec2};

use crate::GridGraph;

const DEFAULT_MOMENTUM: f32 = 0.2;
const DEFAULT_DECAY: f32 = 0.5;
const DEFAULT_INTERVAL: f32 = 0.05;
const DEFAULT_MAX_INFLUENCE: f32 = 100.0;

/// Scalar influence and scanned flags layered over a grid graph.
pub struct InfluenceMap {
    graph: GridGraph,

    influence: Vec<f32>,
    scanned: Vec<bool>,
    /// Propagation double buffer, always `cell_count` long.
    buffer: Vec<f32>,

    momentum: f32,
    decay: f32,
    max_influence: f32,
    throttle: Cooldown,
}

impl InfluenceMap {
    /// Wrap a grid with zeroed influence and unscanned cells.
    pub fn new(graph: GridGraph) -> Self {
        let n = graph.cell_count();
        Self {
            graph,
            influence: vec![0.0; n],
            scanned: vec![false; n],
            buffer: vec![0.0; n],
            momentum: DEFAULT_MOMENTUM,
            decay: DEFAULT_DECAY,
            max_influence: DEFAULT_MAX_INFLUENCE,
            throttle: Cooldown::new(DEFAULT_INTERVAL),
        }
    }

    /// The underlying grid (read-only; the graph is never modified after
    /// construction).
    pub fn graph(&self) -> &GridGraph {
        &self.graph
    }

    // ── Parameters ────────────────────────────────────────────────────────

    pub fn momentum(&self) -> f32 {
        self.momentum
    }

    /// Tendency to retain the current value: 0 snaps to the neighbor-derived
    /// candidate, 1 never changes.  Clamped to `[0, 1]`.
    pub fn set_momentum(&mut self, momentum: f32) {
        self.momentum = momentum.clamp(0.0, 1.0);
    }

    pub fn decay(&self) -> f32 {
        self.decay
    }

    /// Influence fall-off per unit of connection cost.  Clamped non-negative.
    pub fn set_decay(&mut self, decay: f32) {
        self.decay = decay.max(0.0);
    }

    pub fn propagation_interval(&self) -> f32 {
        self.throttle.interval()
    }

    pub fn set_propagation_interval(&mut self, interval: f32) {
        self.throttle.set_interval(interval);
    }

    pub fn max_influence(&self) -> f32 {
        self.max_influence
    }

    // ── Influence reads ───────────────────────────────────────────────────

    /// Influence of a valid cell.
    #[inline]
    pub fn influence(&self, idx: CellIndex) -> f32 {
        self.influence[idx.index()]
    }

    /// Influence of the cell containing `pos`; `None` when `pos` lies
    /// outside the grid.
    pub fn influence_at(&self, pos: Vec2) -> Option<f32> {
        let idx = self.graph.cell_at_world(pos);
        self.graph.is_valid(idx).then(|| self.influence(idx))
    }

    // ── Influence writes (event-driven, bypass propagation) ───────────────

    /// Directly set a cell's influence.  Invalid indices are ignored; the
    /// value is clamped to `±max_influence`.
    pub fn set_influence(&mut self, idx: CellIndex, value: f32) {
        if self.graph.is_valid(idx) {
            self.influence[idx.index()] = value.clamp(-self.max_influence, self.max_influence);
        }
    }

    /// Directly set the influence of the cell containing `pos`.  Positions
    /// outside the grid are ignored.
    pub fn set_influence_at(&mut self, pos: Vec2, value: f32) {
        self.set_influence(self.graph.cell_at_world(pos), value);
    }

    /// Directly set every cell in `cells`.
    pub fn set_influence_over(&mut self, cells: &FxHashSet<CellIndex>, value: f32) {
        for &idx in cells {
            self.set_influence(idx, value);
        }
    }

    // ── Propagation ───────────────────────────────────────────────────────

    /// One throttled full-grid propagation pass.  Calls within the
    /// configured interval are no-ops.
    pub fn propagate(&mut self, dt: f32) {
        if !self.throttle.tick(dt) {
            return;
        }

        let mut buffer = std::mem::take(&mut self.buffer);
        for i in 0..self.graph.cell_count() {
            buffer[i] = self.blended_candidate(CellIndex(i as u32));
        }

        // Commit: the freshly computed buffer becomes the live layer and the
        // old layer becomes next pass's scratch space.
        std::mem::swap(&mut self.influence, &mut buffer);
        self.buffer = buffer;
    }

    /// One throttled propagation pass restricted to the connected cells
    /// within `radius` of `pos` (cost control for large grids).
    ///
    /// Only in-scope cells are committed; everything else keeps its current
    /// value.
    pub fn propagate_around(&mut self, dt: f32, pos: Vec2, radius: f32) {
        if !self.throttle.tick(dt) {
            return;
        }

        let scope = self.graph.cells_in_radius(pos, radius);
        let updates: Vec<(CellIndex, f32)> = scope
            .iter()
            .map(|&idx| (idx, self.blended_candidate(idx)))
            .collect();

        for (idx, value) in updates {
            self.influence[idx.index()] = value;
        }
    }

    /// The post-blend, clamped next value for one cell, reading only the
    /// current (pre-pass) influence layer.
    fn blended_candidate(&self, idx: CellIndex) -> f32 {
        let mut highest = 0.0f32;
        for (neighbor, cost) in self.graph.neighbors(idx) {
            let candidate = self.influence[neighbor.index()] * (-cost * self.decay).exp();
            if candidate.abs() > highest.abs() {
                highest = candidate;
            }
        }
        lerp(highest, self.influence[idx.index()], self.momentum)
            .clamp(-self.max_influence, self.max_influence)
    }

    // ── Scanned flags ─────────────────────────────────────────────────────

    /// `true` if the agent's sensor sweep has covered this cell (and no
    /// reset has since un-marked it).
    #[inline]
    pub fn is_scanned(&self, idx: CellIndex) -> bool {
        self.scanned[idx.index()]
    }

    /// Mark or un-mark one cell.  Invalid indices are ignored.
    pub fn set_scanned(&mut self, idx: CellIndex, scanned: bool) {
        if self.graph.is_valid(idx) {
            self.scanned[idx.index()] = scanned;
        }
    }

    /// Mark or un-mark every cell in `cells`.
    pub fn set_scanned_over(&mut self, cells: &FxHashSet<CellIndex>, scanned: bool) {
        for &idx in cells {
            self.set_scanned(idx, scanned);
        }
    }

    /// Fraction of `cells` currently scanned, in `[0, 1]`.  An empty set
    /// reports 0 (nothing there to have explored).
    pub fn scanned_fraction(&self, cells: &FxHashSet<CellIndex>) -> f32 {
        if cells.is_empty() {
            return 0.0;
        }
        let scanned = cells.iter().filter(|&&idx| self.is_scanned(idx)).count();
        scanned as f32 / cells.len() as f32
    }
}
