//! Fixed-size cell grid with CSR neighbor adjacency and flood-fill queries.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use sv_core::{CellIndex, Rect, Vec2};

use crate::{SpatialError, SpatialResult};

/// Connection cost to a straight (axis-aligned) neighbor.
pub const COST_STRAIGHT: f32 = 1.0;
/// Connection cost to a diagonal neighbor.
pub const COST_DIAGONAL: f32 = 1.5;

const STRAIGHT_DIRECTIONS: [(i64, i64); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];
const DIAGONAL_DIRECTIONS: [(i64, i64); 4] = [(1, 1), (-1, 1), (-1, -1), (1, -1)];

/// A grid of `columns * rows` square cells over a world-space region.
///
/// Cells are indexed row-major (`index = row * columns + col`) and connected
/// bidirectionally to their in-bounds geometric neighbors.  Built once; never
/// resized.
pub struct GridGraph {
    origin: Vec2,
    columns: u32,
    rows: u32,
    cell_size: f32,

    // ── CSR adjacency ─────────────────────────────────────────────────────
    /// CSR row pointer.  Connections of cell `c` are at positions
    /// `conn_start[c] .. conn_start[c+1]`.  Length = `cell_count + 1`.
    conn_start: Vec<u32>,
    /// Destination cell of each connection.
    conn_to: Vec<CellIndex>,
    /// Traversal cost of each connection (1.0 straight / 1.5 diagonal).
    conn_cost: Vec<f32>,
}

impl GridGraph {
    /// Build a grid of `columns * rows` cells of `cell_size` metres starting
    /// at `origin` (the world position of the grid's minimum corner).
    ///
    /// Every cell is connected to its 4 in-bounds straight neighbors at cost
    /// 1.0; with `diagonal` also to its 4 diagonal neighbors at cost 1.5.
    /// Duplicate connections are rejected during construction.
    pub fn new(
        origin: Vec2,
        columns: u32,
        rows: u32,
        cell_size: f32,
        diagonal: bool,
    ) -> SpatialResult<Self> {
        if columns == 0 || rows == 0 {
            return Err(SpatialError::EmptyGrid { columns, rows });
        }
        if !(cell_size > 0.0) {
            return Err(SpatialError::BadCellSize(cell_size));
        }

        let cell_count = (columns as usize) * (rows as usize);
        let mut conn_start = Vec::with_capacity(cell_count + 1);
        let mut conn_to = Vec::new();
        let mut conn_cost = Vec::new();

        conn_start.push(0u32);
        let mut targets_seen: FxHashSet<CellIndex> = FxHashSet::default();

        let diagonal_count = if diagonal { DIAGONAL_DIRECTIONS.len() } else { 0 };

        for row in 0..rows as i64 {
            for col in 0..columns as i64 {
                targets_seen.clear();

                let directions = STRAIGHT_DIRECTIONS
                    .iter()
                    .map(|&d| (d, COST_STRAIGHT))
                    .chain(
                        DIAGONAL_DIRECTIONS
                            .iter()
                            .map(|&d| (d, COST_DIAGONAL))
                            .take(diagonal_count),
                    );

                for ((dc, dr), cost) in directions {
                    let (nc, nr) = (col + dc, row + dr);
                    if nc < 0 || nc >= columns as i64 || nr < 0 || nr >= rows as i64 {
                        continue;
                    }
                    let to = CellIndex((nr * columns as i64 + nc) as u32);
                    if !targets_seen.insert(to) {
                        continue; // duplicate connection
                    }
                    conn_to.push(to);
                    conn_cost.push(cost);
                }

                conn_start.push(conn_to.len() as u32);
            }
        }

        Ok(Self { origin, columns, rows, cell_size, conn_start, conn_to, conn_cost })
    }

    /// Build a grid covering `bounds`, choosing column/row counts so the
    /// whole rectangle is tiled with `cell_size` cells (last partial cell
    /// rounded up).
    pub fn covering(bounds: Rect, cell_size: f32, diagonal: bool) -> SpatialResult<Self> {
        if !(cell_size > 0.0) {
            return Err(SpatialError::BadCellSize(cell_size));
        }
        let columns = (bounds.size.x / cell_size).ceil().max(0.0) as u32;
        let rows = (bounds.size.y / cell_size).ceil().max(0.0) as u32;
        let origin = bounds.center - bounds.size * 0.5;
        Self::new(origin, columns, rows, cell_size, diagonal)
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    pub fn cell_count(&self) -> usize {
        (self.columns as usize) * (self.rows as usize)
    }

    /// Total number of directed connections in the graph.
    pub fn connection_count(&self) -> usize {
        self.conn_to.len()
    }

    // ── World ↔ cell mapping ──────────────────────────────────────────────

    /// The cell containing `pos`, or `CellIndex::INVALID` when `pos` lies
    /// outside the grid.  Never an out-of-range access.
    pub fn cell_at_world(&self, pos: Vec2) -> CellIndex {
        let local = pos - self.origin;
        if local.x < 0.0 || local.y < 0.0 {
            return CellIndex::INVALID;
        }
        let col = (local.x / self.cell_size) as i64;
        let row = (local.y / self.cell_size) as i64;
        if col >= self.columns as i64 || row >= self.rows as i64 {
            return CellIndex::INVALID;
        }
        CellIndex((row * self.columns as i64 + col) as u32)
    }

    /// World-space center of a valid cell.
    ///
    /// `cell_at_world(cell_center(i)) == i` holds for every in-bounds `i`.
    pub fn cell_center(&self, idx: CellIndex) -> Vec2 {
        let col = (idx.0 % self.columns) as f32;
        let row = (idx.0 / self.columns) as f32;
        self.origin + Vec2::new((col + 0.5) * self.cell_size, (row + 0.5) * self.cell_size)
    }

    /// `true` if `idx` addresses a cell of this grid.
    #[inline]
    pub fn is_valid(&self, idx: CellIndex) -> bool {
        idx.is_valid() && idx.index() < self.cell_count()
    }

    // ── Adjacency ─────────────────────────────────────────────────────────

    /// Iterator over `(neighbor, cost)` for all outgoing connections of
    /// `idx`.  This is a contiguous index range — no heap allocation.
    #[inline]
    pub fn neighbors(&self, idx: CellIndex) -> impl Iterator<Item = (CellIndex, f32)> + '_ {
        let start = self.conn_start[idx.index()] as usize;
        let end = self.conn_start[idx.index() + 1] as usize;
        self.conn_to[start..end]
            .iter()
            .copied()
            .zip(self.conn_cost[start..end].iter().copied())
    }

    /// Number of outgoing connections of `idx`.
    #[inline]
    pub fn neighbor_count(&self, idx: CellIndex) -> usize {
        let start = self.conn_start[idx.index()] as usize;
        let end = self.conn_start[idx.index() + 1] as usize;
        end - start
    }

    // ── Flood-fill queries ────────────────────────────────────────────────

    /// All cells whose centers lie within `radius` of `pos` *and* are
    /// reachable from the cell at `pos` through a chain of such cells.
    ///
    /// A cell geometrically inside the radius but graph-disconnected from
    /// the start is excluded — an accepted approximation, since a uniformly
    /// connected grid only disconnects at the radius fringe.  An out-of-grid
    /// `pos` (or a start cell whose own center fails the radius test) yields
    /// the empty set.
    pub fn cells_in_radius(&self, pos: Vec2, radius: f32) -> FxHashSet<CellIndex> {
        let r2 = radius * radius;
        self.flood(pos, move |_, center| center.distance_squared(pos) <= r2)
    }

    /// All cells whose centers lie inside `rect` and are reachable from the
    /// cell at `rect.center` through a chain of such cells.
    pub fn cells_in_rect(&self, rect: Rect) -> FxHashSet<CellIndex> {
        self.flood(rect.center, move |_, center| rect.contains(center))
    }

    /// Iterative breadth-first flood fill from the cell at `seed`, expanding
    /// through connections into every unvisited cell whose center passes
    /// `accept`.
    fn flood(
        &self,
        seed: Vec2,
        accept: impl Fn(CellIndex, Vec2) -> bool,
    ) -> FxHashSet<CellIndex> {
        let mut cells = FxHashSet::default();

        let start = self.cell_at_world(seed);
        if !self.is_valid(start) || !accept(start, self.cell_center(start)) {
            return cells;
        }

        let mut queue = VecDeque::new();
        cells.insert(start);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            for (neighbor, _cost) in self.neighbors(current) {
                if cells.contains(&neighbor) {
                    continue;
                }
                if !accept(neighbor, self.cell_center(neighbor)) {
                    continue;
                }
                cells.insert(neighbor);
                queue.push_back(neighbor);
            }
        }

        cells
    }
}
