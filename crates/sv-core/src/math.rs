//! Planar vector math and axis-aligned rectangles.
//!
//! All coordinates are world-space metres stored as `f32`.  The survival
//! world is a few hundred metres across, so single precision is exact enough
//! for every distance and angle computed here.

/// A 2-D world-space vector / point.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Vec2) -> f32 {
        self.distance_squared(other).sqrt()
    }

    /// Squared distance — cheaper than [`distance`](Self::distance) for
    /// comparisons; use it whenever only relative order matters.
    #[inline]
    pub fn distance_squared(self, other: Vec2) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    #[inline]
    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Unit-length copy.  The zero vector normalizes to zero rather than NaN.
    pub fn normalized(self) -> Vec2 {
        let len = self.length();
        if len <= f32::EPSILON {
            return Vec2::ZERO;
        }
        Vec2::new(self.x / len, self.y / len)
    }

    #[inline]
    pub fn dot(self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Unsigned angle in radians between `self` and `other`, in `[0, π]`.
    ///
    /// Degenerate (zero-length) inputs yield 0 so alignment checks against a
    /// standstill target read as "already aligned" instead of NaN.
    pub fn angle_between(self, other: Vec2) -> f32 {
        let a = self.normalized();
        let b = other.normalized();
        if a == Vec2::ZERO || b == Vec2::ZERO {
            return 0.0;
        }
        a.dot(b).clamp(-1.0, 1.0).acos()
    }

    /// Direction vector for an orientation angle (radians, x-axis = 0).
    #[inline]
    pub fn from_angle(radians: f32) -> Vec2 {
        Vec2::new(radians.cos(), radians.sin())
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl std::fmt::Display for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

// ── Rect ──────────────────────────────────────────────────────────────────────

/// An axis-aligned rectangle described by its center and full extents.
///
/// Houses and the world bounds are both communicated this way by the host.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub center: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self { center, size }
    }

    /// `true` if `point` lies inside (boundary-inclusive).
    pub fn contains(&self, point: Vec2) -> bool {
        let half_w = self.size.x * 0.5;
        let half_h = self.size.y * 0.5;
        point.x >= self.center.x - half_w
            && point.x <= self.center.x + half_w
            && point.y >= self.center.y - half_h
            && point.y <= self.center.y + half_h
    }

    /// A copy scaled about its own center — e.g. `shrunk(0.8)` for an
    /// "am I well inside this house" test that ignores the doorway fringe.
    pub fn shrunk(&self, factor: f32) -> Rect {
        Rect::new(self.center, self.size * factor)
    }
}

// ── Scalar helpers ────────────────────────────────────────────────────────────

/// Linear interpolation: `a` at `t = 0`, `b` at `t = 1`.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
