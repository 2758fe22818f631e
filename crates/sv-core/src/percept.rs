//! Percept snapshot types fed in by the host world each frame.
//!
//! These are plain value types: the agent copies what the host's
//! field-of-view enumeration reports into frame-scoped buffers, clears them
//! in bulk next frame, and never holds references into host memory.

use crate::{ItemKind, Rect, Vec2};

// ── Agent ─────────────────────────────────────────────────────────────────────

/// Everything the host reports about the agent's own body this frame.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentSnapshot {
    pub position: Vec2,
    /// Facing angle in radians, x-axis = 0.
    pub orientation: f32,
    pub health: f32,
    pub energy: f32,
    /// Sensor sweep radius — everything inside is "seen" this frame.
    pub fov_range: f32,
    /// Items within this distance can be grabbed.
    pub grab_range: f32,
    pub max_linear_speed: f32,
    pub max_angular_speed: f32,
    /// Set by the host for one frame when an enemy lands a hit.
    pub was_bitten: bool,
    pub low_health_threshold: f32,
    pub low_energy_threshold: f32,
}

impl AgentSnapshot {
    /// Unit forward vector derived from `orientation`.
    #[inline]
    pub fn forward(&self) -> Vec2 {
        Vec2::from_angle(self.orientation)
    }

    pub fn is_health_low(&self) -> bool {
        self.health < self.low_health_threshold
    }

    pub fn is_energy_low(&self) -> bool {
        self.energy < self.low_energy_threshold
    }
}

impl Default for AgentSnapshot {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            orientation: 0.0,
            health: 10.0,
            energy: 10.0,
            fov_range: 15.0,
            grab_range: 2.0,
            max_linear_speed: 1.0,
            max_angular_speed: 1.0,
            was_bitten: false,
            low_health_threshold: 4.0,
            low_energy_threshold: 4.0,
        }
    }
}

// ── World ─────────────────────────────────────────────────────────────────────

/// Static world bounds, queried once at agent initialization.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldInfo {
    pub center: Vec2,
    pub dimensions: Vec2,
}

impl WorldInfo {
    /// The world extent as a [`Rect`].
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(self.center, self.dimensions)
    }
}

// ── FOV entities ──────────────────────────────────────────────────────────────

/// Tag for what an FOV entity is.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EntityKind {
    Enemy,
    Item,
    PurgeZone,
}

/// One entity currently inside the agent's field of view.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityInfo {
    pub kind: EntityKind,
    pub position: Vec2,
    /// Populated only when `kind == EntityKind::Item`.
    pub item_kind: Option<ItemKind>,
}

impl EntityInfo {
    pub fn enemy(position: Vec2) -> Self {
        Self { kind: EntityKind::Enemy, position, item_kind: None }
    }

    pub fn item(position: Vec2, item_kind: ItemKind) -> Self {
        Self { kind: EntityKind::Item, position, item_kind: Some(item_kind) }
    }

    pub fn purge_zone(position: Vec2) -> Self {
        Self { kind: EntityKind::PurgeZone, position, item_kind: None }
    }
}

/// One house currently inside the agent's field of view.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HouseInfo {
    pub center: Vec2,
    pub size: Vec2,
}

impl HouseInfo {
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(self.center, self.size)
    }
}

/// Detail record for a purge-zone entity, queried on demand.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PurgeZoneInfo {
    pub center: Vec2,
    pub radius: f32,
}
