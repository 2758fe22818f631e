//! The host world collaborator trait.

use sv_core::{AgentSnapshot, EntityInfo, HouseInfo, PurgeZoneInfo, WorldInfo};

/// Everything the decision layer consumes from the host simulation.
///
/// The host owns the world; the agent never holds onto anything returned
/// here past the current frame.  Test doubles script these methods to drive
/// the decision tree through specific situations.
pub trait WorldInterface {
    /// Current state of the agent's own body.
    fn agent_info(&self) -> AgentSnapshot;

    /// Static world bounds.  Queried once at agent initialization to size
    /// the spatial grid.
    fn world_info(&self) -> WorldInfo;

    /// Every entity currently inside the agent's field of view.
    fn entities_in_fov(&self) -> Vec<EntityInfo>;

    /// Every house currently inside the agent's field of view.
    fn houses_in_fov(&self) -> Vec<HouseInfo>;

    /// Detail record for a purge-zone entity.  `None` if `entity` is not a
    /// purge zone (or the zone has already despawned).
    fn purge_zone_info(&self, entity: &EntityInfo) -> Option<PurgeZoneInfo>;
}
