//! Movement request and steering collaborator types.
//!
//! The decision tree never computes velocities.  It rewrites a
//! [`MovementRequest`] — a tagged mode plus a run flag — and the host's
//! [`Steering`] implementation turns that into a kinematic command.
//! Switching behaviors is just overwriting the request in place; an
//! abandoned in-progress movement gets no cleanup hook and needs none.

use sv_core::{AgentSnapshot, Vec2};

// ── MovementMode ──────────────────────────────────────────────────────────────

/// What the agent currently wants its legs and neck to do.
///
/// A tagged enum rather than a polymorphic steering object, so "which mode
/// is active" is a plain comparison.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub enum MovementMode {
    /// No movement requested (pre-first-decision only).
    #[default]
    Idle,
    /// Roam without a destination.
    Wander,
    /// Move toward a world position.
    Seek { target: Vec2 },
    /// Move away from a world position.
    Flee { from: Vec2 },
    /// Stand and turn to face a world position.
    LookAt { target: Vec2 },
    /// Stand and sweep the sensors in a full rotation.
    LookAround,
}

// ── MovementRequest ───────────────────────────────────────────────────────────

/// The blackboard's cached movement state: survives across ticks so a
/// `Running` leaf abandoned mid-behavior leaves a coherent command behind.
#[derive(Copy, Clone, Debug, Default)]
pub struct MovementRequest {
    pub mode: MovementMode,
    /// Sprint flag, set by escape behaviors and cleared by calm ones.
    pub run: bool,
}

// ── SteeringOutput ────────────────────────────────────────────────────────────

/// The host-facing kinematic command returned by every update.
#[derive(Copy, Clone, Debug)]
pub struct SteeringOutput {
    pub linear_velocity: Vec2,
    /// Radians per second; positive is counter-clockwise.
    pub angular_velocity: f32,
    pub run_mode: bool,
    /// When set, the host orients the agent along its velocity and
    /// `angular_velocity` is ignored.
    pub auto_orient: bool,
}

impl Default for SteeringOutput {
    fn default() -> Self {
        Self {
            linear_velocity: Vec2::ZERO,
            angular_velocity: 0.0,
            run_mode: false,
            auto_orient: true,
        }
    }
}

// ── Steering trait ────────────────────────────────────────────────────────────

/// The kinematic collaborator: turns a movement request into velocities.
///
/// Seek/flee/wander/look formulas live host-side behind this trait; the
/// decision layer is only responsible for choosing the mode.
pub trait Steering {
    fn calculate(
        &mut self,
        dt: f32,
        request: &MovementRequest,
        agent: &AgentSnapshot,
    ) -> SteeringOutput;
}

/// A [`Steering`] that stands still (zero velocities) while faithfully
/// propagating the run flag.  Placeholder for tests and headless runs.
pub struct NullSteering;

impl Steering for NullSteering {
    fn calculate(
        &mut self,
        _dt: f32,
        request: &MovementRequest,
        _agent: &AgentSnapshot,
    ) -> SteeringOutput {
        SteeringOutput { run_mode: request.run, ..SteeringOutput::default() }
    }
}
