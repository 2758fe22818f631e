//! The tri-state result every behavior node returns.

/// Outcome of executing one behavior node for one tick.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum BehaviorState {
    /// The node could not do its work (unmet precondition, false predicate,
    /// exhausted alternatives).  Never an error — the parent decides what
    /// happens next.
    Failure,
    /// The node completed its work this tick.
    Success,
    /// Multi-tick work is in progress.  The tree re-evaluates from the root
    /// next tick; the node must re-derive its progress from the context.
    Running,
}

impl BehaviorState {
    /// `true` for `Success`.
    #[inline]
    pub fn is_success(self) -> bool {
        self == BehaviorState::Success
    }

    /// `true` for `Failure`.
    #[inline]
    pub fn is_failure(self) -> bool {
        self == BehaviorState::Failure
    }
}

impl std::fmt::Display for BehaviorState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            BehaviorState::Failure => "failure",
            BehaviorState::Success => "success",
            BehaviorState::Running => "running",
        })
    }
}
