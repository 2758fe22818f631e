//! `sv-bt` — behavior-tree decision engine.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                       |
//! |---------------|----------------------------------------------------------------|
//! | [`state`]     | `BehaviorState` — `{Failure, Success, Running}`                |
//! | [`node`]      | `Behavior<C>` trait, `Action`, `Conditional` leaves            |
//! | [`composite`] | `Sequence`, `PartialSequence`, `Selector`, `Parallel`          |
//! | [`decorator`] | `Not`, `While`, `Wait`                                         |
//! | [`tree`]      | `BehaviorTree<C>` — the per-frame driver                       |
//! | [`builder`]   | Free helpers so tree composition reads declaratively           |
//!
//! # Design notes
//!
//! The engine is generic over a context type `C` — the blackboard.  Every
//! node implements one contract:
//!
//! ```text
//! Behavior<C>::execute(&mut self, ctx: &mut C) -> BehaviorState
//! ```
//!
//! Actions are the sole place side effects occur; conditionals take `&C` and
//! are read-only by construction.  `Running` is a signal meaning "re-derive
//! progress from the context next tick" — the tree is re-traversed from the
//! root every frame, never suspended mid-walk.  The only cross-tick node
//! state is [`PartialSequence`]'s resume index and [`Wait`]'s elapsed-time
//! accumulator.
//!
//! Execution never returns errors: a leaf that cannot run reports `Failure`
//! and the walk continues.  The whole tree is driven single-threaded by one
//! agent, so nodes carry no `Send`/`Sync` bounds.
//!
//! # Example
//!
//! ```
//! use sv_bt::{builder::*, BehaviorState, BehaviorTree};
//!
//! struct Ctx { hungry: bool, meals: u32 }
//!
//! let mut tree = BehaviorTree::new(selector(vec![
//!     sequence(vec![
//!         condition(|c: &Ctx| c.hungry),
//!         action(|c: &mut Ctx| {
//!             c.meals += 1;
//!             c.hungry = false;
//!             BehaviorState::Success
//!         }),
//!     ]),
//!     action(|_: &mut Ctx| BehaviorState::Success), // idle fallback
//! ]));
//!
//! let mut ctx = Ctx { hungry: true, meals: 0 };
//! tree.tick(&mut ctx);
//! assert_eq!(ctx.meals, 1);
//! ```

pub mod builder;
pub mod composite;
pub mod decorator;
pub mod node;
pub mod state;
pub mod tree;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use composite::{Parallel, PartialSequence, Selector, Sequence};
pub use decorator::{Not, Wait, While};
pub use node::{Action, Behavior, Conditional, FrameTime};
pub use state::BehaviorState;
pub use tree::BehaviorTree;
