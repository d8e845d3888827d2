//! Battle sessions: the stage machine, its clock and its snapshot.
//!
//! ## Key Types
//!
//! - `BattleEngine`: Owns the session and applies every action and timer
//! - `Session`: Immutable-by-convention snapshot handed to renderers
//! - `Scheduler`: Virtual clock firing the level tick and delayed tasks
//! - `Presentation`: Hit flashes and feedback text, kept apart from rules
//! - `BattleEvent`: Typed record of what happened

mod engine;
mod event;
mod presentation;
mod result;
mod scheduler;
mod stage;
mod state;

pub use engine::BattleEngine;
pub use event::{BattleEvent, DefeatReason};
pub use presentation::{Feedback, FeedbackKind, Presentation};
pub use result::{star_rating, ResultSummary};
pub use scheduler::{Fired, Scheduler, StrikeId, TimerTask};
pub use stage::Stage;
pub use state::{PendingStrike, Session};
