//! Exchange-task orchestration layer.
//!
//! A *task* is one negotiation step of a handshake round. The outer exchange
//! scheduler composes tasks per round: it calls `build` on every queued task
//! while constructing an outgoing message and `process` on every queued task
//! when the matching incoming message arrives. Tasks report back a
//! per-step completion signal; what `NeedsMoreRounds` triggers upstream is
//! the scheduler's contract, tasks treat the variants as opaque.
pub mod queue;
pub mod task;
pub mod vendor;

pub use queue::*;
pub use task::*;
pub use vendor::*;
