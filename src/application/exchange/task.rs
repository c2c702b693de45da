use crate::domain::message::Message;
use crate::ports::session::ExtensionSink;

/// Which side of the exchange created this task.
///
/// Fixed at creation; it decides when the task considers its round done.
/// The initiator speaks first and needs one more step to observe the reply,
/// while the responder's single reply closes its side of the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// This endpoint opened the exchange.
    Initiator,
    /// This endpoint answers an exchange opened by the peer.
    Responder,
}

/// Per-step completion signal returned to the exchange scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    /// The task still expects a step in a later message of this round.
    NeedsMoreRounds,
    /// The task has finished its contribution to the round.
    StepComplete,
}

/// Stable discriminator the scheduler uses to route and deduplicate tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum TaskType {
    /// Vendor-identification round.
    VendorId,
}

/// One unit of per-round exchange behavior.
///
/// Lifecycle: created when the scheduler decides the round is needed, then
/// `build`/`process` once each in round order, then dropped. Steps never
/// fail; malformed or absent payloads are skipped, never rejected. `migrate`
/// swaps the session handle when the owning security association is
/// transplanted (address change) without restarting the negotiation —
/// already-applied extension flags travel with the session, not the task.
///
/// Object-safe so the scheduler can hold a polymorphic round queue
/// (`Box<dyn ExchangeTask<Session = S>>`, see
/// [`TaskQueue`](crate::application::exchange::queue::TaskQueue)).
pub trait ExchangeTask {
    /// Session handle type this task mutates through the extension sink.
    type Session: ExtensionSink;

    /// Contribute payloads to an outgoing message under construction.
    fn build(&mut self, message: &mut Message) -> TaskStatus;

    /// Consume a received, already-decoded message.
    fn process(&mut self, message: &Message) -> TaskStatus;

    /// Replace the session handle after a session handover.
    fn migrate(&mut self, session: Self::Session);

    /// Routing discriminator; pure.
    fn task_type(&self) -> TaskType;
}
