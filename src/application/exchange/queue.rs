use tracing::debug;

use crate::application::exchange::task::{ExchangeTask, TaskStatus, TaskType};
use crate::domain::message::Message;
use crate::ports::session::ExtensionSink;

/// Active-task bookkeeping an exchange keeps while a round is in flight.
///
/// Holds the polymorphic task set for the current round, at most one task
/// per [`TaskType`]. Driving a pass calls the respective step on every
/// queued task and retires the ones that report [`TaskStatus::StepComplete`];
/// retirement drops the task, which is its destroy. The scheduler guarantees
/// at most one in-flight round per session, so passes are never concurrent.
pub struct TaskQueue<S: ExtensionSink> {
    tasks: Vec<Box<dyn ExchangeTask<Session = S>>>,
}

impl<S: ExtensionSink> TaskQueue<S> {
    /// Empty queue for a fresh round.
    #[must_use]
    pub fn new() -> Self {
        TaskQueue { tasks: Vec::new() }
    }

    /// Queue a task, replacing any queued task of the same type.
    pub fn queue(&mut self, task: Box<dyn ExchangeTask<Session = S>>) {
        let ty = task.task_type();
        if self.tasks.iter().any(|t| t.task_type() == ty) {
            debug!(task_type = ?ty, "replacing queued task of same type");
            self.tasks.retain(|t| t.task_type() != ty);
        }
        self.tasks.push(task);
    }

    /// Run the build step on every queued task for an outgoing message,
    /// retiring completed tasks.
    pub fn build(&mut self, message: &mut Message) -> TaskStatus {
        self.drive(|task| task.build(message))
    }

    /// Run the process step on every queued task for a received message,
    /// retiring completed tasks.
    pub fn process(&mut self, message: &Message) -> TaskStatus {
        self.drive(|task| task.process(message))
    }

    fn drive(
        &mut self,
        mut step: impl FnMut(&mut Box<dyn ExchangeTask<Session = S>>) -> TaskStatus,
    ) -> TaskStatus {
        self.tasks.retain_mut(|task| step(task) == TaskStatus::NeedsMoreRounds);
        if self.tasks.is_empty() {
            TaskStatus::StepComplete
        } else {
            TaskStatus::NeedsMoreRounds
        }
    }

    /// Hand every queued task a handle to the replacement session.
    pub fn migrate(&mut self, session: &S)
    where
        S: Clone,
    {
        for task in &mut self.tasks {
            task.migrate(session.clone());
        }
    }

    /// Whether a task of `ty` is currently queued.
    #[must_use]
    pub fn has_task(&self, ty: TaskType) -> bool {
        self.tasks.iter().any(|t| t.task_type() == ty)
    }

    /// Number of queued tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// True when no task remains queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl<S: ExtensionSink> Default for TaskQueue<S> {
    fn default() -> Self {
        TaskQueue::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::exchange::vendor::VendorIdTask;
    use crate::application::exchange::Role;
    use crate::domain::session::Session;
    use crate::test_support::{mk_shared_session, settings_off};
    use std::cell::RefCell;
    use std::rc::Rc;

    type SharedSession = Rc<RefCell<Session>>;

    fn mk_queue_with_vendor(role: Role) -> TaskQueue<SharedSession> {
        let mut q = TaskQueue::new();
        q.queue(Box::new(VendorIdTask::new(
            mk_shared_session(),
            role,
            settings_off(),
        )));
        q
    }

    #[test]
    fn queue_dedupes_by_task_type() {
        let mut q = mk_queue_with_vendor(Role::Initiator);
        q.queue(Box::new(VendorIdTask::new(
            mk_shared_session(),
            Role::Initiator,
            settings_off(),
        )));
        assert_eq!(q.len(), 1);
        assert!(q.has_task(TaskType::VendorId));
    }

    #[test]
    fn initiator_round_retires_task_after_process() {
        let mut q = mk_queue_with_vendor(Role::Initiator);
        let mut out = Message::new();
        assert_eq!(q.build(&mut out), TaskStatus::NeedsMoreRounds);
        assert_eq!(q.len(), 1);
        assert_eq!(q.process(&Message::new()), TaskStatus::StepComplete);
        assert!(q.is_empty());
    }

    #[test]
    fn responder_round_retires_task_after_build() {
        let mut q = mk_queue_with_vendor(Role::Responder);
        assert_eq!(q.process(&Message::new()), TaskStatus::NeedsMoreRounds);
        let mut out = Message::new();
        assert_eq!(q.build(&mut out), TaskStatus::StepComplete);
        assert!(q.is_empty());
    }

    #[test]
    fn empty_queue_reports_complete() {
        let mut q: TaskQueue<SharedSession> = TaskQueue::new();
        assert_eq!(q.build(&mut Message::new()), TaskStatus::StepComplete);
        assert_eq!(q.process(&Message::new()), TaskStatus::StepComplete);
    }
}
