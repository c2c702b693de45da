//! Session-facing boundary trait for exchange tasks.
//!
//! Tasks get mutate-only access to a session's extension state: they may set
//! capability flags as evidence arrives but can never clear or enumerate
//! them. Keeping the trait this narrow lets the same task type run against
//! the real security association, a shared handle to it, or a test double.
use std::cell::RefCell;
use std::rc::Rc;

use crate::domain::session::{Extension, Session};

/// Set-only extension surface a task sees of its owning session.
pub trait ExtensionSink {
    /// Record that the peer supports `ext`. Idempotent; enabling an already
    /// enabled extension is a no-op.
    fn enable_extension(&mut self, ext: Extension);
}

impl ExtensionSink for Session {
    fn enable_extension(&mut self, ext: Extension) {
        if self.insert_extension(ext) {
            tracing::debug!(extension = ?ext, "extension enabled");
        }
    }
}

/// Shared-handle form: the exchange layer keeps the session while live tasks
/// hold cheap clones of the same handle (needed across migration).
impl<S: ExtensionSink> ExtensionSink for Rc<RefCell<S>> {
    fn enable_extension(&mut self, ext: Extension) {
        self.borrow_mut().enable_extension(ext);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_handle_mutates_underlying_session() {
        let session = Rc::new(RefCell::new(Session::new()));
        let mut handle = Rc::clone(&session);
        handle.enable_extension(Extension::SameVendor);
        assert!(session.borrow().supports(Extension::SameVendor));
    }

    #[test]
    fn double_enable_keeps_count_at_one() {
        let mut s = Session::new();
        s.enable_extension(Extension::SameVendor);
        s.enable_extension(Extension::SameVendor);
        assert_eq!(s.extension_count(), 1);
    }
}
