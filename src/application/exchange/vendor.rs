use std::sync::Arc;

use tracing::{debug, info};

use crate::application::exchange::task::{ExchangeTask, Role, TaskStatus, TaskType};
use crate::domain::message::{Message, Payload};
use crate::domain::vendor::id::VendorId;
use crate::domain::vendor::registry::{registry, Effect, Match, SELF_VID};
use crate::ports::session::ExtensionSink;
use crate::ports::settings::Settings;

/// Settings key gating whether this endpoint announces itself. Default off.
pub const SEND_VENDOR_ID_KEY: &str = "ikex.send_vendor_id";

/// Vendor-identification task: one round of exchanging opaque vendor IDs.
///
/// Build emits at most one payload (our own marker, config-gated); process
/// matches every received vendor ID against the built-in registry and applies
/// the resulting extension effects to the session. Unknown identifiers are
/// logged and dropped. The whole round converges in exactly one round trip,
/// so completion is purely role-driven.
pub struct VendorIdTask<S: ExtensionSink> {
    role: Role,
    session: S,
    settings: Arc<dyn Settings>,
}

impl<S: ExtensionSink> VendorIdTask<S> {
    /// Create the task for one round, bound to a session handle and role.
    pub fn new(session: S, role: Role, settings: Arc<dyn Settings>) -> Self {
        VendorIdTask {
            role,
            session,
            settings,
        }
    }

    /// Role this task was created with.
    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    /// Take back the session handle (post-round).
    pub fn into_session(self) -> S {
        self.session
    }
}

impl<S: ExtensionSink> ExchangeTask for VendorIdTask<S> {
    type Session = S;

    fn build(&mut self, message: &mut Message) -> TaskStatus {
        if self.settings.get_bool(SEND_VENDOR_ID_KEY, false) {
            // Fresh owned copy per message; concurrently built messages must
            // never share payload storage.
            message.add_payload(Payload::VendorId(VendorId::new(SELF_VID)));
        }
        match self.role {
            Role::Initiator => TaskStatus::NeedsMoreRounds,
            Role::Responder => TaskStatus::StepComplete,
        }
    }

    fn process(&mut self, message: &Message) -> TaskStatus {
        // Apply every identifier in the message, not just the first match.
        for vid in message.vendor_ids() {
            match registry().lookup(vid.as_bytes()) {
                Match::Known(entry) => {
                    info!(vendor = entry.tag, "received vendor ID");
                    if let Effect::EnableExtension(ext) = entry.effect {
                        self.session.enable_extension(ext);
                    }
                }
                Match::Unknown => {
                    debug!(
                        data = %hex::encode(vid.as_bytes()),
                        "received unknown vendor ID"
                    );
                }
            }
        }
        match self.role {
            Role::Initiator => TaskStatus::StepComplete,
            Role::Responder => TaskStatus::NeedsMoreRounds,
        }
    }

    fn migrate(&mut self, session: S) {
        self.session = session;
    }

    fn task_type(&self) -> TaskType {
        TaskType::VendorId
    }
}
