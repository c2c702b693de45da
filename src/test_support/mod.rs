#![allow(dead_code)]
//! Shared constructors for unit and integration tests.
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use crate::adapters::settings::StaticSettings;
use crate::application::exchange::vendor::SEND_VENDOR_ID_KEY;
use crate::domain::message::{Message, Payload};
use crate::domain::session::Session;
use crate::domain::vendor::id::VendorId;
use crate::ports::settings::Settings;

/// Fresh session behind a shared handle, as the exchange layer holds it.
pub fn mk_shared_session() -> Rc<RefCell<Session>> {
    Rc::new(RefCell::new(Session::new()))
}

/// Message carrying one vendor ID payload per input byte string.
pub fn mk_vendor_message(ids: &[&[u8]]) -> Message {
    let mut msg = Message::new();
    for id in ids {
        msg.add_payload(Payload::VendorId(VendorId::from(*id)));
    }
    msg
}

/// Settings with self-identification switched on.
pub fn settings_on() -> Arc<dyn Settings> {
    Arc::new(StaticSettings::new().with_bool(SEND_VENDOR_ID_KEY, true))
}

/// Settings with self-identification left at its default (off).
pub fn settings_off() -> Arc<dyn Settings> {
    Arc::new(StaticSettings::new())
}
