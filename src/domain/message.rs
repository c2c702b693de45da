use serde::{Deserialize, Serialize};

use crate::domain::vendor::id::VendorId;

/// Payload discriminator used when enumerating a decoded message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PayloadKind {
    /// Opaque implementation-identity marker.
    VendorId,
    /// Status or error notification.
    Notify,
}

/// A typed payload of a decoded exchange message.
///
/// Only the variants the task layer consumes are modeled here; the wire
/// layer maps its full payload zoo onto and out of this enum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Payload {
    /// Vendor identification payload carrying owned opaque bytes.
    VendorId(VendorId),
    /// Notification payload, opaque at this layer.
    Notify {
        /// Wire notify type code.
        kind: u16,
        /// Raw notification data.
        data: Vec<u8>,
    },
}

impl Payload {
    /// Discriminator of this payload.
    #[must_use]
    pub fn kind(&self) -> PayloadKind {
        match self {
            Payload::VendorId(_) => PayloadKind::VendorId,
            Payload::Notify { .. } => PayloadKind::Notify,
        }
    }
}

/// One decoded exchange message: an ordered list of typed payloads.
///
/// Encoding to and from the wire belongs to the outer message layer; tasks
/// only append payloads while a message is under construction and enumerate
/// payloads of one kind when consuming a received message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    payloads: Vec<Payload>,
}

impl Message {
    /// Empty message under construction.
    #[must_use]
    pub fn new() -> Self {
        Message::default()
    }

    /// Append a payload to the message under construction.
    pub fn add_payload(&mut self, payload: Payload) {
        self.payloads.push(payload);
    }

    /// All payloads, in wire order.
    #[must_use]
    pub fn payloads(&self) -> &[Payload] {
        &self.payloads
    }

    /// Payloads of one kind, in wire order.
    pub fn payloads_of(&self, kind: PayloadKind) -> impl Iterator<Item = &Payload> {
        self.payloads.iter().filter(move |p| p.kind() == kind)
    }

    /// Vendor identifiers carried by this message, in wire order.
    pub fn vendor_ids(&self) -> impl Iterator<Item = &VendorId> {
        self.payloads.iter().filter_map(|p| match p {
            Payload::VendorId(vid) => Some(vid),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enumeration_filters_by_kind() {
        let mut m = Message::new();
        m.add_payload(Payload::Notify {
            kind: 16388,
            data: vec![],
        });
        m.add_payload(Payload::VendorId(VendorId::new(*b"one")));
        m.add_payload(Payload::VendorId(VendorId::new(*b"two")));

        assert_eq!(m.payloads().len(), 3);
        assert_eq!(m.payloads_of(PayloadKind::VendorId).count(), 2);
        assert_eq!(m.payloads_of(PayloadKind::Notify).count(), 1);
        let ids: Vec<_> = m.vendor_ids().map(VendorId::as_bytes).collect();
        assert_eq!(ids, vec![&b"one"[..], &b"two"[..]]);
    }

    #[test]
    fn empty_message_enumerates_nothing() {
        let m = Message::new();
        assert_eq!(m.vendor_ids().count(), 0);
        assert!(m.payloads().is_empty());
    }
}
