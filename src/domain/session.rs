use std::collections::HashSet;

/// Peer capability discovered during the handshake.
///
/// Extension flags are *set-only* for the lifetime of a session: once a task
/// has observed the evidence for one, no task may retract it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Extension {
    /// Peer identified itself as this implementation; implementation-specific
    /// behavior may be negotiated in later rounds.
    SameVendor,
}

/// Per-peer security-association state owned by the exchange layer.
///
/// Tasks never own a `Session`; they hold a handle to it and mutate it only
/// through the set-only extension surface. Sessions are independent of each
/// other, so concurrent exchanges need no cross-session coordination.
#[derive(Debug, Default)]
pub struct Session {
    extensions: HashSet<Extension>,
}

impl Session {
    /// Fresh session with no extensions enabled.
    #[must_use]
    pub fn new() -> Self {
        Session::default()
    }

    /// Whether the peer has been observed to support `ext`.
    #[must_use]
    pub fn supports(&self, ext: Extension) -> bool {
        self.extensions.contains(&ext)
    }

    /// Number of distinct extensions enabled so far.
    #[must_use]
    pub fn extension_count(&self) -> usize {
        self.extensions.len()
    }

    pub(crate) fn insert_extension(&mut self, ext: Extension) -> bool {
        self.extensions.insert(ext)
    }
}
