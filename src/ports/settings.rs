//! Configuration boundary trait.
//!
//! Keys are namespaced dotted names (`ikex.send_vendor_id`). Reads never
//! fail: an absent key or an unavailable backend yields the caller-supplied
//! default, so configuration trouble can disable a feature but never abort
//! an exchange.

/// Read-only configuration lookup.
pub trait Settings {
    /// Boolean read; `default` when the key is absent.
    fn get_bool(&self, key: &str, default: bool) -> bool;
}
