use std::collections::HashMap;

use crate::ports::settings::Settings;

/// In-memory `Settings` backed by a fixed key/value map.
///
/// Covers in-process wiring and tests; a daemon would put its config-file
/// reader behind the same port. Lookups on absent keys fall back to the
/// caller's default, matching the "configuration unavailable means
/// disabled" rule.
#[derive(Debug, Clone, Default)]
pub struct StaticSettings {
    bools: HashMap<String, bool>,
}

impl StaticSettings {
    /// Empty settings; every read yields its default.
    #[must_use]
    pub fn new() -> Self {
        StaticSettings::default()
    }

    /// Builder-style insert of one boolean key.
    #[must_use]
    pub fn with_bool(mut self, key: impl Into<String>, value: bool) -> Self {
        self.bools.insert(key.into(), value);
        self
    }
}

impl Settings for StaticSettings {
    fn get_bool(&self, key: &str, default: bool) -> bool {
        self.bools.get(key).copied().unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_key_wins_over_default() {
        let s = StaticSettings::new().with_bool("ikex.send_vendor_id", true);
        assert!(s.get_bool("ikex.send_vendor_id", false));
    }

    #[test]
    fn absent_key_yields_default() {
        let s = StaticSettings::new();
        assert!(!s.get_bool("ikex.send_vendor_id", false));
        assert!(s.get_bool("ikex.other_flag", true));
    }
}
