use std::default::Default;

/// Contains Config properties which will be used by the ClientCacheManager
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// A cache holding more unapplied entries than this logs a warning,
    /// usually a sign the client clock is running behind the host
    pub history_warn_len: usize,
    /// Refuse packets older than the newest one received, instead of
    /// applying them with a warning
    pub reject_stale_updates: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            history_warn_len: 64,
            reject_stale_updates: false,
        }
    }
}
