use std::default::Default;

/// Contains Config properties which will be used by the HostCacheManager
#[derive(Clone, Debug)]
pub struct HostConfig {
    /// Upper bound on cache records per delta packet. Caches beyond it are
    /// deferred to the next tick, same as records that don't fit the writer.
    pub max_records_per_update: Option<usize>,
    /// Logs the size of every record written, at trace level
    pub log_bit_counts: bool,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            max_records_per_update: None,
            log_bit_counts: false,
        }
    }
}
