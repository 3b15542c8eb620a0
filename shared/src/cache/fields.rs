use std::{any::Any, fmt::Debug};

use tickcache_serde::{BitReader, BitWrite, SerdeErr};

/// The tracked fields of one component type.
///
/// Implementors own one `TrackedField` per networked field. `write` and
/// `read` must visit those fields in the same order: that order is the wire
/// format of the cache. `Default` is the client-side shadow state used before
/// anything was received.
pub trait CacheFields: Default + Send + Sync + 'static {
    type Component: Any + Send + Sync;
    type Snapshot: Clone + Debug + PartialEq + Send + Sync + 'static;

    fn name() -> &'static str;

    fn from_component(component: &Self::Component) -> Self;

    /// Recomputes every field's dirty flag, returns whether any is set.
    /// Every field must be checked, not just up to the first change.
    fn check_for_changes(&mut self, component: &Self::Component) -> bool;

    fn write(&self, writer: &mut dyn BitWrite, force: bool);

    fn clear_changes(&mut self);

    /// Reads the fields, returns whether any changed bit was set
    fn read(&mut self, reader: &mut BitReader) -> Result<bool, SerdeErr>;

    fn snapshot(&self) -> Self::Snapshot;

    fn apply(snapshot: &Self::Snapshot, component: &mut Self::Component);
}
