use tickcache_serde::{BitReader, BitWrite, SerdeErr};

use crate::cache::{
    change::TrackedField, existence_tracking::ExistenceTrackingCache, fields::CacheFields,
};

/// Marks an object an engineer can operate. Added and removed at runtime, so
/// its cache tracks existence.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UsableByEngineerComponent {
    used: bool,
    in_use: bool,
}

impl UsableByEngineerComponent {
    pub fn new(used: bool, in_use: bool) -> Self {
        Self { used, in_use }
    }

    pub fn is_used(&self) -> bool {
        self.used
    }

    pub fn set_used(&mut self, used: bool) {
        self.used = used;
    }

    pub fn is_in_use(&self) -> bool {
        self.in_use
    }

    pub fn set_in_use(&mut self, in_use: bool) {
        self.in_use = in_use;
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UsableByEngineerSnapshot {
    pub used: bool,
    pub in_use: bool,
}

#[derive(Default)]
pub struct UsableByEngineerFields {
    used: TrackedField<bool>,
    in_use: TrackedField<bool>,
}

impl CacheFields for UsableByEngineerFields {
    type Component = UsableByEngineerComponent;
    type Snapshot = UsableByEngineerSnapshot;

    fn name() -> &'static str {
        "UsableByEngineerData"
    }

    fn from_component(component: &UsableByEngineerComponent) -> Self {
        Self {
            used: TrackedField::new(component.is_used()),
            in_use: TrackedField::new(component.is_in_use()),
        }
    }

    fn check_for_changes(&mut self, component: &UsableByEngineerComponent) -> bool {
        let used_changed = self.used.check(&component.is_used());
        let in_use_changed = self.in_use.check(&component.is_in_use());
        used_changed || in_use_changed
    }

    // field order: used, in_use
    fn write(&self, writer: &mut dyn BitWrite, force: bool) {
        self.used.write(writer, force);
        self.in_use.write(writer, force);
    }

    fn clear_changes(&mut self) {
        self.used.clear_changed();
        self.in_use.clear_changed();
    }

    fn read(&mut self, reader: &mut BitReader) -> Result<bool, SerdeErr> {
        let used_changed = self.used.read(reader)?;
        let in_use_changed = self.in_use.read(reader)?;
        Ok(used_changed || in_use_changed)
    }

    fn snapshot(&self) -> UsableByEngineerSnapshot {
        UsableByEngineerSnapshot {
            used: *self.used.get(),
            in_use: *self.in_use.get(),
        }
    }

    fn apply(snapshot: &UsableByEngineerSnapshot, component: &mut UsableByEngineerComponent) {
        component.set_used(snapshot.used);
        component.set_in_use(snapshot.in_use);
    }
}

pub type UsableByEngineerData = ExistenceTrackingCache<UsableByEngineerFields>;
