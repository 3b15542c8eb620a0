use tickcache_serde::{BitReader, BitWrite, Serde, SerdeErr};

/// Compares the live value against the cached one. When they differ the cache
/// takes the live value and `true` is returned; equal values leave the cache
/// untouched.
pub fn check_for_changes<T: PartialEq + Clone>(current: &T, cached: &mut T) -> bool {
    if *current == *cached {
        return false;
    }
    *cached = current.clone();
    true
}

/// Writes the changed bit, followed by the value only when it changed
pub fn write_changes<T: Serde>(changed: bool, value: &T, writer: &mut dyn BitWrite) {
    changed.ser(writer);
    if changed {
        value.ser(writer);
    }
}

/// Reads the changed bit and, when set, the value into `value`.
/// An unset bit leaves `value` as it was.
pub fn check_changed_and_read<T: Serde>(reader: &mut BitReader, value: &mut T) -> Result<bool, SerdeErr> {
    let changed = bool::de(reader)?;
    if changed {
        *value = T::de(reader)?;
    }
    Ok(changed)
}

/// One networked field: the last value sent (or received) and whether the
/// live value differed from it at the last check
#[derive(Clone, Debug, Default)]
pub struct TrackedField<T: Serde> {
    value: T,
    changed: bool,
}

impl<T: Serde> TrackedField<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            changed: false,
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn is_changed(&self) -> bool {
        self.changed
    }

    /// Recomputes the dirty flag against the live value
    pub fn check(&mut self, current: &T) -> bool {
        self.changed = check_for_changes(current, &mut self.value);
        self.changed
    }

    pub fn clear_changed(&mut self) {
        self.changed = false;
    }

    pub fn write(&self, writer: &mut dyn BitWrite, force: bool) {
        write_changes(force || self.changed, &self.value, writer);
    }

    pub fn read(&mut self, reader: &mut BitReader) -> Result<bool, SerdeErr> {
        check_changed_and_read(reader, &mut self.value)
    }
}
