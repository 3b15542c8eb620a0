use crate::Tick;

const HALF_RANGE: Tick = 32768;

/// Returns whether a wrapping tick comes after another
/// tick_greater_than(2,1) will return true
/// tick_greater_than(1,2) will return false
/// tick_greater_than(1,1) will return false
pub fn tick_greater_than(a: Tick, b: Tick) -> bool {
    ((a > b) && (a - b <= HALF_RANGE)) || ((a < b) && (b - a > HALF_RANGE))
}

/// Returns whether a wrapping tick comes before another
pub fn tick_less_than(a: Tick, b: Tick) -> bool {
    tick_greater_than(b, a)
}

/// Returns whether `target` is due once the clock shows `current`,
/// i.e. `target <= current` in wrapping order
pub fn tick_reached(current: Tick, target: Tick) -> bool {
    !tick_greater_than(target, current)
}

/// Signed number of ticks from `from` to `to`, taking wrap-around into account
///
/// # Examples
/// ```
/// # use tickcache_shared::tick_diff;
/// assert_eq!(tick_diff(1, 2), 1);
/// assert_eq!(tick_diff(2, 1), -1);
/// assert_eq!(tick_diff(65535, 0), 1);
/// ```
pub fn tick_diff(from: Tick, to: Tick) -> i16 {
    to.wrapping_sub(from) as i16
}
