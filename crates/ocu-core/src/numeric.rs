/// Floating point type used throughout system
pub type Real = f64;

/// Smallest multiple of `step` that is >= `value`.
///
/// Exact multiples are returned unchanged; values <= 0 round to 0. A ratio
/// within float dust of a whole number of steps counts as exact, so unit
/// conversions that land at 100.00000000000001 still read as 100. Shared by
/// the 50 m³/hr capacity steps and 25 kg media bags.
pub fn ceil_to_step(value: Real, step: u64) -> u64 {
    debug_assert!(step > 0);
    let ratio = value / step as Real;
    let steps = if (ratio - ratio.round()).abs() < 1e-9 {
        ratio.round()
    } else {
        ratio.ceil()
    };
    if steps <= 0.0 {
        0
    } else {
        steps as u64 * step
    }
}
