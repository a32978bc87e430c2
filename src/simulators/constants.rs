// Constants for 32-bit signed integer simulation

/// Largest value of a 32-bit signed integer
pub const INT_MAX: i64 = i32::MAX as i64;

/// Smallest value of a 32-bit signed integer
pub const INT_MIN: i64 = i32::MIN as i64;

/// Accumulators above this value overflow on the next `* 10`
pub const OVERFLOW_GUARD: i64 = INT_MAX / 10;

/// Last digit allowed when the accumulator equals [`OVERFLOW_GUARD`]
/// The negative range reaches one further (`...648` vs `...647`)
pub const fn boundary_digit(negative: bool) -> i64 {
    if negative {
        8
    } else {
        7
    }
}
