//! # Point-Value Ladder
//!
//! Every question sits on the fixed ladder 100 to 500 in steps of 100. Any
//! other value, including other positive numbers, is a referential error.

/// The closed set of point values.
pub const POINT_VALUES: [u32; 5] = [100, 200, 300, 400, 500];

/// Human-readable form of [`POINT_VALUES`] used in messages.
pub const LADDER_TEXT: &str = "100, 200, 300, 400, or 500";

/// Why a numeric value is not a valid point value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointValueFault {
    /// Zero, negative, or not finite.
    NotPositive,
    /// Positive but off the ladder.
    OffLadder,
}

/// Check a numeric point value, returning the ladder rung it matches.
pub fn check_point_value(value: f64) -> Result<u32, PointValueFault> {
    if !value.is_finite() || value <= 0.0 {
        return Err(PointValueFault::NotPositive);
    }
    POINT_VALUES
        .iter()
        .copied()
        .find(|rung| f64::from(*rung) == value)
        .ok_or(PointValueFault::OffLadder)
}
