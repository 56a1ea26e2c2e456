use crate::domain::model::ZodiacSign;

/// Wraps any finite angle into [0, 360). The double modulo keeps negative
/// input non-negative.
pub fn normalize_degrees(degrees: f64) -> f64 {
    ((degrees % 360.0) + 360.0) % 360.0
}

/// Maps an ecliptic longitude to the sign owning its 30-degree sector.
/// Total for all finite input; periodic with period 360. Non-finite input is
/// an internal invariant violation (the ephemeris engine rejects it before
/// classification) and must not fabricate a placement.
pub fn classify(longitude_degrees: f64) -> ZodiacSign {
    debug_assert!(
        longitude_degrees.is_finite(),
        "longitude must be finite, got {}",
        longitude_degrees
    );
    let normalized = normalize_degrees(longitude_degrees);
    // The floor division lands on 12 only if rounding pushed the normalized
    // value to exactly 360.0, which wraps back to aries territory.
    let index = ((normalized / 30.0) as usize).min(11);
    ZodiacSign::ALL[index]
}
