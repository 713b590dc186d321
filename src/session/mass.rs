use crate::error::{NutriError, Result};

/// Parse a mass in grams.
///
/// Rejects non-numeric, non-finite and negative values.
pub fn parse_mass(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    let grams: f64 = trimmed
        .parse()
        .map_err(|_| NutriError::InvalidMass(format!("'{}' is not a number", trimmed)))?;

    if !grams.is_finite() {
        return Err(NutriError::InvalidMass(format!("'{}' is not finite", trimmed)));
    }
    if grams < 0.0 {
        return Err(NutriError::InvalidMass(format!("{} is negative", grams)));
    }
    Ok(grams)
}
