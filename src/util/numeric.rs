use crate::error::TrackerError;

/// Converts a raw form field into a number the way a browser coerces `+input`:
/// surrounding whitespace is ignored and an empty field counts as zero.
/// Returns `None` for anything that is not a finite number.
pub fn coerce(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Accepts only finite numbers greater than zero.
pub fn require_positive(field: &'static str, value: f64) -> Result<f64, TrackerError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(TrackerError::validation(field, value))
    }
}

/// Accepts any finite number. Used for values derived from already validated inputs.
pub fn require_finite(field: &'static str, value: f64) -> Result<f64, TrackerError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(TrackerError::validation(field, value))
    }
}

/// Coerces a raw field and checks positivity. Both failure modes yield the same error.
pub fn parse_positive(field: &'static str, raw: &str) -> Result<f64, TrackerError> {
    match coerce(raw) {
        Some(value) if value > 0.0 => Ok(value),
        _ => Err(TrackerError::validation(field, raw))
    }
}

#[cfg(test)]
mod tests {
    use crate::error::TrackerError;
    use crate::util::numeric::{coerce, parse_positive, require_finite, require_positive};

    #[test]
    fn test_coerce() {
        assert_eq!(coerce("5"), Some(5.0));
        assert_eq!(coerce(" 7.25 "), Some(7.25));
        assert_eq!(coerce("1e3"), Some(1000.0));
        assert_eq!(coerce(""), Some(0.0));
        assert_eq!(coerce("   "), Some(0.0));
        assert_eq!(coerce("abc"), None);
        assert_eq!(coerce("12km"), None);
        assert_eq!(coerce("inf"), None);
        assert_eq!(coerce("NaN"), None);
    }

    #[test]
    fn test_parse_positive() {
        assert_eq!(parse_positive("distance", "5").unwrap(), 5.0);
        for raw in ["0", "-3", "", "foo", "inf"] {
            let result = parse_positive("distance", raw);
            assert!(matches!(result, Err(TrackerError::Validation { field: "distance", .. })), "{raw}");
        }
    }

    #[test]
    fn test_require_positive() {
        assert!(require_positive("duration", 0.1).is_ok());
        assert!(require_positive("duration", 0.0).is_err());
        assert!(require_positive("duration", f64::NAN).is_err());
        assert!(require_positive("duration", f64::INFINITY).is_err());
    }

    #[test]
    fn test_require_finite() {
        assert_eq!(require_finite("pace", 0.0).unwrap(), 0.0);
        assert_eq!(require_finite("pace", 6.5).unwrap(), 6.5);
        assert!(matches!(require_finite("pace", 30.0 / 1e-320), Err(TrackerError::Validation { field: "pace", .. })));
        assert!(require_finite("speed", f64::NAN).is_err());
    }
}
