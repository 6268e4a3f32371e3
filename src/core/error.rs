use thiserror::Error;

/// Problems reading launch parameters typed by the user.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    /// The field did not hold a finite number.
    #[error("invalid {field}: '{text}'. Expected a number.")]
    InvalidNumber {
        /// Which launch parameter was being read.
        field: &'static str,
        /// The text as entered.
        text: String,
    },
}

impl InputError {
    pub fn invalid_number(field: &'static str, text: &str) -> Self {
        Self::InvalidNumber {
            field,
            text: text.to_string(),
        }
    }
}

/// Launch parameters that admit no closed-form flight.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BallisticsError {
    #[error("inputs must be finite numbers")]
    NonFinite,
    #[error("velocity cannot be negative")]
    NegativeSpeed,
    #[error("no real landing time: vy^2 + 2*g*h is negative ({discriminant})")]
    NoLanding { discriminant: f64 },
    #[error("landing time computed as negative ({time_s}); check your inputs")]
    NegativeFlightTime { time_s: f64 },
}

/// Parse one launch parameter, trimming surrounding whitespace.
pub fn parse_number(field: &'static str, text: &str) -> Result<f64, InputError> {
    let value = text
        .trim()
        .parse::<f64>()
        .map_err(|_| InputError::invalid_number(field, text))?;
    if !value.is_finite() {
        return Err(InputError::invalid_number(field, text));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::{InputError, parse_number};

    #[test]
    fn parses_padded_numbers() {
        assert_eq!(parse_number("angle", " 12.5 "), Ok(12.5));
        assert_eq!(parse_number("height", "-3"), Ok(-3.0));
    }

    #[test]
    fn rejects_text_and_non_finite_values() {
        let err = parse_number("velocity", "fast").expect_err("text is not a number");
        assert_eq!(err, InputError::invalid_number("velocity", "fast"));
        assert!(err.to_string().contains("invalid velocity"));

        assert!(parse_number("angle", "inf").is_err());
        assert!(parse_number("angle", "NaN").is_err());
        assert!(parse_number("angle", "").is_err());
    }
}
