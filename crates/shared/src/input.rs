use thiserror::Error;

use crate::models::LatLng;

pub const MAX_LATITUDE: f64 = 90.0;
pub const MAX_LONGITUDE: f64 = 180.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Latitude => write!(f, "Latitude"),
            Axis::Longitude => write!(f, "Longitude"),
        }
    }
}

/// Reasons a coordinate submission is rejected. The messages are shown to
/// the user verbatim.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("{axis} must be a number (got {value:?})")]
    NotANumber { axis: Axis, value: String },
    #[error("Latitude {0} is outside the range -90 to 90")]
    LatitudeOutOfRange(f64),
    #[error("Longitude {0} is outside the range -180 to 180")]
    LongitudeOutOfRange(f64),
}

fn parse_axis(text: &str, axis: Axis) -> Result<f64, InputError> {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        // "NaN" and "inf" parse successfully but are not coordinates
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(InputError::NotANumber {
            axis,
            value: trimmed.to_string(),
        }),
    }
}

/// Parse and validate the two free-text coordinate fields.
pub fn parse_coordinates(lat_text: &str, lng_text: &str) -> Result<LatLng, InputError> {
    let lat = parse_axis(lat_text, Axis::Latitude)?;
    let lng = parse_axis(lng_text, Axis::Longitude)?;

    if lat.abs() > MAX_LATITUDE {
        return Err(InputError::LatitudeOutOfRange(lat));
    }
    if lng.abs() > MAX_LONGITUDE {
        return Err(InputError::LongitudeOutOfRange(lng));
    }

    Ok(LatLng::new(lat, lng))
}
