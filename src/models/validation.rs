use crate::models::reading::{Field, FieldError, RawReading, WeatherReading};

// Inclusive bounds for each input. The upper bound of the minimum temperature
// is the maximum temperature of the same reading.
pub const PRECIPITATION_MIN: f64 = 0.0;
pub const PRECIPITATION_MAX: f64 = 35.0;
pub const TEMP_MAX_MIN: f64 = -2.0;
pub const TEMP_MAX_MAX: f64 = 36.0;
pub const TEMP_MIN_MIN: f64 = -8.0;
pub const WIND_MIN: f64 = 0.0;
pub const WIND_MAX: f64 = 8.0;

fn parse_number(value: &str) -> Option<f64> {
    match value.trim().parse::<f64>() {
        Ok(number) if number.is_finite() => Some(number),
        _ => None,
    }
}

fn within(value: Option<f64>, min: f64, max: f64) -> Option<f64> {
    value.filter(|v| *v >= min && *v <= max)
}

pub fn error_message(field: Field) -> &'static str {
    match field {
        Field::Precipitation => "Precipitation must be between 0 and 35 mm",
        Field::TempMax => "Max Temp must be between -2°C and 36°C",
        Field::TempMin => "Min Temp must be ≤ Max Temp (and ≥ -8°C)",
        Field::Wind => "Wind must be between 0 and 8 km/h",
    }
}

/// Checks every field of a submitted form. Either all four fields are
/// accepted, or one error is returned for each rejected field.
pub fn validate(raw: &RawReading) -> Result<WeatherReading, Vec<FieldError>> {
    let precipitation = within(
        parse_number(&raw.precipitation),
        PRECIPITATION_MIN,
        PRECIPITATION_MAX,
    );
    let temp_max = within(parse_number(&raw.temp_max), TEMP_MAX_MIN, TEMP_MAX_MAX);
    // Without a usable max temperature the min temperature can only be held
    // to the widest range a max temperature could take.
    let temp_min_ceiling = parse_number(&raw.temp_max)
        .unwrap_or(TEMP_MAX_MAX)
        .min(TEMP_MAX_MAX);
    let temp_min = within(
        parse_number(&raw.temp_min),
        TEMP_MIN_MIN,
        temp_min_ceiling,
    );
    let wind = within(parse_number(&raw.wind), WIND_MIN, WIND_MAX);

    match (precipitation, temp_max, temp_min, wind) {
        (Some(precipitation), Some(temp_max), Some(temp_min), Some(wind)) => Ok(WeatherReading {
            precipitation,
            temp_max,
            temp_min,
            wind,
        }),
        _ => {
            let checked = [
                (Field::Precipitation, precipitation),
                (Field::TempMax, temp_max),
                (Field::TempMin, temp_min),
                (Field::Wind, wind),
            ];
            let errors: Vec<FieldError> = checked
                .into_iter()
                .filter(|(_, value)| value.is_none())
                .map(|(field, _)| FieldError {
                    field,
                    message: error_message(field).to_string(),
                })
                .collect();
            log::debug!("Rejected form with {} invalid fields", errors.len());
            Err(errors)
        }
    }
}
