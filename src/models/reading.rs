use serde::{Deserialize, Serialize};

/// The four form inputs, in the order they appear on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Precipitation,
    TempMax,
    TempMin,
    Wind,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::Precipitation,
        Field::TempMax,
        Field::TempMin,
        Field::Wind,
    ];

    /// Form element id and name, also the JSON key sent to the predictor.
    pub fn id(&self) -> &'static str {
        match self {
            Field::Precipitation => "precipitation",
            Field::TempMax => "temp_max",
            Field::TempMin => "temp_min",
            Field::Wind => "wind",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Precipitation => "Precipitation (mm)",
            Field::TempMax => "Max Temp (°C)",
            Field::TempMin => "Min Temp (°C)",
            Field::Wind => "Wind (km/h)",
        }
    }
}

/// A reading that has passed validation. This is also the request body
/// sent to the prediction service.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct WeatherReading {
    pub precipitation: f64,
    pub temp_max: f64,
    pub temp_min: f64,
    pub wind: f64,
}

/// The form exactly as submitted by the browser.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct RawReading {
    #[serde(default)]
    pub precipitation: String,
    #[serde(default)]
    pub temp_max: String,
    #[serde(default)]
    pub temp_min: String,
    #[serde(default)]
    pub wind: String,
}

impl RawReading {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Precipitation => &self.precipitation,
            Field::TempMax => &self.temp_max,
            Field::TempMin => &self.temp_min,
            Field::Wind => &self.wind,
        }
    }
}

impl From<&WeatherReading> for RawReading {
    fn from(reading: &WeatherReading) -> Self {
        RawReading {
            precipitation: reading.precipitation.to_string(),
            temp_max: reading.temp_max.to_string(),
            temp_min: reading.temp_min.to_string(),
            wind: reading.wind.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}
