use serde::Deserialize;

/// Weather classes the prediction service can answer with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherKind {
    Drizzle,
    Rain,
    Sun,
    Snow,
    Fog,
}

pub const UNKNOWN_LABEL: &str = "Unknown";

impl WeatherKind {
    pub const ALL: [WeatherKind; 5] = [
        WeatherKind::Drizzle,
        WeatherKind::Rain,
        WeatherKind::Sun,
        WeatherKind::Snow,
        WeatherKind::Fog,
    ];

    /// Case-insensitive lookup of a prediction returned by the service.
    pub fn from_prediction(prediction: &str) -> Option<WeatherKind> {
        let prediction = prediction.trim();
        WeatherKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(prediction))
    }

    pub fn name(&self) -> &'static str {
        match self {
            WeatherKind::Drizzle => "drizzle",
            WeatherKind::Rain => "rain",
            WeatherKind::Sun => "sun",
            WeatherKind::Snow => "snow",
            WeatherKind::Fog => "fog",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WeatherKind::Drizzle => "Drizzly",
            WeatherKind::Rain => "Rainy",
            WeatherKind::Sun => "Sunny",
            WeatherKind::Snow => "Snowy",
            WeatherKind::Fog => "Foggy",
        }
    }

    /// Gradient classes used to colour the label.
    pub fn theme(&self) -> &'static str {
        match self {
            WeatherKind::Drizzle => "from-blue-300 to-blue-500",
            WeatherKind::Rain => "from-indigo-400 to-blue-700",
            WeatherKind::Sun => "from-yellow-400 to-orange-500",
            WeatherKind::Snow => "from-white to-gray-300",
            WeatherKind::Fog => "from-gray-400 to-gray-600",
        }
    }
}

/// Features echoed back by the prediction service. Not every service sends
/// them.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct InputFeatures {
    pub precipitation: f64,
    pub temp_max: f64,
    pub temp_min: f64,
    pub wind: f64,
    pub temp_range: f64,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct PredictionResult {
    pub prediction: String,
    pub confidence_percent: f64,
    #[serde(default)]
    pub input_features: Option<InputFeatures>,
}

impl PredictionResult {
    pub fn kind(&self) -> Option<WeatherKind> {
        WeatherKind::from_prediction(&self.prediction)
    }

    pub fn label(&self) -> &'static str {
        self.kind().map(|k| k.label()).unwrap_or(UNKNOWN_LABEL)
    }

    /// Unknown predictions borrow the sunny theme.
    pub fn theme(&self) -> &'static str {
        self.kind().unwrap_or(WeatherKind::Sun).theme()
    }
}
