use rand::Rng;
use std::ops::RangeInclusive;

use crate::models::prediction::WeatherKind;
use crate::models::reading::WeatherReading;

/// Typical value ranges for readings of one kind of weather. The minimum
/// temperature is drawn between `temp_min_floor` and the drawn maximum.
#[derive(Debug, Clone, PartialEq)]
pub struct Archetype {
    pub kind: WeatherKind,
    pub precipitation: RangeInclusive<f64>,
    pub temp_max: RangeInclusive<f64>,
    pub temp_min_floor: f64,
    pub wind: RangeInclusive<f64>,
}

pub fn archetypes() -> [Archetype; 5] {
    [
        Archetype {
            kind: WeatherKind::Drizzle,
            precipitation: 0.0..=0.0,
            temp_max: 1.1..=31.7,
            temp_min_floor: -3.9,
            wind: 0.6..=4.7,
        },
        Archetype {
            kind: WeatherKind::Fog,
            precipitation: 0.0..=0.0,
            temp_max: 1.7..=30.6,
            temp_min_floor: -3.2,
            wind: 0.8..=6.6,
        },
        Archetype {
            kind: WeatherKind::Rain,
            precipitation: 0.0..=32.38,
            temp_max: 3.9..=35.6,
            temp_min_floor: -3.8,
            wind: 0.5..=7.54,
        },
        Archetype {
            kind: WeatherKind::Snow,
            precipitation: 0.3..=23.9,
            temp_max: -1.1..=11.1,
            temp_min_floor: -4.3,
            wind: 1.6..=7.0,
        },
        Archetype {
            kind: WeatherKind::Sun,
            precipitation: 0.0..=0.0,
            temp_max: -1.6..=35.0,
            temp_min_floor: -7.1,
            wind: 0.4..=7.54,
        },
    ]
}

// Form values carry one decimal. Adding zero turns -0.0 into 0.0 so the
// form never shows "-0".
fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0 + 0.0
}

fn sample<R: Rng + ?Sized>(rng: &mut R, range: RangeInclusive<f64>) -> f64 {
    round_tenth(rng.random_range(range))
}

impl Archetype {
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> WeatherReading {
        let temp_max = sample(rng, self.temp_max.clone());
        // Rounding is monotonic, so the rounded minimum stays below the
        // already rounded maximum.
        let temp_min = sample(rng, self.temp_min_floor..=temp_max);
        WeatherReading {
            precipitation: sample(rng, self.precipitation.clone()),
            temp_max,
            temp_min,
            wind: sample(rng, self.wind.clone()),
        }
    }
}

/// Picks one archetype uniformly and samples a reading from it.
pub fn random_reading<R: Rng + ?Sized>(rng: &mut R) -> (WeatherKind, WeatherReading) {
    let archetypes = archetypes();
    let archetype = &archetypes[rng.random_range(0..archetypes.len())];
    let reading = archetype.sample(rng);
    log::debug!(
        "Randomized {} reading {:?}",
        archetype.kind.name(),
        reading
    );
    (archetype.kind, reading)
}
