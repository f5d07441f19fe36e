//! Rule-based outfit suggestions from temperature and weather.

/// Below this temperature (°C) a coat is suggested.
pub const COLD_BELOW: f64 = 10.0;
/// Below this temperature (°C), and at or above `COLD_BELOW`, layers are suggested.
pub const MILD_BELOW: f64 = 20.0;

/// Weather value that swaps jeans for a raincoat in mild conditions.
pub const RAINY: &str = "rainy";

/// Suggests clothing item names for the given conditions.
///
/// The weather only matters in the mild band; cold and warm suggestions are the same
/// whatever the weather.
pub fn suggest(temperature: f64, weather: &str) -> Vec<&'static str> {
    if temperature < COLD_BELOW {
        vec!["Coat", "Long-sleeve shirt", "Jeans"]
    } else if temperature < MILD_BELOW {
        if weather == RAINY {
            vec!["Cardigan", "Long-sleeve shirt", "Raincoat"]
        } else {
            vec!["Cardigan", "Long-sleeve shirt", "Jeans"]
        }
    } else {
        vec!["Short-sleeve shirt", "Shorts"]
    }
}
