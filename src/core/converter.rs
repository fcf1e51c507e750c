//! Linear unit conversions rounded to one decimal place.
//!
//! Rounding is applied to the exact binary value of the result, the way
//! `{:.1}` formatting does it. Values stored just below a decimal tie round
//! down (`0.15` is `0.1499…`, so it becomes `0.1`), and exact binary ties go to
//! the even digit (`0.25` becomes `0.2`). A negative result that rounds to zero
//! is reported as `0.0`.

use crate::domain::model::Direction;

pub const GRAMS_PER_OUNCE: f64 = 28.35;

/// Size of one rounding step in the converted value.
pub const ROUNDING_STEP: f64 = 0.1;

pub fn round_to_tenth(value: f64) -> f64 {
    // Formatting a finite f64 always yields a parseable number.
    let rounded: f64 = format!("{:.1}", value).parse().unwrap_or(value);
    // Adding 0.0 turns -0.0 into 0.0.
    rounded + 0.0
}

pub fn grams_to_ounces(grams: f64) -> f64 {
    round_to_tenth(grams / GRAMS_PER_OUNCE)
}

pub fn ounces_to_grams(ounces: f64) -> f64 {
    round_to_tenth(ounces * GRAMS_PER_OUNCE)
}

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    round_to_tenth(celsius * 9.0 / 5.0 + 32.0)
}

pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    round_to_tenth((fahrenheit - 32.0) * 5.0 / 9.0)
}

pub fn convert(direction: Direction, value: f64) -> f64 {
    match direction {
        Direction::GramsToOunces => grams_to_ounces(value),
        Direction::OuncesToGrams => ounces_to_grams(value),
        Direction::CelsiusToFahrenheit => celsius_to_fahrenheit(value),
        Direction::FahrenheitToCelsius => fahrenheit_to_celsius(value),
    }
}
