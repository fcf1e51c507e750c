use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Grams,
    Ounces,
    Celsius,
    Fahrenheit,
}

impl Unit {
    /// Suffix used when a value in this unit is written into a record.
    pub fn symbol(self) -> &'static str {
        match self {
            Unit::Grams => "G",
            Unit::Ounces => "Oz",
            Unit::Celsius => "C",
            Unit::Fahrenheit => "F",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Unit::Grams => "Grams",
            Unit::Ounces => "Ounces",
            Unit::Celsius => "Celsius",
            Unit::Fahrenheit => "Fahrenheit",
        }
    }

    pub fn tool(self) -> Tool {
        match self {
            Unit::Grams | Unit::Ounces => Tool::Weight,
            Unit::Celsius | Unit::Fahrenheit => Tool::Temperature,
        }
    }

    /// Accepts the unit name or its symbol, case-insensitively.
    pub fn parse(token: &str) -> Option<Unit> {
        match token.trim().to_ascii_lowercase().as_str() {
            "g" | "grams" | "gram" => Some(Unit::Grams),
            "oz" | "ounces" | "ounce" => Some(Unit::Ounces),
            "c" | "celsius" => Some(Unit::Celsius),
            "f" | "fahrenheit" => Some(Unit::Fahrenheit),
            _ => None,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One of the two converter programs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    Weight,
    Temperature,
}

impl Tool {
    pub fn units(self) -> [Unit; 2] {
        match self {
            Tool::Weight => [Unit::Grams, Unit::Ounces],
            Tool::Temperature => [Unit::Celsius, Unit::Fahrenheit],
        }
    }

    /// Domain word used in the export file header.
    pub fn heading(self) -> &'static str {
        match self {
            Tool::Weight => "Weight",
            Tool::Temperature => "Temperature",
        }
    }

    pub fn default_export_prefix(self) -> &'static str {
        match self {
            Tool::Weight => "weights",
            Tool::Temperature => "temps",
        }
    }

    /// Direction that produces `target`, if `target` belongs to this tool.
    pub fn direction_to(self, target: Unit) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|d| d.to() == target && d.from().tool() == self)
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.heading())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    GramsToOunces,
    OuncesToGrams,
    CelsiusToFahrenheit,
    FahrenheitToCelsius,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::GramsToOunces,
        Direction::OuncesToGrams,
        Direction::CelsiusToFahrenheit,
        Direction::FahrenheitToCelsius,
    ];

    pub fn from(self) -> Unit {
        match self {
            Direction::GramsToOunces => Unit::Grams,
            Direction::OuncesToGrams => Unit::Ounces,
            Direction::CelsiusToFahrenheit => Unit::Celsius,
            Direction::FahrenheitToCelsius => Unit::Fahrenheit,
        }
    }

    pub fn to(self) -> Unit {
        match self {
            Direction::GramsToOunces => Unit::Ounces,
            Direction::OuncesToGrams => Unit::Grams,
            Direction::CelsiusToFahrenheit => Unit::Fahrenheit,
            Direction::FahrenheitToCelsius => Unit::Celsius,
        }
    }
}

/// Minimum legal value for a unit's domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitBound {
    pub unit: Unit,
    pub minimum: f64,
}

impl UnitBound {
    pub const fn new(unit: Unit, minimum: f64) -> Self {
        Self { unit, minimum }
    }

    /// Physical lower limit: zero mass, or absolute zero.
    pub fn physical(unit: Unit) -> Self {
        let minimum = match unit {
            Unit::Grams | Unit::Ounces => 0.0,
            Unit::Celsius => -273.15,
            Unit::Fahrenheit => -459.67,
        };
        Self::new(unit, minimum)
    }
}

/// Bounds for every unit, fixed once the session starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundTable {
    pub grams: UnitBound,
    pub ounces: UnitBound,
    pub celsius: UnitBound,
    pub fahrenheit: UnitBound,
}

impl BoundTable {
    pub fn get(&self, unit: Unit) -> UnitBound {
        match unit {
            Unit::Grams => self.grams,
            Unit::Ounces => self.ounces,
            Unit::Celsius => self.celsius,
            Unit::Fahrenheit => self.fahrenheit,
        }
    }

    pub fn minimum(&self, unit: Unit) -> f64 {
        self.get(unit).minimum
    }

    pub fn all(&self) -> [UnitBound; 4] {
        [self.grams, self.ounces, self.celsius, self.fahrenheit]
    }
}

impl Default for BoundTable {
    fn default() -> Self {
        Self {
            grams: UnitBound::physical(Unit::Grams),
            ounces: UnitBound::physical(Unit::Ounces),
            celsius: UnitBound::physical(Unit::Celsius),
            fahrenheit: UnitBound::physical(Unit::Fahrenheit),
        }
    }
}

/// One completed conversion. Never mutated after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationRecord {
    pub input_value: f64,
    pub input_unit: Unit,
    pub output_value: f64,
    pub output_unit: Unit,
}

impl CalculationRecord {
    pub fn new(input_value: f64, input_unit: Unit, output_value: f64, output_unit: Unit) -> Self {
        Self {
            input_value,
            input_unit,
            output_value,
            output_unit,
        }
    }
}

impl fmt::Display for CalculationRecord {
    /// Renders as e.g. `12.0G is 0.4Oz`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{} is {:.1}{}",
            format_input(self.input_value),
            self.input_unit.symbol(),
            self.output_value,
            self.output_unit.symbol()
        )
    }
}

/// Shortest round-trip digits in positional notation, with at least one
/// decimal place: `12` gives `12.0`, `0.00001` stays `0.00001`.
pub fn format_input(value: f64) -> String {
    let digits = value.to_string();
    if value.is_finite() && !digits.contains('.') {
        format!("{}.0", digits)
    } else {
        digits
    }
}
