use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One year of Kaya-identity observations for a single region
/// (one row = one year; years are unique within a dataset).
///
/// The four primary quantities and the four intensity ratios derived from
/// them are stored side by side, already converted to display units:
/// population in billions, GDP in trillion dollars, energy in quads,
/// emissions in million metric tons.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KayaRecord {
    pub year: i32,
    /// P: population (billions)
    pub population: f64,
    /// G: gross domestic product ($ trillion)
    pub gdp: f64,
    /// E: primary energy consumption (quads)
    pub energy: f64,
    /// F: fossil-fuel CO2 emissions (million metric tons)
    pub emissions: f64,
    /// g = G / P: per-capita GDP ($ thousand per person)
    pub gdp_per_capita: f64,
    /// e = E / G: energy intensity of the economy (quads per $ trillion)
    pub energy_intensity: f64,
    /// f = F / E: emissions intensity of the energy supply (MMT per quad)
    pub carbon_intensity_energy: f64,
    /// ef = F / G: emissions intensity of the economy (tonnes CO2 per $ million)
    pub carbon_intensity_economy: f64,
}

/// The eight recognized Kaya variables.
///
/// Names follow the conventional Kaya-identity notation: uppercase for the
/// primary quantities, lowercase for intensity ratios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variable {
    /// P — population
    P,
    /// G — gross domestic product
    G,
    /// E — primary energy consumption
    E,
    /// F — fossil-fuel CO2 emissions
    F,
    /// g — per-capita GDP
    SmallG,
    /// e — energy intensity of the economy
    SmallE,
    /// f — emissions intensity of the energy supply
    SmallF,
    /// ef — emissions intensity of the economy
    Ef,
}

impl Variable {
    /// Look up a variable by its identifier. Unrecognized names yield `None`
    /// rather than an error; callers degrade to a blank label.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "P" => Some(Variable::P),
            "G" => Some(Variable::G),
            "E" => Some(Variable::E),
            "F" => Some(Variable::F),
            "g" => Some(Variable::SmallG),
            "e" => Some(Variable::SmallE),
            "f" => Some(Variable::SmallF),
            "ef" => Some(Variable::Ef),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Variable::P => "P",
            Variable::G => "G",
            Variable::E => "E",
            Variable::F => "F",
            Variable::SmallG => "g",
            Variable::SmallE => "e",
            Variable::SmallF => "f",
            Variable::Ef => "ef",
        }
    }

    /// Y-axis display label, units included.
    pub fn axis_label(&self) -> &'static str {
        match self {
            Variable::P => "Population (billions)",
            Variable::G => "Gross Domestic Product ($ trillion)",
            Variable::E => "Energy consumption (quads)",
            Variable::F => "Fossil-fuel CO2 emissions (million metric tons)",
            Variable::SmallG => "Per-capita GDP ($ thousand per person)",
            Variable::SmallE => "Energy intensity of economy (quads per $ trillion)",
            Variable::SmallF => {
                "Emissions intensity of energy supply (million metric tons per quad)"
            }
            Variable::Ef => "Emissions intensity of economy (tonnes CO2 per $ million)",
        }
    }

    /// Extract this variable's value from a record.
    pub fn value(&self, r: &KayaRecord) -> f64 {
        match self {
            Variable::P => r.population,
            Variable::G => r.gdp,
            Variable::E => r.energy,
            Variable::F => r.emissions,
            Variable::SmallG => r.gdp_per_capita,
            Variable::SmallE => r.energy_intensity,
            Variable::SmallF => r.carbon_intensity_energy,
            Variable::Ef => r.carbon_intensity_economy,
        }
    }
}

/// Axis label for a raw variable name: the table lookup with a blank
/// fallback. Unrecognized names map to `""`, never an error.
pub fn axis_label_for(name: &str) -> &'static str {
    Variable::parse(name).map(|v| v.axis_label()).unwrap_or("")
}

impl FromStr for Variable {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variable::parse(s).ok_or_else(|| format!("unrecognized Kaya variable: {s:?}"))
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which temporal bucket a tagged row belongs to, relative to a
/// `(start_year, stop_year)` pair. Rows exactly at a boundary year belong to
/// two buckets (inclusive on both sides); the overlap anchors both the flat
/// styling and the highlighted segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RangeTag {
    /// year <= start_year
    Pre,
    /// start_year <= year <= stop_year
    InRange,
    /// year >= stop_year
    Post,
}

/// One fuel's share of a region's energy mix in one year.
///
/// `fuel` is normally one of the six palette categories (Coal, Natural Gas,
/// Oil, Nuclear, Renewables, Total); other strings still bucket and render,
/// with a fallback wedge color.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FuelMixRecord {
    pub year: i32,
    pub fuel: String,
    /// Consumption in quads (non-negative).
    pub quads: f64,
    /// Percentage share of the year's total, 0..=100.
    pub pct: f64,
}
