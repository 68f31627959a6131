//! Bounding-box print estimation.
//!
//! The estimator knows nothing about geometry beyond the bounding box. It
//! turns dimensions and process settings into mass, cost and time with
//! straight-line arithmetic, and never validates its input: zero divisors
//! give infinities or NaN, negative dimensions give negative results.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::material::{MaterialEntry, MATERIALS};
use crate::printer::{PrinterEntry, PRINTERS};

/// Extrusion path length (mm) charged per cm³ of filled volume.
pub const FILL_PATH_MM_PER_CM3: f64 = 10.0;

/// Parameters for one estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputParameters {
    /// Bounding box length (mm).
    pub length_mm: f64,
    /// Bounding box width (mm).
    pub width_mm: f64,
    /// Bounding box height (mm).
    pub height_mm: f64,
    /// Infill density in percent (nominally 0 to 100).
    pub infill_percent: f64,
    /// Material catalog key.
    pub material_name: String,
    /// Printer catalog key.
    pub printer_name: String,
    /// Layer height (mm).
    pub layer_height_mm: f64,
    /// Print speed (mm/s).
    pub print_speed_mm_per_sec: f64,
    /// Electricity price per kWh (currency units).
    pub electricity_rate_per_kwh: f64,
}

impl Default for InputParameters {
    fn default() -> Self {
        Self {
            length_mm: 50.0,
            width_mm: 50.0,
            height_mm: 20.0,
            infill_percent: 20.0,
            material_name: MATERIALS.default_entry().name.to_string(),
            printer_name: PRINTERS.default_entry().name.to_string(),
            layer_height_mm: 0.2,
            print_speed_mm_per_sec: 50.0,
            electricity_rate_per_kwh: 0.15,
        }
    }
}

impl InputParameters {
    /// Parse parameters from TOML. Missing fields take their defaults.
    pub fn from_toml(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Parse parameters from JSON. Missing fields take their defaults.
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// The material these parameters resolve to, with fallback.
    pub fn material(&self) -> &'static MaterialEntry {
        MATERIALS.resolve(&self.material_name)
    }

    /// The printer these parameters resolve to, with fallback.
    pub fn printer(&self) -> &'static PrinterEntry {
        PRINTERS.resolve(&self.printer_name)
    }

    /// Check both catalog keys exactly, without fallback.
    pub fn check_names(&self) -> Result<()> {
        MATERIALS.lookup(&self.material_name)?;
        PRINTERS.lookup(&self.printer_name)?;
        Ok(())
    }
}

/// Estimated quantities for one set of parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    /// Unfilled bounding box volume (cm³).
    pub volume_cm3: f64,
    /// Extruded filament mass (g).
    pub weight_grams: f64,
    /// Filament cost.
    pub material_cost: f64,
    /// Print duration (h).
    pub total_time_hours: f64,
    /// Energy cost over the print duration.
    pub electricity_cost: f64,
    /// `material_cost + electricity_cost`.
    pub total_cost: f64,
}

/// Intermediate quantities of the time and mass model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimateDetails {
    /// Volume actually filled with material (cm³).
    pub filled_volume_cm3: f64,
    /// Number of layers, not rounded.
    pub layers: f64,
    /// Outline length of one layer (mm).
    pub perimeter_length_mm: f64,
    /// Total extrusion path length (mm).
    pub total_print_length_mm: f64,
}

/// A [`ResultSet`] together with the quantities it was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    /// Caller-facing results.
    pub result: ResultSet,
    /// Intermediate quantities.
    pub details: EstimateDetails,
}

/// Estimate cost, time and mass for a print.
///
/// # Example
///
/// ```
/// use printcalc::{estimate, InputParameters};
///
/// let result = estimate(&InputParameters::default());
/// assert!((result.volume_cm3 - 50.0).abs() < 1e-9);
/// assert!((result.total_time_hours - 6.7).abs() < 1e-9);
/// ```
pub fn estimate(params: &InputParameters) -> ResultSet {
    estimate_detailed(params).result
}

/// Like [`estimate`], also returning the intermediate quantities.
pub fn estimate_detailed(params: &InputParameters) -> Estimate {
    let material = params.material();
    let printer = params.printer();

    // Mass and material cost
    let volume_cm3 = (params.length_mm * params.width_mm * params.height_mm) / 1000.0;
    let filled_volume_cm3 = volume_cm3 * (params.infill_percent / 100.0);
    let weight_grams = filled_volume_cm3 * material.density;
    let material_cost = (weight_grams / 1000.0) * material.cost_per_kg;

    // Print time: perimeter of every layer plus a fill term
    let layers = params.height_mm / params.layer_height_mm;
    let perimeter_length_mm = 2.0 * (params.length_mm + params.width_mm);
    let total_print_length_mm =
        perimeter_length_mm * layers + filled_volume_cm3 * FILL_PATH_MM_PER_CM3;
    let total_time_hours = total_print_length_mm / (params.print_speed_mm_per_sec * 60.0);

    let electricity_cost = printer.power_kw() * total_time_hours * params.electricity_rate_per_kwh;
    let total_cost = material_cost + electricity_cost;

    Estimate {
        result: ResultSet {
            volume_cm3,
            weight_grams,
            material_cost,
            total_time_hours,
            electricity_cost,
            total_cost,
        },
        details: EstimateDetails {
            filled_volume_cm3,
            layers,
            perimeter_length_mm,
            total_print_length_mm,
        },
    }
}
