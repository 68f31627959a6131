//! Display formatting for estimates.
//!
//! Rounding happens here and nowhere else; a [`ResultSet`] always carries
//! the unrounded values. Any non-finite quantity renders as [`MISSING`].

use serde::Serialize;

use crate::estimate::ResultSet;

/// Placeholder for values that cannot be displayed (NaN, infinity, or a
/// share of a zero total).
pub const MISSING: &str = "-";

/// Weight at or above which kilograms are shown instead of grams.
pub const KILOGRAM_THRESHOLD_GRAMS: f64 = 1000.0;

/// Round to `decimals` places with ties away from zero.
///
/// `{:.N}` alone rounds exact binary ties to even (`0.125` to `0.12`), so
/// every formatter rounds through here first. The `+ 0.0` turns a negative
/// zero into a positive one so it never prints with a sign.
fn round_half_up(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale + 0.0
}

/// `"$X.XX"`.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return MISSING.into();
    }
    format!("${:.2}", round_half_up(amount, 2))
}

/// Whole hours and whole minutes, both floored: `6.7` is `"6h 42m"`.
pub fn format_duration(hours: f64) -> String {
    if !hours.is_finite() {
        return MISSING.into();
    }
    let h = hours.floor();
    let m = ((hours - h) * 60.0).floor();
    format!("{h:.0}h {m:.0}m")
}

/// `"X.X g"` below one kilogram, `"X.XX kg"` from one kilogram up.
pub fn format_weight(grams: f64) -> String {
    if !grams.is_finite() {
        return MISSING.into();
    }
    if grams >= KILOGRAM_THRESHOLD_GRAMS {
        format!("{:.2} kg", round_half_up(grams / 1000.0, 2))
    } else {
        format!("{:.1} g", round_half_up(grams, 1))
    }
}

/// `"X.X cm³"`.
pub fn format_volume(cm3: f64) -> String {
    if !cm3.is_finite() {
        return MISSING.into();
    }
    format!("{:.1} cm³", round_half_up(cm3, 1))
}

/// Percentage of `total` that `part` represents.
///
/// `None` when `total` is zero or not finite, which keeps a zero total from
/// turning into `NaN%`. Negative totals still produce shares.
pub fn cost_share(part: f64, total: f64) -> Option<f64> {
    if total == 0.0 || !total.is_finite() {
        return None;
    }
    let share = part / total * 100.0;
    share.is_finite().then_some(share)
}

/// `"X.X%"`, or [`MISSING`].
pub fn format_share(share: Option<f64>) -> String {
    match share {
        Some(percent) => format!("{:.1}%", round_half_up(percent, 1)),
        None => MISSING.into(),
    }
}

/// How the total cost splits between material and electricity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostBreakdown {
    /// Material share of the total (%).
    pub material_percent: Option<f64>,
    /// Electricity share of the total (%).
    pub electricity_percent: Option<f64>,
}

impl CostBreakdown {
    /// Compute both shares from a result.
    pub fn from_result(result: &ResultSet) -> Self {
        Self {
            material_percent: cost_share(result.material_cost, result.total_cost),
            electricity_percent: cost_share(result.electricity_cost, result.total_cost),
        }
    }

    /// Sum of both shares, if both are defined.
    pub fn total_percent(&self) -> Option<f64> {
        Some(self.material_percent? + self.electricity_percent?)
    }
}

/// Display strings for one [`ResultSet`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Total cost.
    pub total_cost: String,
    /// Material cost.
    pub material_cost: String,
    /// Electricity cost.
    pub electricity_cost: String,
    /// Print duration.
    pub print_time: String,
    /// Filament weight.
    pub weight: String,
    /// Bounding volume.
    pub volume: String,
    /// Material share of the total.
    pub material_share: String,
    /// Electricity share of the total.
    pub electricity_share: String,
}

impl Report {
    /// Format every field of `result`.
    pub fn new(result: &ResultSet) -> Self {
        let breakdown = CostBreakdown::from_result(result);
        Self {
            total_cost: format_currency(result.total_cost),
            material_cost: format_currency(result.material_cost),
            electricity_cost: format_currency(result.electricity_cost),
            print_time: format_duration(result.total_time_hours),
            weight: format_weight(result.weight_grams),
            volume: format_volume(result.volume_cm3),
            material_share: format_share(breakdown.material_percent),
            electricity_share: format_share(breakdown.electricity_percent),
        }
    }
}

impl From<&ResultSet> for Report {
    fn from(result: &ResultSet) -> Self {
        Self::new(result)
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Total cost:        {}", self.total_cost)?;
        writeln!(f, "  Material:        {} ({})", self.material_cost, self.material_share)?;
        writeln!(
            f,
            "  Electricity:     {} ({})",
            self.electricity_cost, self.electricity_share
        )?;
        writeln!(f, "Print time:        {}", self.print_time)?;
        writeln!(f, "Material weight:   {}", self.weight)?;
        write!(f, "Volume:            {}", self.volume)
    }
}

/// Notification text shown after a recalculation.
pub fn completion_notice(result: &ResultSet) -> String {
    format!(
        "Calculation complete. Total cost: {}",
        format_currency(result.total_cost)
    )
}
