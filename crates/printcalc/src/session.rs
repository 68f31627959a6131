//! Recompute-on-change session.
//!
//! A [`Calculator`] holds the parameters a front end is editing and the
//! result of the last estimate. Every change goes through
//! [`Calculator::update`] or [`Calculator::edit`], which call
//! [`estimate_detailed`] and replace the stored result. There is no caching
//! and no shared state: two calculators never observe each other.

use tracing::{debug, warn};

use crate::estimate::{estimate_detailed, Estimate, EstimateDetails, InputParameters, ResultSet};
use crate::material::MATERIALS;
use crate::printer::PRINTERS;

/// Current parameters plus the result computed from them.
#[derive(Debug, Clone)]
pub struct Calculator {
    params: InputParameters,
    estimate: Estimate,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(InputParameters::default())
    }
}

impl Calculator {
    /// Start a session and compute the first result.
    pub fn new(params: InputParameters) -> Self {
        let estimate = recompute(&params);
        Self { params, estimate }
    }

    /// Parameters the current result was computed from.
    pub fn params(&self) -> &InputParameters {
        &self.params
    }

    /// Result of the last recalculation.
    pub fn result(&self) -> &ResultSet {
        &self.estimate.result
    }

    /// Intermediate quantities of the last recalculation.
    pub fn details(&self) -> &EstimateDetails {
        &self.estimate.details
    }

    /// Replace the parameters and recompute.
    pub fn update(&mut self, params: InputParameters) -> &ResultSet {
        self.estimate = recompute(&params);
        self.params = params;
        &self.estimate.result
    }

    /// Change the parameters in place and recompute.
    ///
    /// ```
    /// use printcalc::Calculator;
    ///
    /// let mut calc = Calculator::default();
    /// let before = calc.result().weight_grams;
    /// calc.edit(|p| p.infill_percent = 40.0);
    /// assert!(calc.result().weight_grams > before);
    /// ```
    pub fn edit(&mut self, change: impl FnOnce(&mut InputParameters)) -> &ResultSet {
        change(&mut self.params);
        self.estimate = recompute(&self.params);
        &self.estimate.result
    }

    /// Give up the session, keeping the last parameters and estimate.
    pub fn into_parts(self) -> (InputParameters, Estimate) {
        (self.params, self.estimate)
    }
}

fn recompute(params: &InputParameters) -> Estimate {
    if !MATERIALS.contains(&params.material_name) {
        warn!(
            material = %params.material_name,
            fallback = MATERIALS.default_entry().name,
            "Unknown material, using catalog default"
        );
    }
    if !PRINTERS.contains(&params.printer_name) {
        warn!(
            printer = %params.printer_name,
            fallback = PRINTERS.default_entry().name,
            "Unknown printer, using catalog default"
        );
    }

    let estimate = estimate_detailed(params);
    debug!(
        total_cost = estimate.result.total_cost,
        hours = estimate.result.total_time_hours,
        grams = estimate.result.weight_grams,
        "Recalculated estimate"
    );
    estimate
}
