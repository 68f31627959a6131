//! WASM bindings for the printcalc estimator.

use printcalc::{
    Calculator, CostBreakdown, InputParameters, Report, ResultSet, MATERIALS, PRINTERS,
};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Initialize panic hook for better error messages.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Estimation parameters for WASM.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[wasm_bindgen(getter_with_clone)]
pub struct WasmInputParameters {
    /// Bounding box length (mm).
    pub length_mm: f64,
    /// Bounding box width (mm).
    pub width_mm: f64,
    /// Bounding box height (mm).
    pub height_mm: f64,
    /// Infill density (%).
    pub infill_percent: f64,
    /// Material name.
    pub material_name: String,
    /// Printer name.
    pub printer_name: String,
    /// Layer height (mm).
    pub layer_height_mm: f64,
    /// Print speed (mm/s).
    pub print_speed_mm_per_sec: f64,
    /// Electricity price per kWh.
    pub electricity_rate_per_kwh: f64,
}

#[wasm_bindgen]
impl WasmInputParameters {
    /// Create default parameters.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        InputParameters::default().into()
    }

    /// Create from JSON.
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str) -> Result<WasmInputParameters, JsError> {
        serde_json::from_str(json).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Convert to JSON.
    #[wasm_bindgen(js_name = toJson)]
    pub fn to_json(&self) -> Result<String, JsError> {
        serde_json::to_string(self).map_err(|e| JsError::new(&e.to_string()))
    }
}

impl Default for WasmInputParameters {
    fn default() -> Self {
        Self::new()
    }
}

impl From<InputParameters> for WasmInputParameters {
    fn from(params: InputParameters) -> Self {
        Self {
            length_mm: params.length_mm,
            width_mm: params.width_mm,
            height_mm: params.height_mm,
            infill_percent: params.infill_percent,
            material_name: params.material_name,
            printer_name: params.printer_name,
            layer_height_mm: params.layer_height_mm,
            print_speed_mm_per_sec: params.print_speed_mm_per_sec,
            electricity_rate_per_kwh: params.electricity_rate_per_kwh,
        }
    }
}

impl From<WasmInputParameters> for InputParameters {
    fn from(params: WasmInputParameters) -> Self {
        Self {
            length_mm: params.length_mm,
            width_mm: params.width_mm,
            height_mm: params.height_mm,
            infill_percent: params.infill_percent,
            material_name: params.material_name,
            printer_name: params.printer_name,
            layer_height_mm: params.layer_height_mm,
            print_speed_mm_per_sec: params.print_speed_mm_per_sec,
            electricity_rate_per_kwh: params.electricity_rate_per_kwh,
        }
    }
}

/// Estimate result for WASM.
#[wasm_bindgen]
pub struct WasmResultSet {
    inner: ResultSet,
}

#[wasm_bindgen]
impl WasmResultSet {
    /// Bounding volume (cm³).
    #[wasm_bindgen(getter, js_name = volumeCm3)]
    pub fn volume_cm3(&self) -> f64 {
        self.inner.volume_cm3
    }

    /// Filament weight (g).
    #[wasm_bindgen(getter, js_name = weightGrams)]
    pub fn weight_grams(&self) -> f64 {
        self.inner.weight_grams
    }

    /// Material cost.
    #[wasm_bindgen(getter, js_name = materialCost)]
    pub fn material_cost(&self) -> f64 {
        self.inner.material_cost
    }

    /// Print time (h).
    #[wasm_bindgen(getter, js_name = totalTimeHours)]
    pub fn total_time_hours(&self) -> f64 {
        self.inner.total_time_hours
    }

    /// Electricity cost.
    #[wasm_bindgen(getter, js_name = electricityCost)]
    pub fn electricity_cost(&self) -> f64 {
        self.inner.electricity_cost
    }

    /// Total cost.
    #[wasm_bindgen(getter, js_name = totalCost)]
    pub fn total_cost(&self) -> f64 {
        self.inner.total_cost
    }

    /// Material share of the total (%), or `undefined` for a zero total.
    #[wasm_bindgen(getter, js_name = materialPercent)]
    pub fn material_percent(&self) -> Option<f64> {
        CostBreakdown::from_result(&self.inner).material_percent
    }

    /// Electricity share of the total (%), or `undefined` for a zero total.
    #[wasm_bindgen(getter, js_name = electricityPercent)]
    pub fn electricity_percent(&self) -> Option<f64> {
        CostBreakdown::from_result(&self.inner).electricity_percent
    }

    /// Notification text for this result.
    #[wasm_bindgen(js_name = completionNotice)]
    pub fn completion_notice(&self) -> String {
        printcalc::completion_notice(&self.inner)
    }

    /// Get result as JSON.
    #[wasm_bindgen(js_name = toJson)]
    pub fn to_json(&self) -> Result<String, JsError> {
        serde_json::to_string(&self.inner).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Get display strings for every field.
    #[wasm_bindgen(js_name = getReport)]
    pub fn get_report(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(&Report::new(&self.inner))
            .map_err(|e| JsError::new(&e.to_string()))
    }
}

/// Estimate a print.
#[wasm_bindgen]
pub fn estimate(params: &WasmInputParameters) -> WasmResultSet {
    let params: InputParameters = params.clone().into();
    WasmResultSet {
        inner: printcalc::estimate(&params),
    }
}

/// Recompute-on-change session for a form-driven front end.
#[wasm_bindgen]
pub struct WasmCalculator {
    inner: Calculator,
}

#[wasm_bindgen]
impl WasmCalculator {
    /// Start with default parameters.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: Calculator::default(),
        }
    }

    /// Replace the parameters and return the new result.
    pub fn update(&mut self, params: &WasmInputParameters) -> WasmResultSet {
        let inner = *self.inner.update(params.clone().into());
        WasmResultSet { inner }
    }

    /// Result of the last recalculation.
    #[wasm_bindgen(getter)]
    pub fn result(&self) -> WasmResultSet {
        WasmResultSet {
            inner: *self.inner.result(),
        }
    }

    /// Parameters of the last recalculation.
    #[wasm_bindgen(getter)]
    pub fn params(&self) -> WasmInputParameters {
        self.inner.params().clone().into()
    }
}

impl Default for WasmCalculator {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct MaterialInfo {
    name: &'static str,
    label: String,
    cost_per_kg: f64,
    density: f64,
}

#[derive(Serialize)]
struct PrinterInfo {
    name: &'static str,
    label: String,
    power_consumption_watts: f64,
    max_speed_mm_per_sec: f64,
}

/// Get the material catalog in display order.
#[wasm_bindgen(js_name = getMaterials)]
pub fn get_materials() -> Result<JsValue, JsError> {
    let materials: Vec<MaterialInfo> = MATERIALS
        .into_iter()
        .map(|m| MaterialInfo {
            name: m.name,
            label: m.label(),
            cost_per_kg: m.cost_per_kg,
            density: m.density,
        })
        .collect();

    serde_wasm_bindgen::to_value(&materials).map_err(|e| JsError::new(&e.to_string()))
}

/// Get the printer catalog in display order.
#[wasm_bindgen(js_name = getPrinters)]
pub fn get_printers() -> Result<JsValue, JsError> {
    let printers: Vec<PrinterInfo> = PRINTERS
        .into_iter()
        .map(|p| PrinterInfo {
            name: p.name,
            label: p.label(),
            power_consumption_watts: p.power_consumption_watts,
            max_speed_mm_per_sec: p.max_speed_mm_per_sec,
        })
        .collect();

    serde_wasm_bindgen::to_value(&printers).map_err(|e| JsError::new(&e.to_string()))
}

/// Material names in display order.
#[wasm_bindgen(js_name = materialNames)]
pub fn material_names() -> Vec<String> {
    MATERIALS.names().map(String::from).collect()
}

/// Printer names in display order.
#[wasm_bindgen(js_name = printerNames)]
pub fn printer_names() -> Vec<String> {
    PRINTERS.names().map(String::from).collect()
}

/// `"$X.XX"`.
#[wasm_bindgen(js_name = formatCurrency)]
pub fn format_currency(amount: f64) -> String {
    printcalc::format_currency(amount)
}

/// `"Hh Mm"`.
#[wasm_bindgen(js_name = formatDuration)]
pub fn format_duration(hours: f64) -> String {
    printcalc::format_duration(hours)
}

/// Grams below 1 kg, kilograms above.
#[wasm_bindgen(js_name = formatWeight)]
pub fn format_weight(grams: f64) -> String {
    printcalc::format_weight(grams)
}
