//! Filament material catalog.

use serde::Serialize;

use crate::catalog::{Catalog, CatalogEntry};
use crate::error::EstimateError;

/// A filament material with its price and density.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MaterialEntry {
    /// Material name (lookup key).
    pub name: &'static str,
    /// Price per kilogram (currency units).
    pub cost_per_kg: f64,
    /// Density (g/cm³).
    pub density: f64,
}

impl MaterialEntry {
    /// Selection label, e.g. `"PLA - $25/kg"`.
    pub fn label(&self) -> String {
        format!("{} - ${}/kg", self.name, self.cost_per_kg)
    }
}

impl CatalogEntry for MaterialEntry {
    fn name(&self) -> &'static str {
        self.name
    }

    fn unknown(name: &str) -> EstimateError {
        EstimateError::UnknownMaterial(name.to_string())
    }
}

const MATERIAL_TABLE: &[MaterialEntry] = &[
    MaterialEntry {
        name: "PLA",
        cost_per_kg: 25.0,
        density: 1.24,
    },
    MaterialEntry {
        name: "ABS",
        cost_per_kg: 28.0,
        density: 1.04,
    },
    MaterialEntry {
        name: "PETG",
        cost_per_kg: 35.0,
        density: 1.27,
    },
    MaterialEntry {
        name: "TPU",
        cost_per_kg: 45.0,
        density: 1.20,
    },
    MaterialEntry {
        name: "ASA",
        cost_per_kg: 40.0,
        density: 1.05,
    },
    MaterialEntry {
        name: "PC",
        cost_per_kg: 85.0,
        density: 1.20,
    },
    MaterialEntry {
        name: "Nylon",
        cost_per_kg: 60.0,
        density: 1.08,
    },
];

/// Built-in materials. PLA is first and is the fallback.
pub const MATERIALS: Catalog<MaterialEntry> = Catalog::new(MATERIAL_TABLE);
