//! Printer catalog.

use serde::Serialize;

use crate::catalog::{Catalog, CatalogEntry};
use crate::error::EstimateError;

/// A printer model with its power draw.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PrinterEntry {
    /// Printer name (lookup key).
    pub name: &'static str,
    /// Average power consumption while printing (W).
    pub power_consumption_watts: f64,
    /// Maximum print speed (mm/s). Not used by the estimator.
    pub max_speed_mm_per_sec: f64,
}

impl PrinterEntry {
    /// Selection label, e.g. `"Ender 3 - 270W"`.
    pub fn label(&self) -> String {
        format!("{} - {}W", self.name, self.power_consumption_watts)
    }

    /// Power draw in kilowatts.
    pub fn power_kw(&self) -> f64 {
        self.power_consumption_watts / 1000.0
    }
}

impl CatalogEntry for PrinterEntry {
    fn name(&self) -> &'static str {
        self.name
    }

    fn unknown(name: &str) -> EstimateError {
        EstimateError::UnknownPrinter(name.to_string())
    }
}

const PRINTER_TABLE: &[PrinterEntry] = &[
    PrinterEntry {
        name: "Ender 3",
        power_consumption_watts: 270.0,
        max_speed_mm_per_sec: 50.0,
    },
    PrinterEntry {
        name: "Prusa i3 MK3S+",
        power_consumption_watts: 120.0,
        max_speed_mm_per_sec: 80.0,
    },
    PrinterEntry {
        name: "Bambu Lab X1 Carbon",
        power_consumption_watts: 350.0,
        max_speed_mm_per_sec: 500.0,
    },
    PrinterEntry {
        name: "Ultimaker S3",
        power_consumption_watts: 221.0,
        max_speed_mm_per_sec: 300.0,
    },
    PrinterEntry {
        name: "Artillery Genius",
        power_consumption_watts: 350.0,
        max_speed_mm_per_sec: 150.0,
    },
    PrinterEntry {
        name: "Creality K1",
        power_consumption_watts: 350.0,
        max_speed_mm_per_sec: 600.0,
    },
];

/// Built-in printers. Ender 3 is first and is the fallback.
pub const PRINTERS: Catalog<PrinterEntry> = Catalog::new(PRINTER_TABLE);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_printers_valid() {
        let mut seen = HashSet::new();
        for printer in PRINTERS {
            assert!(seen.insert(printer.name), "duplicate {}", printer.name);
            assert!(printer.power_consumption_watts > 0.0);
            assert!(printer.max_speed_mm_per_sec > 0.0);
        }
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn test_printer_default_is_ender3() {
        assert_eq!(PRINTERS.default_entry().name, "Ender 3");
        assert_eq!(PRINTERS.resolve("Voron 2.4").name, "Ender 3");
    }

    #[test]
    fn test_printer_lookup() {
        let x1c = PRINTERS.resolve("Bambu Lab X1 Carbon");
        assert_eq!(x1c.power_consumption_watts, 350.0);
        assert_eq!(x1c.max_speed_mm_per_sec, 500.0);
        assert_eq!(PRINTERS.resolve("Prusa i3 MK3S+").power_kw(), 0.12);
        assert!(PRINTERS.lookup("Voron 2.4").is_err());
    }

    #[test]
    fn test_printer_label() {
        assert_eq!(PRINTERS.resolve("Ender 3").label(), "Ender 3 - 270W");
    }
}
