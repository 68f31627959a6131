#![warn(missing_docs)]

//! Cost, time and material estimation for 3D prints.
//!
//! Estimates are computed from an object's bounding box and a handful of
//! process settings. Two static catalogs supply material prices and
//! densities ([`MATERIALS`]) and printer power draw ([`PRINTERS`]).
//!
//! # Example
//!
//! ```
//! use printcalc::{estimate, InputParameters, Report};
//!
//! let params = InputParameters {
//!     material_name: "PETG".into(),
//!     infill_percent: 30.0,
//!     ..Default::default()
//! };
//! let result = estimate(&params);
//! let report = Report::new(&result);
//!
//! println!("{report}");
//! assert_eq!(result.total_cost, result.material_cost + result.electricity_cost);
//! ```

pub mod catalog;
pub mod error;
pub mod estimate;
pub mod format;
pub mod material;
pub mod printer;
pub mod session;

pub use catalog::{Catalog, CatalogEntry};
pub use error::{EstimateError, Result};
pub use estimate::{
    estimate, estimate_detailed, Estimate, EstimateDetails, InputParameters, ResultSet,
    FILL_PATH_MM_PER_CM3,
};
pub use format::{
    completion_notice, cost_share, format_currency, format_duration, format_share,
    format_volume, format_weight, CostBreakdown, Report,
};
pub use material::{MaterialEntry, MATERIALS};
pub use printer::{PrinterEntry, PRINTERS};
pub use session::Calculator;
