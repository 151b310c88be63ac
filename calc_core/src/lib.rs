//! # calc_core - Hollow Section Weight Engine
//!
//! `calc_core` computes the linear mass of hollow sections (round, square,
//! rectangular, oval and triangular tubes) and the diameter of the round
//! "mother pipe" each non-round section is formed from.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: Inputs, results, errors and saved records implement Serialize/Deserialize
//! - **Rich Errors**: A degenerate section is a named error carrying the offending value,
//!   never a zero or negative weight
//! - **Storage at the edge**: Saving goes through the [`store::CalculationStore`] trait
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::calculations::{calculate, CalcOptions, HollowSectionInput, MaterialParams, SectionSpec};
//!
//! let input = HollowSectionInput {
//!     section: SectionSpec::Square { od_mm: 25.0 },
//!     params: MaterialParams::new(1.0, 7850.0),
//! };
//! let result = calculate(&input, CalcOptions::default()).unwrap();
//!
//! assert_eq!(result.wall_area_mm2, 96.0);
//! assert_eq!(format!("{:.5}", result.mother_pipe.od_mm), "31.83099");
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Per-shape calculators, mother pipe estimate, validity gate
//! - [`equations`] - Closed-form area and perimeter formulas
//! - [`constants`] - π variants, default density, unit conversion
//! - [`materials`] - Named material densities
//! - [`units`] - Type-safe unit wrappers
//! - [`record`] - Saved calculation record format
//! - [`store`] - Storage collaborator (JSON file, in-memory)
//! - [`file_io`] - Atomic writes and file locking
//! - [`config`] - TOML settings
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod config;
pub mod constants;
pub mod equations;
pub mod errors;
pub mod file_io;
pub mod materials;
pub mod record;
pub mod store;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, CalcOptions, HollowSectionInput, HollowSectionResult, SectionSpec};
pub use config::Settings;
pub use errors::{CalcError, CalcResult};
pub use record::SavedCalculation;
pub use store::{CalculationStore, JsonFileStore, MemoryStore, SavedCalcs};
