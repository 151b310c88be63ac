//! # Section Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input, options) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! ## Modules
//!
//! - [`hollow_section`] - Wall area and linear mass of hollow sections
//! - [`mother_pipe`] - Round stock pipe a section is formed from
//! - [`validation`] - Input gate shared by every shape

pub mod hollow_section;
pub mod mother_pipe;
pub mod validation;

// Re-export commonly used types
pub use hollow_section::{
    calculate, CalcOptions, HollowSectionInput, HollowSectionResult, MaterialParams, SectionSpec,
    ShapeExtras, ShapeKind,
};
pub use mother_pipe::{MotherPipe, MotherPipeMethod};
