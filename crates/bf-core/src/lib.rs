//! bf-core: shared foundation for the blood-flow workspace.
//!
//! Contains:
//! - units (uom SI types + CGS constructors)
//! - numeric (Real + tolerances + float guards)
//! - error (shared error type)

pub mod error;
pub mod numeric;
pub mod units;

pub use error::{BfError, BfResult};
pub use numeric::*;
pub use units::*;
