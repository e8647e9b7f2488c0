//! Domain models with validation at construction
//!
//! Form input is validated when building these types.
//! Invalid input returns ValidationError, not panic.

pub mod student;
pub mod validation;

pub use student::{NewStudent, StudentForm};
pub use validation::ValidationError;
