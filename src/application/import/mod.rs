//! Import Use Case
//!
//! Validates uploaded rows, stages them, and commits the survivors.

mod options;
mod result;
mod use_case;


pub use options::ImportOptions;
pub use result::ImportResult;
pub use use_case::ImportUseCase;
