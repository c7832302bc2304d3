//! Tutor chat orchestration
//!
//! Facade over [`tutor_core`]; see that crate for the building blocks.

pub use tutor_core::*;
