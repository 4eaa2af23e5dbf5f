//! # waymark-core
//! Foundation types and traits shared by the Waymark checkpoint crates.

pub mod constants;
pub mod error;
pub mod traits;
pub mod types;
