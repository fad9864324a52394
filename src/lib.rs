pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod oracle;

pub use error::{Result, VeerError};
