pub mod core;
pub mod report;

pub use crate::core::error::{MapError, Result};
pub use crate::core::mapper::RiskMapper;
