pub mod error;
pub mod filter;
pub mod pipeline;
pub mod record;
pub mod report;

pub use error::{Error, Result};
