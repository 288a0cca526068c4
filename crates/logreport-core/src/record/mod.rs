mod reader;
mod types;

pub use reader::RecordReader;
pub use types::*;
