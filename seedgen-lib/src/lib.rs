pub mod generator;
pub mod reader;
pub mod types;
pub mod writer;

pub use generator::*;
pub use reader::*;
pub use types::*;
pub use writer::*;
