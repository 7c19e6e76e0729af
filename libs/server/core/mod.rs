pub mod storage;
pub mod tracing;
pub mod utils;
