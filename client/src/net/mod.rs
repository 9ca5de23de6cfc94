//! Browser implementations of the core's I/O seams.

pub mod storage;
pub mod transport;
