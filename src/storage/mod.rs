//! Storage layer for encryptx
//!
//! Atomic file writes and scoped scratch files for transient plaintext.

pub mod file_io;
pub mod scratch;

pub use file_io::{read_bytes, read_json, write_bytes_atomic};
pub use scratch::ScratchFile;
