pub mod chunked;
pub mod errors;

// Re-export error types for public API
pub use errors::{CodecError, should_use_color};
