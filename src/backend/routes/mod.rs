//! Routes Module
//!
//! Router assembly for the five HTTP endpoints.

/// Router creation
pub mod router;

// Re-export commonly used functions
pub use router::create_router;
