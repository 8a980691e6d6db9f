pub mod adapters;
pub mod config;
pub mod error;
pub mod session;

// Re-export the session driver to make it easily accessible to the binary
// that wires the adapters together.
pub use session::{EmailCheck, Session};
