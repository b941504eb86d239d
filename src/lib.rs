pub mod error;
pub mod render;
pub mod repl;
pub mod report;
pub mod scanner;

// Re-export the common entry points for convenience
pub use error::ScanError;
pub use report::Reporter;
pub use scanner::{ScanOutcome, scan, scan_with};
