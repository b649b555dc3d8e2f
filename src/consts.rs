//! Compile-time constants
pub const TITLE_BASE: &str = "ISUPORTS";
