//! CLI library components for the PBDB field dictionary.

pub mod logging;
pub mod render;
