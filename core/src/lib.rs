//! # RedLilium Core
//!
//! Basic building blocks shared by the GUI crates:
//! - [`math`] - 2D vectors, unified dimensions, sizes and rectangles
//! - [`texture`] - pixel formats and their storage description

pub mod math;
pub mod texture;

/// Core library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the core subsystem.
pub fn init() {
    log::info!("RedLilium Core v{} initialized", VERSION);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
