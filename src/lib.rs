pub mod error;
pub mod layout;
pub mod config;

// Convenience re-exports
pub use error::{LayoutError, Result};
pub use layout::layout_type::DLayout;
pub use config::kernel_config::{KernelConfig, DEBUG_ENABLE};
