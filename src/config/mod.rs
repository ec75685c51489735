pub mod kernel_config;

pub use kernel_config::{KernelConfig, DEBUG_ENABLE};
