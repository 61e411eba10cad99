//! Graphics device options
//!
//! Shared configuration vocabulary handed to backends when they create a
//! device. The core only validates it; backends decide how to honour it.

use crate::error::{Error, Result};
use crate::format::PixelFormat;
use crate::log::LogSeverity;

/// Options for creating a graphics device
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphicsDeviceOptions {
    /// Enable backend debug/validation layers
    pub debug: bool,
    /// Depth format of the main swapchain, if it has a depth target
    pub swapchain_depth_format: Option<PixelFormat>,
    /// Lowest severity printed by the default logger
    pub min_log_severity: LogSeverity,
}

impl Default for GraphicsDeviceOptions {
    fn default() -> Self {
        Self {
            debug: cfg!(debug_assertions),
            swapchain_depth_format: None,
            min_log_severity: if cfg!(debug_assertions) {
                LogSeverity::Debug
            } else {
                LogSeverity::Info
            },
        }
    }
}

impl GraphicsDeviceOptions {
    /// Options with a depth-buffered main swapchain
    pub fn with_depth(format: PixelFormat) -> Self {
        Self {
            swapchain_depth_format: Some(format),
            ..Self::default()
        }
    }

    /// Check the options for inconsistencies
    ///
    /// # Errors
    ///
    /// Returns `InvalidDescription` if `swapchain_depth_format` is not a
    /// depth/stencil capable format.
    pub fn validate(&self) -> Result<()> {
        if let Some(format) = self.swapchain_depth_format {
            if !format.is_depth_stencil_format() {
                crate::gpu_bail!("galaxy3d::GraphicsDeviceOptions",
                    Error::InvalidDescription(format!(
                        "swapchain depth format {:?} is not a depth/stencil format",
                        format
                    )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
