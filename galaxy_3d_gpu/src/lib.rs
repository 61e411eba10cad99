/*!
# Galaxy 3D GPU

Format and layout metadata core of the Galaxy 3D GPU resource abstraction.

This crate provides the backend-agnostic pieces every concrete backend
(Vulkan, Direct3D, Metal, OpenGL) builds its resources on. Backends live in
their own crates and implement the traits declared here.

## Architecture

- **format**: Pixel format catalog (sizes, block compression, view families,
  depth/stencil classification), vertex element types, sample counts
- **layout**: Subresource layout calculator (mip dimensions, row/depth
  pitch, mip/layer/subresource byte offsets)
- **resource**: Ownership model (`DeviceResource` holding a shared device
  reference), the `MappableResource` capability, `Texture`/`Buffer`
  contracts, and `Fence`
- **config**: `GraphicsDeviceOptions` handed to backends
- **log**: Pluggable logger with colored console output
*/

// Internal modules
mod error;
mod config;
pub mod log;
pub mod format;
pub mod layout;
pub mod resource;

// Main galaxy3d namespace module
pub mod galaxy3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Device options
    pub use crate::config::GraphicsDeviceOptions;

    // Logging sub-module (types and global logger API, macros are exported at crate root)
    pub mod log {
        pub use crate::log::{
            Logger, LogEntry, LogSeverity, DefaultLogger,
            set_logger, reset_logger, log, log_detailed,
        };
    }

    // Format catalog
    pub mod format {
        pub use crate::format::*;
    }

    // Subresource layout calculator
    pub mod layout {
        pub use crate::layout::*;
    }

    // Resource ownership model
    pub mod resource {
        pub use crate::resource::*;
    }
}
