/// Buffer trait, buffer description and usage flags

use bitflags::bitflags;

use crate::error::{Error, Result};
use crate::layout::SubresourceLayout;
use crate::resource::{DeviceResource, MappableResource};

bitflags! {
    /// How a buffer may be used by the device and the host
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct BufferUsage: u32 {
        /// Vertex buffer
        const VERTEX = 1 << 0;
        /// Index buffer
        const INDEX = 1 << 1;
        /// Uniform/constant buffer
        const UNIFORM = 1 << 2;
        /// Read-only structured storage
        const STRUCTURED_READ_ONLY = 1 << 3;
        /// Read-write structured storage
        const STRUCTURED_READ_WRITE = 1 << 4;
        /// Indirect draw/dispatch arguments
        const INDIRECT = 1 << 5;
        /// Frequently rewritten from the host
        const DYNAMIC = 1 << 6;
        /// CPU-visible memory (transfer point between host and device)
        const STAGING = 1 << 7;
    }
}

/// Description of a buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferDescription {
    /// Size in bytes
    pub size_in_bytes: u64,
    /// Usage flags
    pub usage: BufferUsage,
}

impl BufferDescription {
    pub fn new(size_in_bytes: u64, usage: BufferUsage) -> Self {
        Self { size_in_bytes, usage }
    }

    /// Returns true if the buffer was described with the staging usage flag
    pub fn is_staging(&self) -> bool {
        self.usage.contains(BufferUsage::STAGING)
    }

    /// Layout a mapping of this buffer exposes: the whole buffer as one row
    ///
    /// # Errors
    ///
    /// Buffers have a single subresource; any index other than 0 returns
    /// `SubresourceOutOfRange`.
    pub fn mapped_layout(&self, subresource: u32) -> Result<SubresourceLayout> {
        if subresource != 0 {
            crate::gpu_bail!("galaxy3d::BufferDescription",
                Error::SubresourceOutOfRange { subresource, count: 1 });
        }
        Ok(SubresourceLayout {
            offset: 0,
            size_in_bytes: self.size_in_bytes,
            row_pitch: self.size_in_bytes,
            depth_pitch: self.size_in_bytes,
        })
    }
}

/// Buffer resource trait
///
/// Implemented by backend-specific buffer types. Buffers are mappable;
/// implementors report staging from `description().is_staging()`.
pub trait Buffer: DeviceResource + MappableResource {
    /// The description the buffer was created from
    fn description(&self) -> &BufferDescription;
}

#[cfg(test)]
#[path = "buffer_tests.rs"]
mod tests;
