//! Error types for the Galaxy3D GPU core
//!
//! This module defines the error type shared by the format catalog, the
//! subresource layout calculator and the resource contracts.

use std::fmt;

use crate::format::PixelFormat;
use crate::resource::MapMode;

/// Result type for Galaxy3D GPU core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Galaxy3D GPU core errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Backend-specific error (Vulkan, Direct3D, etc.)
    BackendError(String),

    /// Out of GPU memory
    OutOfMemory,

    /// Invalid resource (texture, buffer, fence, etc.)
    InvalidResource(String),

    /// A texture/buffer description or device option set is malformed
    InvalidDescription(String),

    /// Per-texel size requested for a block-compressed format
    CompressedFormatSize(PixelFormat),

    /// Block size requested for a format that is not block-compressed
    NotCompressedFormat(PixelFormat),

    /// Compressed region whose width or height is >= 4 and not a multiple of 4
    UnalignedCompressedRegion {
        width: u32,
        height: u32,
        format: PixelFormat,
    },

    /// Map mode not permitted on the resource (read access without staging usage)
    InvalidMapMode {
        mode: MapMode,
        resource: String,
    },

    /// Subresource index past the end of the texture's mip/layer grid
    SubresourceOutOfRange {
        subresource: u32,
        count: u32,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::OutOfMemory => write!(f, "Out of GPU memory"),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InvalidDescription(msg) => write!(f, "Invalid description: {}", msg),
            Error::CompressedFormatSize(format) => write!(
                f,
                "Per-texel size is undefined for compressed format {:?}",
                format
            ),
            Error::NotCompressedFormat(format) => write!(
                f,
                "Block size is undefined for non-compressed format {:?}",
                format
            ),
            Error::UnalignedCompressedRegion { width, height, format } => write!(
                f,
                "Region {}x{} is not block-aligned for compressed format {:?}",
                width, height, format
            ),
            Error::InvalidMapMode { mode, resource } => write!(
                f,
                "Map mode {:?} requires staging usage (resource '{}')",
                mode, resource
            ),
            Error::SubresourceOutOfRange { subresource, count } => write!(
                f,
                "Subresource {} out of range (texture has {} subresources)",
                subresource, count
            ),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
