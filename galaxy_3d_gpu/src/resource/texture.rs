/// Texture trait, texture description and usage flags

use bitflags::bitflags;

use crate::error::{Error, Result};
use crate::format::{PixelFormat, SampleCount};
use crate::resource::{DeviceResource, MappableResource};

bitflags! {
    /// How a texture may be used by the device and the host
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TextureUsage: u32 {
        /// Texture can be sampled in shaders
        const SAMPLED = 1 << 0;
        /// Texture can be bound as a read-write storage image
        const STORAGE = 1 << 1;
        /// Texture can be used as a color render target
        const RENDER_TARGET = 1 << 2;
        /// Texture can be used as a depth/stencil attachment
        const DEPTH_STENCIL = 1 << 3;
        /// Texture lives in CPU-visible linear memory (transfer point between host and device)
        const STAGING = 1 << 4;
        /// Mip levels beyond 0 may be generated by the device
        const GENERATE_MIPMAPS = 1 << 5;
    }
}

/// Dimensionality of a texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureType {
    Texture1D,
    Texture2D,
    Texture3D,
}

/// Description of a texture: dimensions, mip chain, layers, format and usage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureDescription {
    /// Width of mip level 0 in texels
    pub width: u32,
    /// Height of mip level 0 in texels
    pub height: u32,
    /// Depth of mip level 0 in texels (1 for 1D/2D textures)
    pub depth: u32,
    /// Number of mip levels in each array layer
    pub mip_levels: u32,
    /// Number of array layers (each with its own full mip chain)
    pub array_layers: u32,
    /// Texel encoding
    pub format: PixelFormat,
    /// Usage flags
    pub usage: TextureUsage,
    /// Dimensionality
    pub texture_type: TextureType,
    /// Samples per texel
    pub sample_count: SampleCount,
}

impl TextureDescription {
    /// Describe a 1D texture
    pub fn texture_1d(
        width: u32,
        mip_levels: u32,
        array_layers: u32,
        format: PixelFormat,
        usage: TextureUsage,
    ) -> Self {
        Self {
            width,
            height: 1,
            depth: 1,
            mip_levels,
            array_layers,
            format,
            usage,
            texture_type: TextureType::Texture1D,
            sample_count: SampleCount::X1,
        }
    }

    /// Describe a single-sampled 2D texture
    pub fn texture_2d(
        width: u32,
        height: u32,
        mip_levels: u32,
        array_layers: u32,
        format: PixelFormat,
        usage: TextureUsage,
    ) -> Self {
        Self {
            width,
            height,
            depth: 1,
            mip_levels,
            array_layers,
            format,
            usage,
            texture_type: TextureType::Texture2D,
            sample_count: SampleCount::X1,
        }
    }

    /// Describe a 3D texture (always a single array layer)
    pub fn texture_3d(
        width: u32,
        height: u32,
        depth: u32,
        mip_levels: u32,
        format: PixelFormat,
        usage: TextureUsage,
    ) -> Self {
        Self {
            width,
            height,
            depth,
            mip_levels,
            array_layers: 1,
            format,
            usage,
            texture_type: TextureType::Texture3D,
            sample_count: SampleCount::X1,
        }
    }

    /// Same description with a different sample count
    pub fn with_sample_count(mut self, sample_count: SampleCount) -> Self {
        self.sample_count = sample_count;
        self
    }

    /// Returns true if the texture was described with the staging usage flag
    pub fn is_staging(&self) -> bool {
        self.usage.contains(TextureUsage::STAGING)
    }

    /// Check the description for values no backend can honour
    ///
    /// # Errors
    ///
    /// Returns `InvalidDescription` if a dimension, the mip count or the
    /// layer count is zero, if the mip count exceeds the full mip chain, if a
    /// multisampled texture has more than one mip level, if a 1D texture has
    /// height/depth other than 1, if a 3D texture has more than one layer, or
    /// if mip levels x array layers does not fit in a `u32` subresource index.
    pub fn validate(&self) -> Result<()> {
        let problem = if self.width == 0 || self.height == 0 || self.depth == 0 {
            Some(format!(
                "dimensions must be non-zero (got {}x{}x{})",
                self.width, self.height, self.depth
            ))
        } else if self.mip_levels == 0 {
            Some("mip_levels must be at least 1".to_string())
        } else if self.array_layers == 0 {
            Some("array_layers must be at least 1".to_string())
        } else if self.mip_levels > crate::layout::max_mip_levels(self.width, self.height, self.depth) {
            Some(format!(
                "mip_levels {} exceeds the full chain of a {}x{}x{} texture",
                self.mip_levels, self.width, self.height, self.depth
            ))
        } else if self.mip_levels.checked_mul(self.array_layers).is_none() {
            Some(format!(
                "{} mip levels x {} array layers exceeds the subresource index range",
                self.mip_levels, self.array_layers
            ))
        } else if self.sample_count.is_multisampled() && self.mip_levels != 1 {
            Some(format!(
                "multisampled texture ({:?}) must have exactly one mip level",
                self.sample_count
            ))
        } else if self.texture_type == TextureType::Texture1D && (self.height != 1 || self.depth != 1) {
            Some("1D texture must have height and depth of 1".to_string())
        } else if self.texture_type == TextureType::Texture3D && self.array_layers != 1 {
            Some("3D texture must have a single array layer".to_string())
        } else {
            None
        };

        match problem {
            Some(msg) => Err(crate::gpu_err!("galaxy3d::TextureDescription", Error::InvalidDescription(msg))),
            None => Ok(()),
        }
    }
}

/// Texture resource trait
///
/// Implemented by backend-specific texture types. Textures are mappable;
/// implementors report staging from `description().is_staging()`.
pub trait Texture: DeviceResource + MappableResource {
    /// The description the texture was created from
    fn description(&self) -> &TextureDescription;
}

#[cfg(test)]
#[path = "texture_tests.rs"]
mod tests;
