/// Translation of the core format vocabulary into Vulkan enums and flags

use ash::vk;
use galaxy_3d_gpu::galaxy3d::format::{PixelFormat, SampleCount, ShaderDataType};
use galaxy_3d_gpu::galaxy3d::resource::{BufferUsage, TextureDescription, TextureUsage};
use galaxy_3d_gpu::galaxy3d::{Error, Result};
use galaxy_3d_gpu::gpu_bail;

/// Vulkan format storing texels of `format`
pub fn pixel_format_to_vk(format: PixelFormat) -> vk::Format {
    match format {
        PixelFormat::R8_UNorm => vk::Format::R8_UNORM,
        PixelFormat::R8_SNorm => vk::Format::R8_SNORM,
        PixelFormat::R8_UInt => vk::Format::R8_UINT,
        PixelFormat::R8_SInt => vk::Format::R8_SINT,

        PixelFormat::R16_UNorm => vk::Format::R16_UNORM,
        PixelFormat::R16_SNorm => vk::Format::R16_SNORM,
        PixelFormat::R16_UInt => vk::Format::R16_UINT,
        PixelFormat::R16_SInt => vk::Format::R16_SINT,
        PixelFormat::R16_Float => vk::Format::R16_SFLOAT,

        PixelFormat::R32_UInt => vk::Format::R32_UINT,
        PixelFormat::R32_SInt => vk::Format::R32_SINT,
        PixelFormat::R32_Float => vk::Format::R32_SFLOAT,

        PixelFormat::R8_G8_UNorm => vk::Format::R8G8_UNORM,
        PixelFormat::R8_G8_SNorm => vk::Format::R8G8_SNORM,
        PixelFormat::R8_G8_UInt => vk::Format::R8G8_UINT,
        PixelFormat::R8_G8_SInt => vk::Format::R8G8_SINT,

        PixelFormat::R16_G16_UNorm => vk::Format::R16G16_UNORM,
        PixelFormat::R16_G16_SNorm => vk::Format::R16G16_SNORM,
        PixelFormat::R16_G16_UInt => vk::Format::R16G16_UINT,
        PixelFormat::R16_G16_SInt => vk::Format::R16G16_SINT,
        PixelFormat::R16_G16_Float => vk::Format::R16G16_SFLOAT,

        PixelFormat::R32_G32_UInt => vk::Format::R32G32_UINT,
        PixelFormat::R32_G32_SInt => vk::Format::R32G32_SINT,
        PixelFormat::R32_G32_Float => vk::Format::R32G32_SFLOAT,

        PixelFormat::R8_G8_B8_A8_UNorm => vk::Format::R8G8B8A8_UNORM,
        PixelFormat::R8_G8_B8_A8_UNorm_SRgb => vk::Format::R8G8B8A8_SRGB,
        PixelFormat::R8_G8_B8_A8_SNorm => vk::Format::R8G8B8A8_SNORM,
        PixelFormat::R8_G8_B8_A8_UInt => vk::Format::R8G8B8A8_UINT,
        PixelFormat::R8_G8_B8_A8_SInt => vk::Format::R8G8B8A8_SINT,

        PixelFormat::B8_G8_R8_A8_UNorm => vk::Format::B8G8R8A8_UNORM,
        PixelFormat::B8_G8_R8_A8_UNorm_SRgb => vk::Format::B8G8R8A8_SRGB,

        // Vulkan names packed formats from the most significant bit down
        PixelFormat::R10_G10_B10_A2_UNorm => vk::Format::A2B10G10R10_UNORM_PACK32,
        PixelFormat::R10_G10_B10_A2_UInt => vk::Format::A2B10G10R10_UINT_PACK32,
        PixelFormat::R11_G11_B10_Float => vk::Format::B10G11R11_UFLOAT_PACK32,

        PixelFormat::R16_G16_B16_A16_UNorm => vk::Format::R16G16B16A16_UNORM,
        PixelFormat::R16_G16_B16_A16_SNorm => vk::Format::R16G16B16A16_SNORM,
        PixelFormat::R16_G16_B16_A16_UInt => vk::Format::R16G16B16A16_UINT,
        PixelFormat::R16_G16_B16_A16_SInt => vk::Format::R16G16B16A16_SINT,
        PixelFormat::R16_G16_B16_A16_Float => vk::Format::R16G16B16A16_SFLOAT,

        PixelFormat::R32_G32_B32_A32_UInt => vk::Format::R32G32B32A32_UINT,
        PixelFormat::R32_G32_B32_A32_SInt => vk::Format::R32G32B32A32_SINT,
        PixelFormat::R32_G32_B32_A32_Float => vk::Format::R32G32B32A32_SFLOAT,

        PixelFormat::D24_UNorm_S8_UInt => vk::Format::D24_UNORM_S8_UINT,
        PixelFormat::D32_Float_S8_UInt => vk::Format::D32_SFLOAT_S8_UINT,

        PixelFormat::BC1_Rgb_UNorm => vk::Format::BC1_RGB_UNORM_BLOCK,
        PixelFormat::BC1_Rgb_UNorm_SRgb => vk::Format::BC1_RGB_SRGB_BLOCK,
        PixelFormat::BC1_Rgba_UNorm => vk::Format::BC1_RGBA_UNORM_BLOCK,
        PixelFormat::BC1_Rgba_UNorm_SRgb => vk::Format::BC1_RGBA_SRGB_BLOCK,
        PixelFormat::BC2_UNorm => vk::Format::BC2_UNORM_BLOCK,
        PixelFormat::BC2_UNorm_SRgb => vk::Format::BC2_SRGB_BLOCK,
        PixelFormat::BC3_UNorm => vk::Format::BC3_UNORM_BLOCK,
        PixelFormat::BC3_UNorm_SRgb => vk::Format::BC3_SRGB_BLOCK,
        PixelFormat::BC4_UNorm => vk::Format::BC4_UNORM_BLOCK,
        PixelFormat::BC4_SNorm => vk::Format::BC4_SNORM_BLOCK,
        PixelFormat::BC5_UNorm => vk::Format::BC5_UNORM_BLOCK,
        PixelFormat::BC5_SNorm => vk::Format::BC5_SNORM_BLOCK,
        PixelFormat::BC7_UNorm => vk::Format::BC7_UNORM_BLOCK,
        PixelFormat::BC7_UNorm_SRgb => vk::Format::BC7_SRGB_BLOCK,

        PixelFormat::ETC2_R8_G8_B8_UNorm => vk::Format::ETC2_R8G8B8_UNORM_BLOCK,
        PixelFormat::ETC2_R8_G8_B8_A1_UNorm => vk::Format::ETC2_R8G8B8A1_UNORM_BLOCK,
        PixelFormat::ETC2_R8_G8_B8_A8_UNorm => vk::Format::ETC2_R8G8B8A8_UNORM_BLOCK,
    }
}

/// Vulkan format of `format` used as a depth/stencil attachment
///
/// `R16_UNorm` and `R32_Float` are promoted to `D16_UNORM` / `D32_SFLOAT`;
/// the combined depth/stencil formats translate as-is.
///
/// # Errors
///
/// Returns `InvalidDescription` if `format` is not a depth/stencil format.
pub fn depth_format_to_vk(format: PixelFormat) -> Result<vk::Format> {
    match format {
        PixelFormat::R16_UNorm => Ok(vk::Format::D16_UNORM),
        PixelFormat::R32_Float => Ok(vk::Format::D32_SFLOAT),
        PixelFormat::D24_UNorm_S8_UInt | PixelFormat::D32_Float_S8_UInt => Ok(pixel_format_to_vk(format)),
        _ => gpu_bail!("galaxy3d::vulkan",
            Error::InvalidDescription(format!("{:?} cannot be used as a depth/stencil format", format))),
    }
}

/// Vulkan format of the image created from `description`
///
/// Depth/stencil usage selects the depth variant of the format.
pub fn texture_format_to_vk(description: &TextureDescription) -> Result<vk::Format> {
    if description.usage.contains(TextureUsage::DEPTH_STENCIL) {
        depth_format_to_vk(description.format)
    } else {
        Ok(pixel_format_to_vk(description.format))
    }
}

/// Core format matching a Vulkan format (None for formats outside the catalog)
///
/// Depth-only formats map back to the color formats they are promoted from.
pub fn vk_to_pixel_format(format: vk::Format) -> Option<PixelFormat> {
    match format {
        vk::Format::D16_UNORM => Some(PixelFormat::R16_UNorm),
        vk::Format::D32_SFLOAT => Some(PixelFormat::R32_Float),
        _ => PixelFormat::ALL
            .iter()
            .copied()
            .find(|candidate| pixel_format_to_vk(*candidate) == format),
    }
}

/// Vertex attribute format of a shader data type
pub fn shader_data_type_to_vk(data_type: ShaderDataType) -> vk::Format {
    match data_type {
        ShaderDataType::Float1 => vk::Format::R32_SFLOAT,
        ShaderDataType::Float2 => vk::Format::R32G32_SFLOAT,
        ShaderDataType::Float3 => vk::Format::R32G32B32_SFLOAT,
        ShaderDataType::Float4 => vk::Format::R32G32B32A32_SFLOAT,

        ShaderDataType::Byte2_Norm => vk::Format::R8G8_UNORM,
        ShaderDataType::Byte2 => vk::Format::R8G8_UINT,
        ShaderDataType::Byte4_Norm => vk::Format::R8G8B8A8_UNORM,
        ShaderDataType::Byte4 => vk::Format::R8G8B8A8_UINT,

        ShaderDataType::SByte2_Norm => vk::Format::R8G8_SNORM,
        ShaderDataType::SByte2 => vk::Format::R8G8_SINT,
        ShaderDataType::SByte4_Norm => vk::Format::R8G8B8A8_SNORM,
        ShaderDataType::SByte4 => vk::Format::R8G8B8A8_SINT,

        ShaderDataType::UShort2_Norm => vk::Format::R16G16_UNORM,
        ShaderDataType::UShort2 => vk::Format::R16G16_UINT,
        ShaderDataType::UShort4_Norm => vk::Format::R16G16B16A16_UNORM,
        ShaderDataType::UShort4 => vk::Format::R16G16B16A16_UINT,

        ShaderDataType::Short2_Norm => vk::Format::R16G16_SNORM,
        ShaderDataType::Short2 => vk::Format::R16G16_SINT,
        ShaderDataType::Short4_Norm => vk::Format::R16G16B16A16_SNORM,
        ShaderDataType::Short4 => vk::Format::R16G16B16A16_SINT,

        ShaderDataType::Int1 => vk::Format::R32_SINT,
        ShaderDataType::Int2 => vk::Format::R32G32_SINT,
        ShaderDataType::Int3 => vk::Format::R32G32B32_SINT,
        ShaderDataType::Int4 => vk::Format::R32G32B32A32_SINT,

        ShaderDataType::UInt1 => vk::Format::R32_UINT,
        ShaderDataType::UInt2 => vk::Format::R32G32_UINT,
        ShaderDataType::UInt3 => vk::Format::R32G32B32_UINT,
        ShaderDataType::UInt4 => vk::Format::R32G32B32A32_UINT,

        ShaderDataType::Half1 => vk::Format::R16_SFLOAT,
        ShaderDataType::Half2 => vk::Format::R16G16_SFLOAT,
        ShaderDataType::Half4 => vk::Format::R16G16B16A16_SFLOAT,
    }
}

pub fn sample_count_to_vk(count: SampleCount) -> vk::SampleCountFlags {
    match count {
        SampleCount::X1 => vk::SampleCountFlags::TYPE_1,
        SampleCount::X2 => vk::SampleCountFlags::TYPE_2,
        SampleCount::X4 => vk::SampleCountFlags::TYPE_4,
        SampleCount::X8 => vk::SampleCountFlags::TYPE_8,
        SampleCount::X16 => vk::SampleCountFlags::TYPE_16,
        SampleCount::X32 => vk::SampleCountFlags::TYPE_32,
    }
}

/// Image usage flags for a texture
///
/// Every texture can be a transfer source and destination; staging textures
/// are transfer-only.
pub fn texture_usage_to_vk(usage: TextureUsage) -> vk::ImageUsageFlags {
    let mut flags = vk::ImageUsageFlags::TRANSFER_SRC | vk::ImageUsageFlags::TRANSFER_DST;
    if usage.contains(TextureUsage::STAGING) {
        return flags;
    }
    if usage.contains(TextureUsage::SAMPLED) {
        flags |= vk::ImageUsageFlags::SAMPLED;
    }
    if usage.contains(TextureUsage::STORAGE) {
        flags |= vk::ImageUsageFlags::STORAGE;
    }
    if usage.contains(TextureUsage::RENDER_TARGET) {
        flags |= vk::ImageUsageFlags::COLOR_ATTACHMENT;
    }
    if usage.contains(TextureUsage::DEPTH_STENCIL) {
        flags |= vk::ImageUsageFlags::DEPTH_STENCIL_ATTACHMENT;
    }
    flags
}

/// Buffer usage flags for a buffer
pub fn buffer_usage_to_vk(usage: BufferUsage) -> vk::BufferUsageFlags {
    let mut flags = vk::BufferUsageFlags::TRANSFER_SRC | vk::BufferUsageFlags::TRANSFER_DST;
    if usage.contains(BufferUsage::VERTEX) {
        flags |= vk::BufferUsageFlags::VERTEX_BUFFER;
    }
    if usage.contains(BufferUsage::INDEX) {
        flags |= vk::BufferUsageFlags::INDEX_BUFFER;
    }
    if usage.contains(BufferUsage::UNIFORM) {
        flags |= vk::BufferUsageFlags::UNIFORM_BUFFER;
    }
    if usage.intersects(BufferUsage::STRUCTURED_READ_ONLY | BufferUsage::STRUCTURED_READ_WRITE) {
        flags |= vk::BufferUsageFlags::STORAGE_BUFFER;
    }
    if usage.contains(BufferUsage::INDIRECT) {
        flags |= vk::BufferUsageFlags::INDIRECT_BUFFER;
    }
    flags
}

#[cfg(test)]
#[path = "vulkan_format_tests.rs"]
mod tests;
