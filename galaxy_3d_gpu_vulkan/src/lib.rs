/*!
# Galaxy 3D GPU - Vulkan Backend Vocabulary

Vulkan adapter for the Galaxy 3D GPU core.

This crate translates the core format vocabulary (`PixelFormat`,
`ShaderDataType`, `SampleCount`, usage flags) into Vulkan enums and flags
using the Ash bindings, and provides a `vk::Fence`-backed implementation of
the core `Fence` trait.
*/

mod vulkan_format;
mod vulkan_fence;

pub use vulkan_fence::VulkanFence;
pub use vulkan_format::{
    buffer_usage_to_vk, depth_format_to_vk, pixel_format_to_vk, sample_count_to_vk,
    shader_data_type_to_vk, texture_format_to_vk, texture_usage_to_vk, vk_to_pixel_format,
};

// Main galaxy3d namespace module
pub mod galaxy3d {
    pub use crate::vulkan_fence::VulkanFence;

    // Format and usage translation
    pub mod format {
        pub use crate::vulkan_format::*;
    }
}
