//! Resource ownership model
//!
//! Contracts every concrete backend resource satisfies: a shared reference
//! to the owning device, the optional mappable capability, and fences.

pub mod device;
pub mod device_resource;
pub mod mappable;
pub mod texture;
pub mod buffer;
pub mod fence;

pub use device::GraphicsDevice;
pub use device_resource::{DeviceResource, ResourceBase};
pub use mappable::{MapMode, MappableResource, MappedResource, validate_map_request};
pub use texture::{Texture, TextureDescription, TextureType, TextureUsage};
pub use buffer::{Buffer, BufferDescription, BufferUsage};
pub use fence::{Fence, FenceState, HostFence};

// Mock device and resources for tests (no GPU required)
#[cfg(test)]
pub mod mock_device;
