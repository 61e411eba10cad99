/// Mock device for unit tests (no GPU required)
///
/// Records map/unmap calls and hands out textures and buffers that embed a
/// real `ResourceBase`, so ownership and capability rules can be tested
/// without a backend.

use std::sync::{Arc, Mutex};

use crate::config::GraphicsDeviceOptions;
use crate::error::Result;
use crate::layout::{self, SubresourceLayout};
use crate::resource::{
    Buffer, BufferDescription, DeviceResource, GraphicsDevice, MapMode, MappableResource,
    MappedResource, ResourceBase, Texture, TextureDescription, validate_map_request,
};

// ============================================================================
// Mock GraphicsDevice
// ============================================================================

#[derive(Debug, Default)]
pub struct MockGraphicsDevice {
    pub options: GraphicsDeviceOptions,
    pub calls: Mutex<Vec<String>>,
}

impl MockGraphicsDevice {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl GraphicsDevice for MockGraphicsDevice {
    fn backend_name(&self) -> &str {
        "mock"
    }

    fn options(&self) -> &GraphicsDeviceOptions {
        &self.options
    }

    fn map(
        &self,
        resource: &dyn MappableResource,
        mode: MapMode,
        subresource: u32,
    ) -> Result<MappedResource> {
        let mapped = validate_map_request(resource, mode, subresource)?;
        self.calls.lock().unwrap().push(format!("map {} {}", mapped.resource_name, subresource));
        Ok(mapped)
    }

    fn unmap(&self, resource: &dyn MappableResource, subresource: u32) -> Result<()> {
        self.calls.lock().unwrap().push(format!("unmap {} {}", resource.debug_name(), subresource));
        Ok(())
    }
}

// ============================================================================
// Mock Texture
// ============================================================================

pub struct MockTexture {
    pub base: ResourceBase,
    pub description: TextureDescription,
}

impl MockTexture {
    pub fn new(device: Arc<dyn GraphicsDevice>, description: TextureDescription, name: &str) -> Self {
        let base = ResourceBase::new(device);
        base.set_debug_name(name);
        Self { base, description }
    }
}

impl DeviceResource for MockTexture {
    fn device(&self) -> &Arc<dyn GraphicsDevice> {
        self.base.device()
    }

    fn debug_name(&self) -> String {
        self.base.debug_name()
    }

    fn as_mappable(&self) -> Option<&dyn MappableResource> {
        Some(self)
    }
}

impl MappableResource for MockTexture {
    fn is_staging(&self) -> bool {
        self.description.is_staging()
    }

    fn mapped_layout(&self, subresource: u32) -> Result<SubresourceLayout> {
        layout::mapped_layout(&self.description, subresource)
    }
}

impl Texture for MockTexture {
    fn description(&self) -> &TextureDescription {
        &self.description
    }
}

// ============================================================================
// Mock Buffer
// ============================================================================

pub struct MockBuffer {
    pub base: ResourceBase,
    pub description: BufferDescription,
}

impl MockBuffer {
    pub fn new(device: Arc<dyn GraphicsDevice>, description: BufferDescription, name: &str) -> Self {
        let base = ResourceBase::new(device);
        base.set_debug_name(name);
        Self { base, description }
    }
}

impl DeviceResource for MockBuffer {
    fn device(&self) -> &Arc<dyn GraphicsDevice> {
        self.base.device()
    }

    fn debug_name(&self) -> String {
        self.base.debug_name()
    }

    fn as_mappable(&self) -> Option<&dyn MappableResource> {
        Some(self)
    }
}

impl MappableResource for MockBuffer {
    fn is_staging(&self) -> bool {
        self.description.is_staging()
    }

    fn mapped_layout(&self, subresource: u32) -> Result<SubresourceLayout> {
        self.description.mapped_layout(subresource)
    }
}

impl Buffer for MockBuffer {
    fn description(&self) -> &BufferDescription {
        &self.description
    }
}

// ============================================================================
// Plain resource (no mappable capability)
// ============================================================================

pub struct MockPlainResource {
    pub base: ResourceBase,
}

impl MockPlainResource {
    pub fn new(device: Arc<dyn GraphicsDevice>) -> Self {
        Self { base: ResourceBase::new(device) }
    }
}

impl DeviceResource for MockPlainResource {
    fn device(&self) -> &Arc<dyn GraphicsDevice> {
        self.base.device()
    }
}
