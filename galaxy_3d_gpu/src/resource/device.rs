/// GraphicsDevice trait - the contract the owning device exposes to its resources

use crate::config::GraphicsDeviceOptions;
use crate::error::Result;
use crate::resource::{MapMode, MappableResource, MappedResource};

/// Graphics device trait
///
/// Implemented by backend devices (Vulkan, Direct3D, Metal, OpenGL). The
/// core never creates a device; it only holds shared references to one
/// (`Arc<dyn GraphicsDevice>`) from every resource the device created.
pub trait GraphicsDevice: Send + Sync {
    /// Short backend name ("vulkan", "d3d11", ...)
    fn backend_name(&self) -> &str;

    /// Options the device was created with
    fn options(&self) -> &GraphicsDeviceOptions;

    /// Map a subresource of a mappable resource into host memory
    ///
    /// Backends must call `validate_map_request` before touching memory so
    /// that read access to non-staging resources is rejected uniformly.
    ///
    /// # Arguments
    ///
    /// * `resource` - Buffer or texture to map
    /// * `mode` - Requested host access
    /// * `subresource` - Subresource index (always 0 for buffers)
    fn map(
        &self,
        resource: &dyn MappableResource,
        mode: MapMode,
        subresource: u32,
    ) -> Result<MappedResource>;

    /// Release a mapping previously returned by `map`
    ///
    /// For `MapMode::Write` mappings this is where the written region
    /// replaces the resource contents.
    fn unmap(&self, resource: &dyn MappableResource, subresource: u32) -> Result<()>;
}
