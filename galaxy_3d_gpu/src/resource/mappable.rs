/// Mappable capability - host access modes for buffers and textures

use crate::error::{Error, Result};
use crate::layout::SubresourceLayout;
use crate::resource::DeviceResource;

/// Host access requested when mapping a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapMode {
    /// Host may read but not write. Staging resources only.
    Read,
    /// Host writes a region that fully replaces the resource contents on unmap.
    Write,
    /// Host may read and write. Staging resources only.
    ReadWrite,
}

impl MapMode {
    /// Returns true if the mapped region is readable by the host
    pub fn is_readable(self) -> bool {
        matches!(self, MapMode::Read | MapMode::ReadWrite)
    }

    /// Returns true if the mapped region is writable by the host
    pub fn is_writable(self) -> bool {
        matches!(self, MapMode::Write | MapMode::ReadWrite)
    }

    /// Returns true if the mode is only legal on staging resources
    pub fn requires_staging(self) -> bool {
        self.is_readable()
    }
}

/// Capability of a resource whose memory can be mapped by the host
///
/// Whether the resource was created with the staging usage flag is fixed at
/// creation time and reported through `is_staging`.
pub trait MappableResource: DeviceResource {
    /// Returns true if the resource was created with the staging usage flag
    fn is_staging(&self) -> bool;

    /// Layout a mapping of `subresource` exposes
    fn mapped_layout(&self, subresource: u32) -> Result<SubresourceLayout>;

    /// Check that `mode` is legal on this resource
    ///
    /// # Errors
    ///
    /// Returns `InvalidMapMode` for `Read`/`ReadWrite` on a non-staging resource.
    fn check_map_mode(&self, mode: MapMode) -> Result<()> {
        if mode.requires_staging() && !self.is_staging() {
            crate::gpu_bail!("galaxy3d::MappableResource",
                Error::InvalidMapMode { mode, resource: self.debug_name() });
        }
        Ok(())
    }
}

/// A live host mapping of one subresource
///
/// Returned by `GraphicsDevice::map`. The host pointer itself stays with the
/// backend; this value describes where the subresource sits and how it is
/// laid out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedResource {
    /// Debug name of the mapped resource
    pub resource_name: String,
    /// Access mode of the mapping
    pub mode: MapMode,
    /// Mapped subresource index
    pub subresource: u32,
    /// Byte layout of the mapped region
    pub layout: SubresourceLayout,
}

/// Validate a map request and compute the layout it will expose
///
/// Backends call this at the top of `GraphicsDevice::map`.
///
/// # Errors
///
/// Returns `InvalidMapMode` for read access to a non-staging resource and
/// `SubresourceOutOfRange` for an index past the resource's subresources.
pub fn validate_map_request(
    resource: &dyn MappableResource,
    mode: MapMode,
    subresource: u32,
) -> Result<MappedResource> {
    resource.check_map_mode(mode)?;
    let layout = resource.mapped_layout(subresource)?;

    crate::gpu_debug!("galaxy3d::MappableResource",
        "Mapping '{}' subresource {} as {:?} ({} bytes at offset {})",
        resource.debug_name(), subresource, mode, layout.size_in_bytes, layout.offset);

    Ok(MappedResource {
        resource_name: resource.debug_name(),
        mode,
        subresource,
        layout,
    })
}

#[cfg(test)]
#[path = "mappable_tests.rs"]
mod tests;
