/// DeviceResource trait and the shared device handle every resource embeds

use std::fmt;
use std::sync::{Arc, RwLock};

use crate::resource::{GraphicsDevice, MappableResource};

/// Root contract of every GPU-backed object
///
/// A resource holds exactly one shared reference to the device that created
/// it. The device stays alive at least as long as any resource referencing
/// it; the device does not own its resources.
///
/// Capabilities are queried instead of inherited: a resource that can be
/// mapped overrides `as_mappable`.
pub trait DeviceResource: Send + Sync {
    /// The owning device
    fn device(&self) -> &Arc<dyn GraphicsDevice>;

    /// Human-readable label, empty unless a backend attached one
    fn debug_name(&self) -> String {
        String::new()
    }

    /// Mappable view of this resource (None for resources that cannot be mapped)
    fn as_mappable(&self) -> Option<&dyn MappableResource> {
        None
    }
}

/// Device reference and debug label shared by concrete resources
///
/// Concrete backend resources embed a `ResourceBase` and forward the
/// `DeviceResource` methods to it. The device reference is acquired in `new`
/// and released when the base is dropped.
pub struct ResourceBase {
    device: Arc<dyn GraphicsDevice>,
    debug_name: RwLock<String>,
}

impl ResourceBase {
    /// Take a shared reference to `device`
    pub fn new(device: Arc<dyn GraphicsDevice>) -> Self {
        crate::gpu_trace!("galaxy3d::DeviceResource",
            "Acquired {} device reference ({} holders)",
            device.backend_name(), Arc::strong_count(&device));
        Self {
            device,
            debug_name: RwLock::new(String::new()),
        }
    }

    /// The owning device
    pub fn device(&self) -> &Arc<dyn GraphicsDevice> {
        &self.device
    }

    /// Current debug label (empty when unset)
    pub fn debug_name(&self) -> String {
        self.debug_name
            .read()
            .map(|name| name.clone())
            .unwrap_or_default()
    }

    /// Attach a debug label
    ///
    /// Backends call this after forwarding the label to the native API.
    pub fn set_debug_name(&self, name: impl Into<String>) {
        if let Ok(mut lock) = self.debug_name.write() {
            *lock = name.into();
        }
    }
}

impl fmt::Debug for ResourceBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceBase")
            .field("backend", &self.device.backend_name())
            .field("debug_name", &self.debug_name())
            .finish()
    }
}

impl Drop for ResourceBase {
    fn drop(&mut self) {
        crate::gpu_trace!("galaxy3d::DeviceResource",
            "Releasing {} device reference '{}'",
            self.device.backend_name(), self.debug_name());
    }
}

#[cfg(test)]
#[path = "device_resource_tests.rs"]
mod tests;
