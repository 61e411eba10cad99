/// Vulkan fence - `Fence` implementation backed by a `vk::Fence`

use ash::vk;
use galaxy_3d_gpu::galaxy3d::resource::{DeviceResource, Fence, GraphicsDevice, ResourceBase};
use galaxy_3d_gpu::galaxy3d::{Error, Result};
use galaxy_3d_gpu::{gpu_err, gpu_error, gpu_trace};
use std::sync::Arc;

/// Fence signaled by queue submissions
///
/// Holds a shared reference to the owning `GraphicsDevice` (which owns the
/// `VkDevice`) next to the ash function table used to drive the fence, so
/// the native device outlives the fence handle.
pub struct VulkanFence {
    base: ResourceBase,
    device: ash::Device,
    fence: vk::Fence,
}

impl VulkanFence {
    /// Create a fence on `vk_device`
    ///
    /// # Arguments
    ///
    /// * `graphics_device` - Owning device, kept alive by the fence
    /// * `vk_device` - Ash device of `graphics_device`
    /// * `signaled` - Initial state
    pub fn new(graphics_device: Arc<dyn GraphicsDevice>, vk_device: ash::Device, signaled: bool) -> Result<Self> {
        let flags = if signaled { vk::FenceCreateFlags::SIGNALED } else { vk::FenceCreateFlags::empty() };
        let create_info = vk::FenceCreateInfo::default().flags(flags);

        let fence = unsafe {
            vk_device.create_fence(&create_info, None).map_err(|e| match e {
                vk::Result::ERROR_OUT_OF_HOST_MEMORY | vk::Result::ERROR_OUT_OF_DEVICE_MEMORY => {
                    gpu_err!("galaxy3d::vulkan", Error::OutOfMemory)
                }
                _ => gpu_err!("galaxy3d::vulkan", Error::BackendError(format!("Failed to create fence: {:?}", e))),
            })?
        };

        Ok(Self {
            base: ResourceBase::new(graphics_device),
            device: vk_device,
            fence,
        })
    }

    /// Native handle, for queue submissions
    pub fn handle(&self) -> vk::Fence {
        self.fence
    }

    /// Attach a debug label
    pub fn set_debug_name(&self, name: impl Into<String>) {
        self.base.set_debug_name(name);
    }
}

impl DeviceResource for VulkanFence {
    fn device(&self) -> &Arc<dyn GraphicsDevice> {
        self.base.device()
    }

    fn debug_name(&self) -> String {
        self.base.debug_name()
    }
}

impl Fence for VulkanFence {
    fn wait_for_signal_timeout(&self, timeout_ns: u64) -> bool {
        match unsafe { self.device.wait_for_fences(&[self.fence], true, timeout_ns) } {
            Ok(()) => true,
            Err(vk::Result::TIMEOUT) => {
                gpu_trace!("galaxy3d::vulkan", "Wait on fence '{}' timed out after {} ns", self.debug_name(), timeout_ns);
                false
            }
            Err(e) => {
                gpu_error!("galaxy3d::vulkan", "Failed to wait for fence '{}': {:?}", self.debug_name(), e);
                false
            }
        }
    }

    fn is_signaled(&self) -> bool {
        match unsafe { self.device.get_fence_status(self.fence) } {
            Ok(signaled) => signaled,
            Err(e) => {
                gpu_error!("galaxy3d::vulkan", "Failed to query fence '{}': {:?}", self.debug_name(), e);
                false
            }
        }
    }

    fn reset(&self) {
        if let Err(e) = unsafe { self.device.reset_fences(&[self.fence]) } {
            gpu_error!("galaxy3d::vulkan", "Failed to reset fence '{}': {:?}", self.debug_name(), e);
        }
    }
}

impl Drop for VulkanFence {
    fn drop(&mut self) {
        unsafe {
            self.device.destroy_fence(self.fence, None);
        }
    }
}
