/// Fence trait - host/device synchronization - and a host-signaled implementation

use std::sync::{Arc, Condvar, Mutex};
use std::time::{Duration, Instant};

use crate::resource::{DeviceResource, GraphicsDevice, ResourceBase};

/// Binary state of a fence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FenceState {
    Unsignaled,
    Signaled,
}

/// Fence resource trait
///
/// A fence is signaled by the completion of device work (delivered by the
/// backend) and returned to `Unsignaled` by `reset`.
///
/// `wait_for_signal_timeout` is the only blocking call in the core; pick
/// the waiting thread accordingly.
pub trait Fence: DeviceResource {
    /// Block until the fence is signaled or `timeout_ns` elapses
    ///
    /// Returns true iff the fence was observed signaled before the deadline.
    /// A timeout of 0 only checks the current state.
    fn wait_for_signal_timeout(&self, timeout_ns: u64) -> bool;

    /// Block until the fence is signaled
    fn wait_for_signal(&self) -> bool {
        self.wait_for_signal_timeout(u64::MAX)
    }

    /// Current state, without blocking
    fn is_signaled(&self) -> bool;

    /// Return the fence to `Unsignaled` (no-op if already unsignaled)
    fn reset(&self);
}

/// Fence signaled from host code
///
/// Stands in for device-side completion in software backends and tests:
/// whoever owns the work calls `signal()` when it finishes.
pub struct HostFence {
    base: ResourceBase,
    state: Mutex<FenceState>,
    signaled: Condvar,
}

impl HostFence {
    /// Create a fence, initially signaled or not
    pub fn new(device: Arc<dyn GraphicsDevice>, signaled: bool) -> Self {
        let initial = if signaled { FenceState::Signaled } else { FenceState::Unsignaled };
        Self {
            base: ResourceBase::new(device),
            state: Mutex::new(initial),
            signaled: Condvar::new(),
        }
    }

    /// Attach a debug label
    pub fn set_debug_name(&self, name: impl Into<String>) {
        self.base.set_debug_name(name);
    }

    /// Mark the fence signaled and wake every waiter
    pub fn signal(&self) {
        let mut state = self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        *state = FenceState::Signaled;
        self.signaled.notify_all();
    }

    /// Current state
    pub fn state(&self) -> FenceState {
        *self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl DeviceResource for HostFence {
    fn device(&self) -> &Arc<dyn GraphicsDevice> {
        self.base.device()
    }

    fn debug_name(&self) -> String {
        self.base.debug_name()
    }
}

impl Fence for HostFence {
    fn wait_for_signal_timeout(&self, timeout_ns: u64) -> bool {
        let mut state = self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if *state == FenceState::Signaled {
            return true;
        }
        if timeout_ns == 0 {
            return false;
        }

        // None means the deadline is past what Instant can represent: wait without one
        let deadline = Instant::now().checked_add(Duration::from_nanos(timeout_ns));

        while *state != FenceState::Signaled {
            match deadline {
                Some(deadline) => {
                    let now = Instant::now();
                    if now >= deadline {
                        crate::gpu_trace!("galaxy3d::HostFence",
                            "Wait on '{}' timed out after {} ns", self.debug_name(), timeout_ns);
                        return false;
                    }
                    state = match self.signaled.wait_timeout(state, deadline - now) {
                        Ok((guard, _)) => guard,
                        Err(poisoned) => poisoned.into_inner().0,
                    };
                }
                None => {
                    state = self.signaled
                        .wait(state)
                        .unwrap_or_else(|poisoned| poisoned.into_inner());
                }
            }
        }
        true
    }

    fn is_signaled(&self) -> bool {
        self.state() == FenceState::Signaled
    }

    fn reset(&self) {
        let mut state = self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        *state = FenceState::Unsignaled;
    }
}

#[cfg(test)]
#[path = "fence_tests.rs"]
mod tests;
