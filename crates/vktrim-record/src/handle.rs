//! Typed handles for every tracked object category.
//! Opaque to the tracker -- the driver assigns these; we only compare and hash.

use serde::{Deserialize, Serialize};

macro_rules! define_handle {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash,
                 PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(u64);

        impl $name {
            /// The null/invalid handle.
            pub const fn null() -> Self {
                Self(0)
            }

            pub const fn from_raw(raw: u64) -> Self {
                Self(raw)
            }

            pub const fn as_raw(self) -> u64 {
                self.0
            }

            pub const fn is_null(self) -> bool {
                self.0 == 0
            }
        }
    };
}

define_handle!(InstanceHandle);
define_handle!(PhysicalDeviceHandle);
define_handle!(DeviceHandle);
define_handle!(QueueHandle);
define_handle!(CommandPoolHandle);
define_handle!(CommandBufferHandle);
define_handle!(DeviceMemoryHandle);
define_handle!(BufferHandle);
define_handle!(BufferViewHandle);
define_handle!(ImageHandle);
define_handle!(ImageViewHandle);
define_handle!(SamplerHandle);
define_handle!(ShaderModuleHandle);
define_handle!(PipelineCacheHandle);
define_handle!(PipelineHandle);
define_handle!(PipelineLayoutHandle);
define_handle!(RenderPassHandle);
define_handle!(FramebufferHandle);
define_handle!(DescriptorPoolHandle);
define_handle!(DescriptorSetLayoutHandle);
define_handle!(DescriptorSetHandle);
define_handle!(FenceHandle);
define_handle!(SemaphoreHandle);
define_handle!(EventHandle);
define_handle!(QueryPoolHandle);
define_handle!(SwapchainHandle);
