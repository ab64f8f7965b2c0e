//! Image, image-view, sampler, and swapchain object info.

use vktrim_record::handle::{
    DeviceHandle, DeviceMemoryHandle, ImageHandle, ImageViewHandle, SamplerHandle, SwapchainHandle,
};
use vktrim_record::record::CallRecord;

use crate::registry::tracked_info;

#[derive(Debug, Clone, Default)]
pub struct ImageInfo {
    pub handle: ImageHandle,
    pub device: DeviceHandle,
    pub create_record: Option<CallRecord>,
    pub bind_memory_record: Option<CallRecord>,
    pub bound_memory: DeviceMemoryHandle,
    pub bound_offset: u64,
    /// Raw VkImageLayout; authoritative state, updated at submission time
    /// from the pending transition cache.
    pub layout: u32,
    pub access_mask: u32,
    pub aspect_mask: u32,
    /// True for images owned by a swapchain rather than the application.
    pub swapchain_owned: bool,
}
tracked_info!(ImageInfo, ImageHandle);

#[derive(Debug, Clone, Default)]
pub struct ImageViewInfo {
    pub handle: ImageViewHandle,
    pub device: DeviceHandle,
    pub image: ImageHandle,
    pub create_record: Option<CallRecord>,
}
tracked_info!(ImageViewInfo, ImageViewHandle);

#[derive(Debug, Clone, Default)]
pub struct SamplerInfo {
    pub handle: SamplerHandle,
    pub device: DeviceHandle,
    pub create_record: Option<CallRecord>,
}
tracked_info!(SamplerInfo, SamplerHandle);

/// Swapchains carry two ancillary query records in addition to creation:
/// the image-count query and the images query. Each is independently
/// optional and independently duplicated/released.
#[derive(Debug, Clone, Default)]
pub struct SwapchainInfo {
    pub handle: SwapchainHandle,
    pub device: DeviceHandle,
    pub create_record: Option<CallRecord>,
    /// vkGetSwapchainImagesKHR with a null image array (count query).
    pub image_count_record: Option<CallRecord>,
    /// vkGetSwapchainImagesKHR retrieving the image handles.
    pub get_images_record: Option<CallRecord>,
}
tracked_info!(SwapchainInfo, SwapchainHandle);
