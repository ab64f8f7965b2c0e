//! Render pass and framebuffer object info.

use vktrim_record::handle::{
    DeviceHandle, FramebufferHandle, ImageViewHandle, RenderPassHandle,
};
use vktrim_record::record::CallRecord;

use crate::registry::tracked_info;

#[derive(Debug, Clone, Default)]
pub struct RenderPassInfo {
    pub handle: RenderPassHandle,
    pub device: DeviceHandle,
    pub create_record: Option<CallRecord>,
}
tracked_info!(RenderPassInfo, RenderPassHandle);

#[derive(Debug, Clone, Default)]
pub struct FramebufferInfo {
    pub handle: FramebufferHandle,
    pub device: DeviceHandle,
    pub render_pass: RenderPassHandle,
    pub create_record: Option<CallRecord>,
    /// Attachment views from creation, in attachment order.
    pub attachments: Vec<ImageViewHandle>,
}
tracked_info!(FramebufferInfo, FramebufferHandle);
