//! Shader module, pipeline cache, pipeline layout, and pipeline object info.

use vktrim_record::handle::{
    DescriptorSetLayoutHandle, DeviceHandle, PipelineCacheHandle, PipelineHandle,
    PipelineLayoutHandle, RenderPassHandle, ShaderModuleHandle,
};
use vktrim_record::record::CallRecord;

use crate::registry::tracked_info;

#[derive(Debug, Clone, Default)]
pub struct ShaderModuleInfo {
    pub handle: ShaderModuleHandle,
    pub device: DeviceHandle,
    pub create_record: Option<CallRecord>,
}
tracked_info!(ShaderModuleInfo, ShaderModuleHandle);

#[derive(Debug, Clone, Default)]
pub struct PipelineCacheInfo {
    pub handle: PipelineCacheHandle,
    pub device: DeviceHandle,
    pub create_record: Option<CallRecord>,
}
tracked_info!(PipelineCacheInfo, PipelineCacheHandle);

#[derive(Debug, Clone, Default)]
pub struct PipelineLayoutInfo {
    pub handle: PipelineLayoutHandle,
    pub device: DeviceHandle,
    pub create_record: Option<CallRecord>,
    /// Descriptor-set layouts referenced at creation, in set order.
    pub set_layouts: Vec<DescriptorSetLayoutHandle>,
}
tracked_info!(PipelineLayoutInfo, PipelineLayoutHandle);

#[derive(Debug, Clone, Default)]
pub struct PipelineInfo {
    pub handle: PipelineHandle,
    pub device: DeviceHandle,
    pub create_record: Option<CallRecord>,
    pub layout: PipelineLayoutHandle,
    /// Null for compute pipelines.
    pub render_pass: RenderPassHandle,
    pub is_compute: bool,
}
tracked_info!(PipelineInfo, PipelineHandle);
