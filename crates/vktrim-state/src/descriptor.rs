//! Descriptor pool, descriptor-set layout, and descriptor set object info.
//!
//! Descriptor sets are the deepest ownership graph the tracker manages:
//! each set owns a write-entry array and a copy-entry array, and each
//! write entry owns up to three further arrays (image infos, buffer
//! infos, texel-buffer views). Duplication and release both recurse the
//! whole graph; deriving `Clone` keeps the two paths from drifting apart.

use vktrim_record::handle::{
    BufferHandle, BufferViewHandle, DescriptorPoolHandle, DescriptorSetHandle,
    DescriptorSetLayoutHandle, DeviceHandle, ImageViewHandle, SamplerHandle,
};
use vktrim_record::record::CallRecord;

use crate::registry::tracked_info;

/// One binding slot recorded from descriptor-set-layout creation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutBinding {
    pub binding: u32,
    pub descriptor_type: i32,
    pub descriptor_count: u32,
    pub stage_flags: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DescriptorImageInfo {
    pub sampler: SamplerHandle,
    pub image_view: ImageViewHandle,
    /// Raw VkImageLayout value.
    pub image_layout: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DescriptorBufferInfo {
    pub buffer: BufferHandle,
    pub offset: u64,
    pub range: u64,
}

/// One pending write-update entry. At most one of the three payload
/// vectors is populated, selected by `descriptor_type`; the descriptor
/// count is the populated vector's length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteDescriptorEntry {
    pub dst_binding: u32,
    pub dst_array_element: u32,
    pub descriptor_type: i32,
    pub image_infos: Vec<DescriptorImageInfo>,
    pub buffer_infos: Vec<DescriptorBufferInfo>,
    pub texel_buffer_views: Vec<BufferViewHandle>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyDescriptorEntry {
    pub src_set: DescriptorSetHandle,
    pub src_binding: u32,
    pub src_array_element: u32,
    pub dst_binding: u32,
    pub dst_array_element: u32,
    pub descriptor_count: u32,
}

#[derive(Debug, Clone, Default)]
pub struct DescriptorPoolInfo {
    pub handle: DescriptorPoolHandle,
    pub device: DeviceHandle,
    pub create_record: Option<CallRecord>,
    pub max_sets: u32,
}
tracked_info!(DescriptorPoolInfo, DescriptorPoolHandle);

#[derive(Debug, Clone, Default)]
pub struct DescriptorSetLayoutInfo {
    pub handle: DescriptorSetLayoutHandle,
    pub device: DeviceHandle,
    pub create_record: Option<CallRecord>,
    /// Binding slots from creation, in declaration order.
    pub bindings: Vec<LayoutBinding>,
}
tracked_info!(DescriptorSetLayoutInfo, DescriptorSetLayoutHandle);

#[derive(Debug, Clone, Default)]
pub struct DescriptorSetInfo {
    pub handle: DescriptorSetHandle,
    pub device: DeviceHandle,
    pub pool: DescriptorPoolHandle,
    pub layout: DescriptorSetLayoutHandle,
    /// Writes/copies needed to rebuild the set's current contents.
    /// Updates observed for the same binding overwrite in place.
    pub writes: Vec<WriteDescriptorEntry>,
    pub copies: Vec<CopyDescriptorEntry>,
}
tracked_info!(DescriptorSetInfo, DescriptorSetHandle);
