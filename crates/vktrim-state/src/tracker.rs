//! The aggregate state tracker: one registry per category, the ordered
//! per-command-buffer call log, the transition caches, and the deep
//! clone used to open a trim window.
//!
//! Registries and the call log are not internally synchronized (every
//! mutating method takes `&mut self`; the dispatch shim serializes
//! access per tracker). The transition caches are lock-striped DashMaps
//! and take `&self`, since barrier recording happens from whichever
//! application thread holds the command buffer.

use std::collections::HashMap;

use dashmap::DashMap;
use tracing::debug;

use vktrim_record::handle::{
    BufferHandle, BufferViewHandle, CommandBufferHandle, CommandPoolHandle,
    DescriptorPoolHandle, DescriptorSetHandle, DescriptorSetLayoutHandle, DeviceHandle,
    DeviceMemoryHandle, EventHandle, FenceHandle, FramebufferHandle, ImageHandle,
    ImageViewHandle, InstanceHandle, PhysicalDeviceHandle, PipelineCacheHandle,
    PipelineHandle, PipelineLayoutHandle, QueryPoolHandle, QueueHandle, RenderPassHandle,
    SamplerHandle, SemaphoreHandle, ShaderModuleHandle, SwapchainHandle,
};
use vktrim_record::record::CallRecord;
use vktrim_record::transition::{BufferTransition, ImageTransition};

use crate::command::{CommandBufferInfo, CommandPoolInfo};
use crate::config::TrackerConfig;
use crate::descriptor::{DescriptorPoolInfo, DescriptorSetInfo, DescriptorSetLayoutInfo};
use crate::device::{DeviceInfo, InstanceInfo, PhysicalDeviceInfo, QueueInfo};
use crate::image::{ImageInfo, ImageViewInfo, SamplerInfo, SwapchainInfo};
use crate::memory::{BufferInfo, BufferViewInfo, DeviceMemoryInfo};
use crate::pipeline::{PipelineCacheInfo, PipelineInfo, PipelineLayoutInfo, ShaderModuleInfo};
use crate::registry::Registry;
use crate::renderpass::{FramebufferInfo, RenderPassInfo};
use crate::sync::{EventInfo, FenceInfo, QueryPoolInfo, SemaphoreInfo};

/// Live-object registry for every tracked category.
///
/// `Clone` is the trim snapshot: a deep, storage-independent duplicate.
/// Scalar fields copy by value, every owned call record is
/// byte-duplicated at its reported size, and every owned array
/// (including the descriptor-set write-entry sub-arrays) is duplicated
/// element-wise into fresh storage. No allocation is shared between
/// source and clone; either side is independently destructible.
#[derive(Debug, Clone, Default)]
pub struct StateTracker {
    ordered_image_creation: bool,

    instances: Registry<InstanceInfo>,
    physical_devices: Registry<PhysicalDeviceInfo>,
    devices: Registry<DeviceInfo>,
    queues: Registry<QueueInfo>,
    command_pools: Registry<CommandPoolInfo>,
    command_buffers: Registry<CommandBufferInfo>,
    device_memories: Registry<DeviceMemoryInfo>,
    buffers: Registry<BufferInfo>,
    buffer_views: Registry<BufferViewInfo>,
    images: Registry<ImageInfo>,
    image_views: Registry<ImageViewInfo>,
    samplers: Registry<SamplerInfo>,
    shader_modules: Registry<ShaderModuleInfo>,
    pipeline_caches: Registry<PipelineCacheInfo>,
    pipelines: Registry<PipelineInfo>,
    pipeline_layouts: Registry<PipelineLayoutInfo>,
    render_passes: Registry<RenderPassInfo>,
    framebuffers: Registry<FramebufferInfo>,
    descriptor_pools: Registry<DescriptorPoolInfo>,
    descriptor_set_layouts: Registry<DescriptorSetLayoutInfo>,
    descriptor_sets: Registry<DescriptorSetInfo>,
    fences: Registry<FenceInfo>,
    semaphores: Registry<SemaphoreInfo>,
    events: Registry<EventInfo>,
    query_pools: Registry<QueryPoolInfo>,
    swapchains: Registry<SwapchainInfo>,

    /// Ordered call log per recording buffer; replay order is append order.
    command_buffer_calls: HashMap<CommandBufferHandle, Vec<CallRecord>>,
    /// Global ordered image-creation log, maintained only in
    /// ordered-image-creation mode.
    image_creation_calls: Vec<CallRecord>,

    /// Pending image transitions per recording buffer, lock-striped.
    image_transitions: DashMap<CommandBufferHandle, Vec<ImageTransition>>,
    /// Pending buffer transitions per recording buffer, lock-striped.
    buffer_transitions: DashMap<CommandBufferHandle, Vec<BufferTransition>>,
}

/// Generates the typed add/get/get_mut/remove quartet for one category.
macro_rules! tracked_category {
    ($field:ident, $info:ty, $handle:ty,
     $add:ident, $get:ident, $get_mut:ident, $remove:ident) => {
        impl StateTracker {
            /// Start tracking `handle`; returns the fresh record for the
            /// caller to populate.
            pub fn $add(&mut self, handle: $handle) -> &mut $info {
                self.$field.add(handle)
            }

            pub fn $get(&self, handle: $handle) -> Option<&$info> {
                self.$field.get(handle)
            }

            pub fn $get_mut(&mut self, handle: $handle) -> Option<&mut $info> {
                self.$field.get_mut(handle)
            }

            /// Stop tracking `handle`, releasing everything the record
            /// owns. No-op when untracked.
            pub fn $remove(&mut self, handle: $handle) -> Option<$info> {
                self.$field.remove(handle)
            }
        }
    };
}

tracked_category!(instances, InstanceInfo, InstanceHandle,
    add_instance, get_instance, get_instance_mut, remove_instance);
tracked_category!(physical_devices, PhysicalDeviceInfo, PhysicalDeviceHandle,
    add_physical_device, get_physical_device, get_physical_device_mut, remove_physical_device);
tracked_category!(devices, DeviceInfo, DeviceHandle,
    add_device, get_device, get_device_mut, remove_device);
tracked_category!(queues, QueueInfo, QueueHandle,
    add_queue, get_queue, get_queue_mut, remove_queue);
tracked_category!(command_pools, CommandPoolInfo, CommandPoolHandle,
    add_command_pool, get_command_pool, get_command_pool_mut, remove_command_pool);
tracked_category!(command_buffers, CommandBufferInfo, CommandBufferHandle,
    add_command_buffer, get_command_buffer, get_command_buffer_mut, remove_command_buffer);
tracked_category!(device_memories, DeviceMemoryInfo, DeviceMemoryHandle,
    add_device_memory, get_device_memory, get_device_memory_mut, remove_device_memory);
tracked_category!(buffers, BufferInfo, BufferHandle,
    add_buffer, get_buffer, get_buffer_mut, remove_buffer);
tracked_category!(buffer_views, BufferViewInfo, BufferViewHandle,
    add_buffer_view, get_buffer_view, get_buffer_view_mut, remove_buffer_view);
tracked_category!(images, ImageInfo, ImageHandle,
    add_image, get_image, get_image_mut, remove_image);
tracked_category!(image_views, ImageViewInfo, ImageViewHandle,
    add_image_view, get_image_view, get_image_view_mut, remove_image_view);
tracked_category!(samplers, SamplerInfo, SamplerHandle,
    add_sampler, get_sampler, get_sampler_mut, remove_sampler);
tracked_category!(shader_modules, ShaderModuleInfo, ShaderModuleHandle,
    add_shader_module, get_shader_module, get_shader_module_mut, remove_shader_module);
tracked_category!(pipeline_caches, PipelineCacheInfo, PipelineCacheHandle,
    add_pipeline_cache, get_pipeline_cache, get_pipeline_cache_mut, remove_pipeline_cache);
tracked_category!(pipelines, PipelineInfo, PipelineHandle,
    add_pipeline, get_pipeline, get_pipeline_mut, remove_pipeline);
tracked_category!(pipeline_layouts, PipelineLayoutInfo, PipelineLayoutHandle,
    add_pipeline_layout, get_pipeline_layout, get_pipeline_layout_mut, remove_pipeline_layout);
tracked_category!(render_passes, RenderPassInfo, RenderPassHandle,
    add_render_pass, get_render_pass, get_render_pass_mut, remove_render_pass);
tracked_category!(framebuffers, FramebufferInfo, FramebufferHandle,
    add_framebuffer, get_framebuffer, get_framebuffer_mut, remove_framebuffer);
tracked_category!(descriptor_pools, DescriptorPoolInfo, DescriptorPoolHandle,
    add_descriptor_pool, get_descriptor_pool, get_descriptor_pool_mut, remove_descriptor_pool);
tracked_category!(descriptor_set_layouts, DescriptorSetLayoutInfo, DescriptorSetLayoutHandle,
    add_descriptor_set_layout, get_descriptor_set_layout, get_descriptor_set_layout_mut,
    remove_descriptor_set_layout);
tracked_category!(descriptor_sets, DescriptorSetInfo, DescriptorSetHandle,
    add_descriptor_set, get_descriptor_set, get_descriptor_set_mut, remove_descriptor_set);
tracked_category!(fences, FenceInfo, FenceHandle,
    add_fence, get_fence, get_fence_mut, remove_fence);
tracked_category!(semaphores, SemaphoreInfo, SemaphoreHandle,
    add_semaphore, get_semaphore, get_semaphore_mut, remove_semaphore);
tracked_category!(events, EventInfo, EventHandle,
    add_event, get_event, get_event_mut, remove_event);
tracked_category!(query_pools, QueryPoolInfo, QueryPoolHandle,
    add_query_pool, get_query_pool, get_query_pool_mut, remove_query_pool);
tracked_category!(swapchains, SwapchainInfo, SwapchainHandle,
    add_swapchain, get_swapchain, get_swapchain_mut, remove_swapchain);

impl StateTracker {
    pub fn new(config: &TrackerConfig) -> Self {
        Self {
            ordered_image_creation: config.ordered_image_creation,
            ..Self::default()
        }
    }

    pub fn ordered_image_creation(&self) -> bool {
        self.ordered_image_creation
    }

    /// Total number of tracked objects across every category.
    pub fn total_tracked(&self) -> usize {
        self.instances.len()
            + self.physical_devices.len()
            + self.devices.len()
            + self.queues.len()
            + self.command_pools.len()
            + self.command_buffers.len()
            + self.device_memories.len()
            + self.buffers.len()
            + self.buffer_views.len()
            + self.images.len()
            + self.image_views.len()
            + self.samplers.len()
            + self.shader_modules.len()
            + self.pipeline_caches.len()
            + self.pipelines.len()
            + self.pipeline_layouts.len()
            + self.render_passes.len()
            + self.framebuffers.len()
            + self.descriptor_pools.len()
            + self.descriptor_set_layouts.len()
            + self.descriptor_sets.len()
            + self.fences.len()
            + self.semaphores.len()
            + self.events.len()
            + self.query_pools.len()
            + self.swapchains.len()
    }

    /// Tears down every category one live handle at a time (each removal
    /// runs the category's full teardown), then releases both call logs
    /// and both transition caches. Afterwards nothing this tracker
    /// allocated remains outstanding.
    pub fn clear(&mut self) {
        debug!(tracked = self.total_tracked(), "clearing state tracker");

        self.instances.clear();
        self.physical_devices.clear();
        self.devices.clear();
        self.queues.clear();
        self.command_pools.clear();
        self.command_buffers.clear();
        self.device_memories.clear();
        self.buffers.clear();
        self.buffer_views.clear();
        self.images.clear();
        self.image_views.clear();
        self.samplers.clear();
        self.shader_modules.clear();
        self.pipeline_caches.clear();
        self.pipelines.clear();
        self.pipeline_layouts.clear();
        self.render_passes.clear();
        self.framebuffers.clear();
        self.descriptor_pools.clear();
        self.descriptor_set_layouts.clear();
        self.descriptor_sets.clear();
        self.fences.clear();
        self.semaphores.clear();
        self.events.clear();
        self.query_pools.clear();
        self.swapchains.clear();

        self.command_buffer_calls.clear();
        self.image_creation_calls.clear();
        self.image_transitions.clear();
        self.buffer_transitions.clear();
    }

    // ── Command-buffer call log ─────────────────────────────────

    /// Append `record` to `cmdbuf`'s ordered log, taking ownership.
    /// A `None` record (the shim produced nothing for this call) is a
    /// no-op.
    pub fn add_command_buffer_call(
        &mut self,
        cmdbuf: CommandBufferHandle,
        record: Option<CallRecord>,
    ) {
        let Some(record) = record else { return };
        self.command_buffer_calls
            .entry(cmdbuf)
            .or_default()
            .push(record);
    }

    /// Records logged for `cmdbuf`, in replay order.
    pub fn command_buffer_calls(&self, cmdbuf: CommandBufferHandle) -> &[CallRecord] {
        self.command_buffer_calls
            .get(&cmdbuf)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Release the entire log for `cmdbuf`. Only an explicit reset or
    /// destroy empties a log; beginning a new recording does not.
    pub fn remove_command_buffer_calls(&mut self, cmdbuf: CommandBufferHandle) {
        self.command_buffer_calls.remove(&cmdbuf);
    }

    /// Append to the global ordered image-creation log, taking ownership.
    /// Dropped when the tracker was not built with
    /// `ordered_image_creation`.
    pub fn add_image_call(&mut self, record: CallRecord) {
        if self.ordered_image_creation {
            self.image_creation_calls.push(record);
        }
    }

    pub fn ordered_image_calls(&self) -> &[CallRecord] {
        &self.image_creation_calls
    }

    // ── Transition caches ───────────────────────────────────────

    pub fn add_image_transition(&self, cmdbuf: CommandBufferHandle, transition: ImageTransition) {
        self.image_transitions
            .entry(cmdbuf)
            .or_default()
            .push(transition);
    }

    /// Snapshot of `cmdbuf`'s pending image transitions, in record order.
    pub fn image_transitions(&self, cmdbuf: CommandBufferHandle) -> Vec<ImageTransition> {
        self.image_transitions
            .get(&cmdbuf)
            .map(|v| v.value().clone())
            .unwrap_or_default()
    }

    pub fn clear_image_transitions(&self, cmdbuf: CommandBufferHandle) {
        self.image_transitions.remove(&cmdbuf);
    }

    pub fn add_buffer_transition(&self, cmdbuf: CommandBufferHandle, transition: BufferTransition) {
        self.buffer_transitions
            .entry(cmdbuf)
            .or_default()
            .push(transition);
    }

    /// Snapshot of `cmdbuf`'s pending buffer transitions, in record order.
    pub fn buffer_transitions(&self, cmdbuf: CommandBufferHandle) -> Vec<BufferTransition> {
        self.buffer_transitions
            .get(&cmdbuf)
            .map(|v| v.value().clone())
            .unwrap_or_default()
    }

    pub fn clear_buffer_transitions(&self, cmdbuf: CommandBufferHandle) {
        self.buffer_transitions.remove(&cmdbuf);
    }

    /// Number of command buffers with a non-empty call log.
    pub fn logged_command_buffers(&self) -> usize {
        self.command_buffer_calls.len()
    }

    /// Total pending transitions across both caches.
    pub fn pending_transitions(&self) -> usize {
        let images: usize = self.image_transitions.iter().map(|e| e.value().len()).sum();
        let buffers: usize = self.buffer_transitions.iter().map(|e| e.value().len()).sum();
        images + buffers
    }
}
