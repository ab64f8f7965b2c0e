//! Shared fixture for the state tracker tests: builds a tracker with one
//! populated object in every category, including the deep descriptor-set
//! ownership graph.
#![allow(dead_code)]

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
use vktrim_state::descriptor::{
    CopyDescriptorEntry, DescriptorBufferInfo, DescriptorImageInfo, LayoutBinding,
    WriteDescriptorEntry,
};
use vktrim_state::StateTracker;

pub fn record(tag: u8, len: usize) -> CallRecord {
    CallRecord::from_bytes(vec![tag; len])
}

/// Handles the fixture registered, for tests that need to reach back in.
pub struct Fixture {
    pub instance: InstanceHandle,
    pub device: DeviceHandle,
    pub image: ImageHandle,
    pub buffer: BufferHandle,
    pub buffer_view: BufferViewHandle,
    pub image_view: ImageViewHandle,
    pub sampler: SamplerHandle,
    pub descriptor_set: DescriptorSetHandle,
    pub command_buffer: CommandBufferHandle,
    pub swapchain: SwapchainHandle,
    pub query_pool: QueryPoolHandle,
    pub pipeline_layout: PipelineLayoutHandle,
}

/// Number of objects `populate_every_category` registers.
pub const FIXTURE_OBJECT_COUNT: usize = 26;

/// Populate one object in every category plus both call logs and both
/// transition caches. Raw handle values are arbitrary but unique.
pub fn populate_every_category(tracker: &mut StateTracker) -> Fixture {
    let instance = InstanceHandle::from_raw(0x100);
    let physical_device = PhysicalDeviceHandle::from_raw(0x101);
    let device = DeviceHandle::from_raw(0x102);
    let queue = QueueHandle::from_raw(0x103);
    let command_pool = CommandPoolHandle::from_raw(0x104);
    let command_buffer = CommandBufferHandle::from_raw(0x105);
    let memory = DeviceMemoryHandle::from_raw(0x106);
    let buffer = BufferHandle::from_raw(0x107);
    let buffer_view = BufferViewHandle::from_raw(0x108);
    let image = ImageHandle::from_raw(0x109);
    let image_view = ImageViewHandle::from_raw(0x10A);
    let sampler = SamplerHandle::from_raw(0x10B);
    let shader_module = ShaderModuleHandle::from_raw(0x10C);
    let pipeline_cache = PipelineCacheHandle::from_raw(0x10D);
    let pipeline = PipelineHandle::from_raw(0x10E);
    let pipeline_layout = PipelineLayoutHandle::from_raw(0x10F);
    let render_pass = RenderPassHandle::from_raw(0x110);
    let framebuffer = FramebufferHandle::from_raw(0x111);
    let descriptor_pool = DescriptorPoolHandle::from_raw(0x112);
    let set_layout = DescriptorSetLayoutHandle::from_raw(0x113);
    let descriptor_set = DescriptorSetHandle::from_raw(0x114);
    let fence = FenceHandle::from_raw(0x115);
    let semaphore = SemaphoreHandle::from_raw(0x116);
    let event = EventHandle::from_raw(0x117);
    let query_pool = QueryPoolHandle::from_raw(0x118);
    let swapchain = SwapchainHandle::from_raw(0x119);

    tracker.add_instance(instance).create_record = Some(record(0x01, 64));

    let pd = tracker.add_physical_device(physical_device);
    pd.instance = instance;
    pd.enumerate_record = Some(record(0x02, 32));
    pd.properties_record = Some(record(0x03, 128));
    pd.memory_properties_record = Some(record(0x04, 96));
    pd.queue_family_properties_record = Some(record(0x05, 48));

    let dev = tracker.add_device(device);
    dev.physical_device = physical_device;
    dev.create_record = Some(record(0x06, 80));

    let q = tracker.add_queue(queue);
    q.device = device;
    q.queue_family_index = 0;
    q.queue_index = 0;
    q.get_record = Some(record(0x07, 24));

    let pool = tracker.add_command_pool(command_pool);
    pool.device = device;
    pool.queue_family_index = 0;
    pool.create_record = Some(record(0x08, 24));

    let cb = tracker.add_command_buffer(command_buffer);
    cb.device = device;
    cb.pool = command_pool;
    cb.level = 0;
    cb.allocate_record = Some(record(0x09, 24));

    let mem = tracker.add_device_memory(memory);
    mem.device = device;
    mem.allocate_record = Some(record(0x0A, 40));
    mem.size = 4096;
    mem.map_record = Some(record(0x0B, 24));
    mem.mapped_offset = 0;
    mem.mapped_size = 4096;

    let buf = tracker.add_buffer(buffer);
    buf.device = device;
    buf.create_record = Some(record(0x0C, 56));
    buf.bind_memory_record = Some(record(0x0D, 24));
    buf.bound_memory = memory;
    buf.size = 1024;

    let bv = tracker.add_buffer_view(buffer_view);
    bv.device = device;
    bv.buffer = buffer;
    bv.create_record = Some(record(0x0E, 40));

    let img = tracker.add_image(image);
    img.device = device;
    img.create_record = Some(record(0x0F, 88));
    img.bind_memory_record = Some(record(0x10, 24));
    img.bound_memory = memory;
    img.aspect_mask = 1;

    let iv = tracker.add_image_view(image_view);
    iv.device = device;
    iv.image = image;
    iv.create_record = Some(record(0x11, 48));

    let smp = tracker.add_sampler(sampler);
    smp.device = device;
    smp.create_record = Some(record(0x12, 40));

    let sm = tracker.add_shader_module(shader_module);
    sm.device = device;
    sm.create_record = Some(record(0x13, 512));

    let pc = tracker.add_pipeline_cache(pipeline_cache);
    pc.device = device;
    pc.create_record = Some(record(0x14, 16));

    let pl = tracker.add_pipeline_layout(pipeline_layout);
    pl.device = device;
    pl.create_record = Some(record(0x15, 32));
    pl.set_layouts = vec![set_layout, set_layout];

    let pipe = tracker.add_pipeline(pipeline);
    pipe.device = device;
    pipe.create_record = Some(record(0x16, 256));
    pipe.layout = pipeline_layout;
    pipe.render_pass = render_pass;

    let rp = tracker.add_render_pass(render_pass);
    rp.device = device;
    rp.create_record = Some(record(0x17, 72));

    let fb = tracker.add_framebuffer(framebuffer);
    fb.device = device;
    fb.render_pass = render_pass;
    fb.create_record = Some(record(0x18, 48));
    fb.attachments = vec![image_view];

    let dp = tracker.add_descriptor_pool(descriptor_pool);
    dp.device = device;
    dp.create_record = Some(record(0x19, 32));
    dp.max_sets = 8;

    let dsl = tracker.add_descriptor_set_layout(set_layout);
    dsl.device = device;
    dsl.create_record = Some(record(0x1A, 40));
    dsl.bindings = vec![
        LayoutBinding {
            binding: 0,
            descriptor_type: 6,
            descriptor_count: 1,
            stage_flags: 0x20,
        },
        LayoutBinding {
            binding: 1,
            descriptor_type: 1,
            descriptor_count: 2,
            stage_flags: 0x10,
        },
    ];

    let ds = tracker.add_descriptor_set(descriptor_set);
    ds.device = device;
    ds.pool = descriptor_pool;
    ds.layout = set_layout;
    ds.writes = vec![
        WriteDescriptorEntry {
            dst_binding: 0,
            dst_array_element: 0,
            descriptor_type: 6,
            buffer_infos: vec![DescriptorBufferInfo {
                buffer,
                offset: 0,
                range: 1024,
            }],
            ..WriteDescriptorEntry::default()
        },
        WriteDescriptorEntry {
            dst_binding: 1,
            dst_array_element: 0,
            descriptor_type: 1,
            image_infos: vec![
                DescriptorImageInfo {
                    sampler,
                    image_view,
                    image_layout: 5,
                },
                DescriptorImageInfo {
                    sampler,
                    image_view,
                    image_layout: 5,
                },
            ],
            ..WriteDescriptorEntry::default()
        },
        WriteDescriptorEntry {
            dst_binding: 2,
            dst_array_element: 0,
            descriptor_type: 4,
            texel_buffer_views: vec![buffer_view],
            ..WriteDescriptorEntry::default()
        },
    ];
    ds.copies = vec![CopyDescriptorEntry {
        src_set: descriptor_set,
        src_binding: 0,
        src_array_element: 0,
        dst_binding: 1,
        dst_array_element: 0,
        descriptor_count: 1,
    }];

    let f = tracker.add_fence(fence);
    f.device = device;
    f.create_record = Some(record(0x1B, 24));
    f.signaled = true;

    let sem = tracker.add_semaphore(semaphore);
    sem.device = device;
    sem.create_record = Some(record(0x1C, 24));

    let ev = tracker.add_event(event);
    ev.device = device;
    ev.create_record = Some(record(0x1D, 24));

    let qp = tracker.add_query_pool(query_pool);
    qp.device = device;
    qp.create_record = Some(record(0x1E, 32));
    qp.query_type = 2;
    qp.slot_availability = vec![true, false, true, false];

    let sc = tracker.add_swapchain(swapchain);
    sc.device = device;
    sc.create_record = Some(record(0x1F, 96));
    sc.image_count_record = Some(record(0x20, 24));
    sc.get_images_record = Some(record(0x21, 40));

    tracker.add_command_buffer_call(command_buffer, Some(record(0x30, 64)));
    tracker.add_command_buffer_call(command_buffer, Some(record(0x31, 64)));
    tracker.add_image_call(record(0x32, 88));

    tracker.add_image_transition(
        command_buffer,
        ImageTransition {
            image,
            old_layout: 0,
            new_layout: 3,
            src_access_mask: 0,
            dst_access_mask: 0x80,
        },
    );
    tracker.add_buffer_transition(
        command_buffer,
        BufferTransition {
            buffer,
            src_access_mask: 0x40,
            dst_access_mask: 0x20,
        },
    );

    Fixture {
        instance,
        device,
        image,
        buffer,
        buffer_view,
        image_view,
        sampler,
        descriptor_set,
        command_buffer,
        swapchain,
        query_pool,
        pipeline_layout,
    }
}
