//! Fence, semaphore, event, and query pool object info.

use vktrim_record::handle::{
    DeviceHandle, EventHandle, FenceHandle, QueryPoolHandle, SemaphoreHandle,
};
use vktrim_record::record::CallRecord;

use crate::registry::tracked_info;

#[derive(Debug, Clone, Default)]
pub struct FenceInfo {
    pub handle: FenceHandle,
    pub device: DeviceHandle,
    pub create_record: Option<CallRecord>,
    /// Whether the fence was created (or last observed) signaled, so the
    /// recreate call can pass the matching create flag.
    pub signaled: bool,
}
tracked_info!(FenceInfo, FenceHandle);

#[derive(Debug, Clone, Default)]
pub struct SemaphoreInfo {
    pub handle: SemaphoreHandle,
    pub device: DeviceHandle,
    pub create_record: Option<CallRecord>,
}
tracked_info!(SemaphoreInfo, SemaphoreHandle);

#[derive(Debug, Clone, Default)]
pub struct EventInfo {
    pub handle: EventHandle,
    pub device: DeviceHandle,
    pub create_record: Option<CallRecord>,
}
tracked_info!(EventInfo, EventHandle);

#[derive(Debug, Clone, Default)]
pub struct QueryPoolInfo {
    pub handle: QueryPoolHandle,
    pub device: DeviceHandle,
    pub create_record: Option<CallRecord>,
    /// Raw VkQueryType value.
    pub query_type: u32,
    /// Per-slot "results are available" flags; length equals the pool's
    /// slot count.
    pub slot_availability: Vec<bool>,
}
tracked_info!(QueryPoolInfo, QueryPoolHandle);
