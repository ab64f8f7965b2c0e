//! Instance, physical-device, device, and queue object info.

use vktrim_record::handle::{DeviceHandle, InstanceHandle, PhysicalDeviceHandle, QueueHandle};
use vktrim_record::record::CallRecord;

use crate::registry::tracked_info;

/// Root of the three-level ownership hierarchy
/// (instance -> physical device -> device).
#[derive(Debug, Clone, Default)]
pub struct InstanceInfo {
    pub handle: InstanceHandle,
    /// vkCreateInstance record.
    pub create_record: Option<CallRecord>,
}
tracked_info!(InstanceInfo, InstanceHandle);

#[derive(Debug, Clone, Default)]
pub struct PhysicalDeviceInfo {
    pub handle: PhysicalDeviceHandle,
    pub instance: InstanceHandle,
    /// Enumeration record that first produced this handle.
    pub enumerate_record: Option<CallRecord>,
    /// Query records, each present only if the application issued the
    /// corresponding query; replayed verbatim at trim start.
    pub properties_record: Option<CallRecord>,
    pub memory_properties_record: Option<CallRecord>,
    pub queue_family_properties_record: Option<CallRecord>,
}
tracked_info!(PhysicalDeviceInfo, PhysicalDeviceHandle);

#[derive(Debug, Clone, Default)]
pub struct DeviceInfo {
    pub handle: DeviceHandle,
    pub physical_device: PhysicalDeviceHandle,
    pub create_record: Option<CallRecord>,
}
tracked_info!(DeviceInfo, DeviceHandle);

#[derive(Debug, Clone, Default)]
pub struct QueueInfo {
    pub handle: QueueHandle,
    pub device: DeviceHandle,
    pub queue_family_index: u32,
    pub queue_index: u32,
    /// vkGetDeviceQueue record.
    pub get_record: Option<CallRecord>,
}
tracked_info!(QueueInfo, QueueHandle);
