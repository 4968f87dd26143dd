mod device_type;
mod entity;
mod zw_info;

pub use device_type::DeviceType;
pub use entity::Device;
pub use zw_info::ZwInfo;
