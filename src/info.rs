//! Informational strings outside the EEPROM register space.

use crate::constants::{DEVICE_STATUS_SUFFIX, FIRMWARE_VERSION_SUFFIX};
use crate::device::Device;
use crate::error::Result;
use crate::snmp::SnmpGet;
use crate::types::DeviceInfo;

impl<S: SnmpGet> Device<S> {
    /// Firmware version string, verbatim
    pub fn read_firmware_version(&mut self) -> Result<String> {
        let oid = self.info_oid(FIRMWARE_VERSION_SUFFIX);
        self.request_text(&oid)
    }

    /// Device status string, verbatim
    pub fn read_device_status(&mut self) -> Result<String> {
        let oid = self.info_oid(DEVICE_STATUS_SUFFIX);
        self.request_text(&oid)
    }

    /// Firmware version followed by status
    pub fn read_device_info(&mut self) -> Result<DeviceInfo> {
        let firmware_version = self.read_firmware_version()?;
        let status = self.read_device_status()?;
        Ok(DeviceInfo {
            firmware_version,
            status,
        })
    }
}
