//! Protocol constants for the vendor-private EEPROM access subtree.
//!
//! This module defines every fixed value the device firmware expects:
//! OID roots and suffixes, the write authorization token, response
//! literals, counter thresholds, register addresses and session defaults.

/// Default community string
pub const DEFAULT_COMMUNITY: &str = "public";

/// Default SNMP agent UDP port
pub const DEFAULT_PORT: u16 = 161;

/// Per-request timeout in milliseconds
pub const TIMEOUT_MS: u64 = 2000;

/// Vendor-private root shared by every request
pub const VENDOR_ROOT: &[u32] = &[1, 3, 6, 1, 4, 1, 1248, 1, 2, 2, 44, 1, 1, 2, 1];

/// Info suffix returning the firmware version string
pub const FIRMWARE_VERSION_SUFFIX: &[u32] = &[118, 105, 1, 0, 0];

/// Info suffix returning the device status string
pub const DEVICE_STATUS_SUFFIX: &[u32] = &[115, 116, 1, 0, 1];

/// Suffix under the vendor root addressing an EEPROM read
pub const EEPROM_READ_SUFFIX: &[u32] = &[124, 124, 7, 0, 133, 5, 65, 190, 160];

/// Suffix under the vendor root addressing an EEPROM write
pub const EEPROM_WRITE_SUFFIX: &[u32] = &[124, 124, 16, 0, 133, 5, 66, 189, 33];

/// Authorization token appended to every write OID ("Qpmzyfob" as ASCII codes)
pub const EEPROM_WRITE_MAGIC: [u32; 8] = [81, 112, 109, 122, 121, 102, 111, 98];

/// First line of every register read frame
pub const READ_FRAME_HEADER: &str = "@BDC PS";

/// Line separator inside a read frame
pub const FRAME_LINE_SEPARATOR: &str = "\r\n";

/// Literal acknowledgement of a successful register write
pub const WRITE_ACK: &str = "||:42:OK;";

/// Raw value of counter 1 corresponding to 100%
pub const COUNTER_1_THRESHOLD: u32 = 0xF96;

/// Raw value of counter 2 corresponding to 100%
pub const COUNTER_2_THRESHOLD: u32 = 0xCB6;

/// Value written to a per-counter commit register
pub const COMMIT_VALUE: u8 = 0x5E;

/// Value written to the housekeeping and global commit registers
pub const CLEAR_VALUE: u8 = 0x00;

/// Counter 1 low byte
pub const ADDR_COUNTER_1_LO: u16 = 0x0018;

/// Counter 1 high byte
pub const ADDR_COUNTER_1_HI: u16 = 0x0019;

/// Counter 2 low byte
pub const ADDR_COUNTER_2_LO: u16 = 0x001A;

/// Counter 2 high byte
pub const ADDR_COUNTER_2_HI: u16 = 0x001B;

/// Cleared after counter 1 is staged
pub const ADDR_HOUSEKEEPING_A: u16 = 0x001C;

/// Cleared after counter 1 is staged
pub const ADDR_HOUSEKEEPING_B: u16 = 0x001D;

/// Counter 1 extension byte (bits 16-23)
pub const ADDR_COUNTER_1_EX: u16 = 0x001E;

/// Counter 2 extension byte (bits 16-23)
pub const ADDR_COUNTER_2_EX: u16 = 0x0022;

/// Counter 1 commit register
pub const ADDR_COUNTER_1_COMMIT: u16 = 0x002E;

/// Counter 2 commit register
pub const ADDR_COUNTER_2_COMMIT: u16 = 0x002F;

/// Global commit register, written last
pub const ADDR_GLOBAL_COMMIT: u16 = 0x0031;
