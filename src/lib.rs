//! # Maintenance Counter Library
//!
//! A Rust library for reading and resetting the maintenance counters kept in
//! the EEPROM of battery-backed power devices. The firmware exposes the
//! EEPROM through a vendor-private SNMP subtree: register reads and writes
//! are encoded into the OID of ordinary get-requests and answered with
//! serial-style ASCII frames.
//!
//! ## Features
//!
//! - Read and write single EEPROM bytes through SNMPv1 get-requests
//! - Validate the device's read frames and write acknowledgements
//! - Convert 24-bit counters to and from percentages of their threshold
//! - Run the fixed-order write sequence that persists new counter values
//! - Read firmware version and status strings
//!
//! ## Example
//!
//! ```no_run
//! use maint_counter::{Device, SessionConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut device = Device::connect(&SessionConfig::new("192.168.1.20"))?;
//!     let reading = device.read_counters()?;
//!     println!("Counter 1: {:.2}%", reading.counter_1);
//!     Ok(())
//! }
//! ```

pub mod constants;
pub mod conversion;
pub mod device;
pub mod error;
pub mod frame;
pub mod info;
pub mod labels;
pub mod oid;
pub mod sequencer;
pub mod snmp;
pub mod types;

pub use device::Device;
pub use error::{CounterError, Result};
pub use oid::Oid;
pub use sequencer::{write_plan, READ_ORDER};
pub use snmp::{SessionConfig, SnmpGet, SnmpSession};
pub use types::*;
