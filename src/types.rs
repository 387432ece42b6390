use crate::constants::*;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// EEPROM byte address, sent on the wire as `<low>.<high>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegisterOffset(pub u16);

impl RegisterOffset {
    /// OID arcs addressing this byte
    pub fn arcs(self) -> [u32; 2] {
        [(self.0 & 0xFF) as u32, (self.0 >> 8) as u32]
    }
}

impl fmt::Display for RegisterOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:04X}", self.0)
    }
}

/// Registers touched by the counter sequences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Register {
    Counter1Lo,
    Counter1Hi,
    Counter1Ex,
    Counter2Lo,
    Counter2Hi,
    Counter2Ex,
    HousekeepingA,
    HousekeepingB,
    Counter1Commit,
    Counter2Commit,
    GlobalCommit,
}

impl Register {
    pub const ALL: [Register; 11] = [
        Register::Counter1Lo,
        Register::Counter1Hi,
        Register::Counter1Ex,
        Register::Counter2Lo,
        Register::Counter2Hi,
        Register::Counter2Ex,
        Register::HousekeepingA,
        Register::HousekeepingB,
        Register::Counter1Commit,
        Register::Counter2Commit,
        Register::GlobalCommit,
    ];

    pub fn offset(self) -> RegisterOffset {
        RegisterOffset(match self {
            Register::Counter1Lo => ADDR_COUNTER_1_LO,
            Register::Counter1Hi => ADDR_COUNTER_1_HI,
            Register::Counter1Ex => ADDR_COUNTER_1_EX,
            Register::Counter2Lo => ADDR_COUNTER_2_LO,
            Register::Counter2Hi => ADDR_COUNTER_2_HI,
            Register::Counter2Ex => ADDR_COUNTER_2_EX,
            Register::HousekeepingA => ADDR_HOUSEKEEPING_A,
            Register::HousekeepingB => ADDR_HOUSEKEEPING_B,
            Register::Counter1Commit => ADDR_COUNTER_1_COMMIT,
            Register::Counter2Commit => ADDR_COUNTER_2_COMMIT,
            Register::GlobalCommit => ADDR_GLOBAL_COMMIT,
        })
    }

    pub fn label(self) -> &'static str {
        match self {
            Register::Counter1Lo => "c1-lo",
            Register::Counter1Hi => "c1-hi",
            Register::Counter1Ex => "c1-ex",
            Register::Counter2Lo => "c2-lo",
            Register::Counter2Hi => "c2-hi",
            Register::Counter2Ex => "c2-ex",
            Register::HousekeepingA => "housekeeping-a",
            Register::HousekeepingB => "housekeeping-b",
            Register::Counter1Commit => "c1-commit",
            Register::Counter2Commit => "c2-commit",
            Register::GlobalCommit => "global-commit",
        }
    }
}

/// The two maintenance counters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Counter {
    One,
    Two,
}

impl Counter {
    pub fn threshold(self) -> u32 {
        match self {
            Counter::One => COUNTER_1_THRESHOLD,
            Counter::Two => COUNTER_2_THRESHOLD,
        }
    }

    /// Low, high and extension byte registers, in that order
    pub fn registers(self) -> [Register; 3] {
        match self {
            Counter::One => [Register::Counter1Lo, Register::Counter1Hi, Register::Counter1Ex],
            Counter::Two => [Register::Counter2Lo, Register::Counter2Hi, Register::Counter2Ex],
        }
    }

    pub fn commit_register(self) -> Register {
        match self {
            Counter::One => Register::Counter1Commit,
            Counter::Two => Register::Counter2Commit,
        }
    }
}

/// One register write in a sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteStep {
    pub register: Register,
    pub value: u8,
}

/// Result of a full counter read
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CounterReading {
    pub timestamp: DateTime<Utc>,
    pub counter_1: f64,
    pub counter_2: f64,
}

/// Informational strings reported by the device
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceInfo {
    pub firmware_version: String,
    pub status: String,
}

/// Parse a percentage argument the lenient way: optional sign and leading
/// digits, anything else ignored, clamped to 0..=100. Missing or
/// non-numeric input yields 0.
pub fn parse_percent_arg(arg: Option<&str>) -> u8 {
    let Some(text) = arg else {
        return 0;
    };
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let digits: String = digits.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return 0;
    }
    if negative {
        return 0;
    }
    // Anything too long for u64 is certainly above 100
    digits.parse::<u64>().map(|v| v.min(100) as u8).unwrap_or(100)
}

/// Format with four significant digits, switching to exponent notation
/// outside 1e-6..1e4 the way `Number.prototype.toPrecision(4)` does.
pub fn format_significant(value: f64) -> String {
    const PRECISION: i32 = 4;

    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return format!("{:.*}", (PRECISION - 1) as usize, 0.0);
    }

    // Rounding first settles the exponent (e.g. 99.996 -> 1.000e2)
    let scientific = format!("{:.*e}", (PRECISION - 1) as usize, value);
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -6 || exponent >= PRECISION {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{}e{}{}", mantissa, sign, exponent.abs());
    }
    let decimals = (PRECISION - 1 - exponent).max(0) as usize;
    format!("{:.*}", decimals, value)
}
