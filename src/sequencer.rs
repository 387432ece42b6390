//! Multi-register counter sequences.
//!
//! Reading a counter takes three register reads; persisting new values takes
//! eleven register writes in a fixed order. Staged bytes must precede their
//! counter's commit byte, and both housekeeping bytes are cleared before the
//! first commit. Both sequences stop at the first failure. Writes already
//! applied stay applied: the device has no rollback.

use crate::constants::{CLEAR_VALUE, COMMIT_VALUE};
use crate::conversion::{from_percent, to_percent};
use crate::device::Device;
use crate::error::Result;
use crate::snmp::SnmpGet;
use crate::types::{Counter, CounterReading, Register, WriteStep};
use chrono::Utc;

/// Registers read for a counter reading, in request order
pub const READ_ORDER: [Register; 6] = [
    Register::Counter1Lo,
    Register::Counter1Hi,
    Register::Counter1Ex,
    Register::Counter2Lo,
    Register::Counter2Hi,
    Register::Counter2Ex,
];

/// Ordered register writes that persist `percent_1` / `percent_2`
pub fn write_plan(percent_1: f64, percent_2: f64) -> Vec<WriteStep> {
    let step = |register: Register, value: u8| WriteStep { register, value };
    let staged = |counter: Counter, percent: f64| {
        let (lo, hi, ex) = from_percent(counter.threshold(), percent);
        let [r_lo, r_hi, r_ex] = counter.registers();
        [step(r_lo, lo), step(r_hi, hi), step(r_ex, ex)]
    };

    let mut plan = Vec::with_capacity(11);
    plan.extend(staged(Counter::One, percent_1));
    plan.push(step(Register::HousekeepingA, CLEAR_VALUE));
    plan.push(step(Register::HousekeepingB, CLEAR_VALUE));
    plan.push(step(Counter::One.commit_register(), COMMIT_VALUE));
    plan.extend(staged(Counter::Two, percent_2));
    plan.push(step(Counter::Two.commit_register(), COMMIT_VALUE));
    plan.push(step(Register::GlobalCommit, CLEAR_VALUE));
    plan
}

impl<S: SnmpGet> Device<S> {
    /// Read both counters as percentages of their thresholds
    pub fn read_counters(&mut self) -> Result<CounterReading> {
        let mut bytes = [0u8; READ_ORDER.len()];
        for (slot, register) in bytes.iter_mut().zip(READ_ORDER) {
            *slot = self.read_byte(register.offset())?;
            log::debug!("{} = {:#04x}", register.label(), *slot);
        }

        let [c1_lo, c1_hi, c1_ex, c2_lo, c2_hi, c2_ex] = bytes;
        let reading = CounterReading {
            timestamp: Utc::now(),
            counter_1: to_percent(Counter::One.threshold(), c1_lo, c1_hi, c1_ex),
            counter_2: to_percent(Counter::Two.threshold(), c2_lo, c2_hi, c2_ex),
        };
        log::info!("Counters read: {}% {}%", reading.counter_1, reading.counter_2);
        Ok(reading)
    }

    /// Execute a write plan step by step, stopping at the first failure
    pub fn run_plan(&mut self, plan: &[WriteStep]) -> Result<()> {
        for (index, step) in plan.iter().enumerate() {
            log::info!(
                "Step {}/{}: {} := {}",
                index + 1,
                plan.len(),
                step.register.label(),
                step.value
            );
            self.write_byte(step.register.offset(), step.value)?;
        }
        Ok(())
    }

    /// Stage and commit new counter values. Takes effect after the device is
    /// power-cycled.
    pub fn write_counters(&mut self, percent_1: f64, percent_2: f64) -> Result<()> {
        let plan = write_plan(percent_1, percent_2);
        self.run_plan(&plan)
    }
}
