//! Command-line front end: `maint-counter <host> dev|get|set [p1] [p2]`.
//!
//! Set RUST_LOG to control logging, or pass `--verbose` for protocol traces:
//!   RUST_LOG=debug maint-counter 192.168.1.20 get

use clap::{Parser, Subcommand};
use maint_counter::constants::{DEFAULT_COMMUNITY, DEFAULT_PORT, TIMEOUT_MS};
use maint_counter::{format_significant, parse_percent_arg, Device, Result, SessionConfig};
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "maint-counter")]
#[command(version)]
#[command(about = "Inspect and reset EEPROM maintenance counters over SNMP", long_about = None)]
struct Args {
    /// Device host name or IP address
    host: String,

    #[command(subcommand)]
    command: Command,

    /// SNMP agent UDP port
    #[arg(long, env = "MAINT_COUNTER_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// SNMP community string
    #[arg(long, env = "MAINT_COUNTER_COMMUNITY", default_value = DEFAULT_COMMUNITY)]
    community: String,

    /// Per-request timeout in milliseconds
    #[arg(long, env = "MAINT_COUNTER_TIMEOUT_MS", default_value_t = TIMEOUT_MS)]
    timeout_ms: u64,

    /// Print `dev` and `get` results as JSON
    #[arg(long, global = true, default_value_t = false)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print firmware version and device status
    Dev,
    /// Print both counter values
    Get,
    /// Set counter values (percent, 0-100); takes effect after a power cycle
    Set {
        /// Counter 1 percentage
        #[arg(allow_hyphen_values = true)]
        counter_1: Option<String>,
        /// Counter 2 percentage
        #[arg(allow_hyphen_values = true)]
        counter_2: Option<String>,
    },
}

impl Args {
    fn session_config(&self) -> SessionConfig {
        SessionConfig::new(self.host.clone())
            .port(self.port)
            .community(self.community.clone())
            .timeout(Duration::from_millis(self.timeout_ms))
    }
}

fn init_logger(verbose: bool) {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

fn dev(args: &Args) -> Result<()> {
    let mut device = Device::connect(&args.session_config())?;

    if args.json {
        let info = device.read_device_info()?;
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    let version = device.read_firmware_version()?;
    println!("Firmware version: {}", version);
    let status = device.read_device_status()?;
    println!("Device status: {}", status);
    Ok(())
}

fn get(args: &Args) -> Result<()> {
    let mut device = Device::connect(&args.session_config())?;
    let reading = device.read_counters()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reading)?);
    } else {
        println!(
            "Counter values: {}% {}%",
            format_significant(reading.counter_1),
            format_significant(reading.counter_2)
        );
    }
    Ok(())
}

fn set(args: &Args, counter_1: Option<&str>, counter_2: Option<&str>) -> Result<()> {
    let percent_1 = parse_percent_arg(counter_1);
    let percent_2 = parse_percent_arg(counter_2);
    println!("Set counters to: {}% {}%", percent_1, percent_2);

    let mut device = Device::connect(&args.session_config())?;
    device.write_counters(percent_1 as f64, percent_2 as f64)?;
    println!("Please power off your device now to apply changes!");
    Ok(())
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // Usage and parse errors are reported, not signalled through the exit code
            let _ = err.print();
            return;
        }
    };

    init_logger(args.verbose);
    log::debug!("{:?}", args);

    let (result, failure) = match &args.command {
        Command::Dev => (dev(&args), "Unable to read device information!"),
        Command::Get => (get(&args), "Unable to read counter values!"),
        Command::Set {
            counter_1,
            counter_2,
        } => (
            set(&args, counter_1.as_deref(), counter_2.as_deref()),
            "Unable to write counter values!",
        ),
    };

    if let Err(err) = result {
        eprintln!("{} {}", failure, err);
    }
}
