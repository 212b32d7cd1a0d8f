mod bitmask;
mod cmd;
mod i2c;
mod lock;
mod rm8_ctl;
mod rm8_types;

use std::path::Path;
use std::process;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use cmd::Command;
use i2c::I2cBus;
use lock::DeviceLock;
use rm8_ctl::Rm8Control;
use rm8_types::HardwareAddress;

// Deployment constants. The expander is an MCP23008 at the first address
// strap, IODIR at offset 0x00 and OLAT at offset 0x0a.
const HW: HardwareAddress = HardwareAddress {
    bus_id: 1,
    device_address: 0x20,
    iodir: 0x00,
    olat: 0x0a,
};

const LOCK_FILE: &str = "/run/lock/rm8ctl.lock";
const LOCK_TIMEOUT: Duration = Duration::from_secs(2);

#[derive(Parser)]
#[command(name = "rm8ctl", about = "Switches the relays of an rm8 relay module")]
struct Args {
    /// <target> <state> where target is 'init' or a relay number 0..7
    /// and state is 'on' or 'off'
    // Hyphen values pass through so that a malformed target like '-1'
    // is diagnosed by command validation, not by the argument parser.
    #[arg(value_name = "ARG", allow_hyphen_values = true)]
    args: Vec<String>,

    /// Increase output verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output
    #[arg(short, long)]
    quiet: bool,
}

fn run(args: &Args) -> Result<()> {
    // The lock scopes the whole invocation. Everything after this line,
    // including validation, runs inside the critical section.
    let _lock = DeviceLock::acquire(Path::new(LOCK_FILE), LOCK_TIMEOUT)?;

    let command = Command::from_args(&args.args)?;

    let bus = I2cBus::open(HW.bus_id, HW.device_address)?;
    Rm8Control::new(bus, HW).execute(command)?;

    Ok(())
}

fn main() {
    let args = Args::parse();

    stderrlog::new()
        .module(module_path!())
        .quiet(args.quiet)
        .verbosity(usize::from(args.verbose) + 2)
        .init()
        .expect("Failed to initialize logging");

    // -q silences the log, never the failure report.
    if let Err(e) = run(&args) {
        eprintln!("{:#}", e);
        process::exit(1);
    }
}
