//! `capstan doctor` command

use anyhow::Result;

use capstan::ops::{doctor, format_report};

use crate::cli::DoctorArgs;
use crate::commands::{load, platform_arg};

pub fn execute(args: DoctorArgs, verbose: bool) -> Result<()> {
    let (project_root, config) = load(&args.project_root, &args.config)?;
    let platform = platform_arg(&args.platform);

    let report = doctor(&config, &project_root, platform);
    print!("{}", format_report(&report, verbose));

    // An absent or incomplete SDK is a normal state for an optional
    // feature, so doctor always exits 0.
    Ok(())
}
