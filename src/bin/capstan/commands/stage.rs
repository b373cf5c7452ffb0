//! `capstan stage` command

use std::io::IsTerminal;

use anyhow::Result;

use capstan::ops::resolve_link_plan;
use capstan::stager::{stage, StageStatus};
use capstan::util::diagnostic::StderrSink;

use crate::cli::StageArgs;
use crate::commands::{display_path, load, platform_arg};

pub fn execute(args: StageArgs, no_color: bool) -> Result<()> {
    let (project_root, config) = load(&args.project_root, &args.config)?;
    let platform = platform_arg(&args.platform);

    let plan = resolve_link_plan(&config, &project_root, platform, args.out_dir.as_deref());

    if !plan.available {
        println!("{}: nothing to stage ({})", plan.platform, plan.define);
        return Ok(());
    }

    let mut sink = StderrSink {
        color: !no_color && std::io::stderr().is_terminal(),
    };
    let outcomes = stage(&plan, &mut sink);

    // Staging is best effort: skipped copies are already reported as
    // warnings and never fail the command.
    for outcome in &outcomes {
        let destination = display_path(&project_root, &outcome.operation.destination);
        match &outcome.status {
            StageStatus::Staged => println!("Staged {}", destination),
            StageStatus::Preserved => println!("Preserved {}", destination),
            StageStatus::Skipped { .. } => println!("Skipped {}", destination),
        }
    }

    Ok(())
}
