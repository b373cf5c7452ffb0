//! `capstan resolve` command

use anyhow::Result;

use capstan::ops::resolve_link_plan;

use crate::cli::ResolveArgs;
use crate::commands::{display_path, load, platform_arg};

pub fn execute(args: ResolveArgs) -> Result<()> {
    let (project_root, config) = load(&args.project_root, &args.config)?;
    let platform = platform_arg(&args.platform);

    let plan = resolve_link_plan(&config, &project_root, platform, args.out_dir.as_deref());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    println!(
        "Link plan for {} ({} SDK):",
        plan.platform, config.vendor.name
    );
    println!();
    println!("  define: {}", plan.define);

    if !plan.available {
        println!();
        println!("  (SDK unavailable; empty plan)");
        return Ok(());
    }

    if !plan.include_paths.is_empty() {
        println!();
        println!("  Include paths:");
        for path in &plan.include_paths {
            println!("    {}", display_path(&project_root, path));
        }
    }

    println!();
    println!("  Link libraries:");
    for (index, lib) in plan.link_libraries.iter().enumerate() {
        println!("    {}. {}", index + 1, display_path(&project_root, lib));
    }

    if !plan.delay_load_names.is_empty() {
        println!();
        println!("  Delay-loaded:");
        for name in &plan.delay_load_names {
            println!("    {}", name);
        }
    }

    if !plan.runtime_copies.is_empty() {
        println!();
        println!("  Runtime staging:");
        for op in &plan.runtime_copies {
            println!(
                "    {} -> {}",
                display_path(&project_root, &op.source),
                display_path(&project_root, &op.destination)
            );
        }
    }

    Ok(())
}
