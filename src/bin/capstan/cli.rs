//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Capstan - vendor SDK link-configuration resolver for game plugin builds
#[derive(Parser)]
#[command(name = "capstan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve the SDK and print the link plan
    Resolve(ResolveArgs),

    /// Resolve the SDK and stage runtime artifacts next to the binary
    Stage(StageArgs),

    /// Inspect the SDK layout and report what the platform still needs
    Doctor(DoctorArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct ResolveArgs {
    /// Target platform (Win64, Linux64, Mac); defaults to the host
    #[arg(long)]
    pub platform: Option<String>,

    /// Project root containing ThirdParty/ (defaults to the current directory)
    #[arg(long, env = "CAPSTAN_PROJECT_ROOT")]
    pub project_root: Option<PathBuf>,

    /// Explicit config file (defaults to capstan.toml at the project root)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Staging destination for runtime artifacts
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Emit the plan as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct StageArgs {
    /// Target platform (Win64, Linux64, Mac); defaults to the host
    #[arg(long)]
    pub platform: Option<String>,

    /// Project root containing ThirdParty/ (defaults to the current directory)
    #[arg(long, env = "CAPSTAN_PROJECT_ROOT")]
    pub project_root: Option<PathBuf>,

    /// Explicit config file (defaults to capstan.toml at the project root)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Staging destination for runtime artifacts
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
}

#[derive(Args)]
pub struct DoctorArgs {
    /// Target platform (Win64, Linux64, Mac); defaults to the host
    #[arg(long)]
    pub platform: Option<String>,

    /// Project root containing ThirdParty/ (defaults to the current directory)
    #[arg(long, env = "CAPSTAN_PROJECT_ROOT")]
    pub project_root: Option<PathBuf>,

    /// Explicit config file (defaults to capstan.toml at the project root)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
