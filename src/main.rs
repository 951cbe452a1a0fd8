use anyhow::Result;
use clap::Parser;
use sbml2matlab_dist::commands::{self, Settings};
use std::path::PathBuf;

/// sbml2matlab-dist - release descriptor for the sbml2matlab binary extension
///
/// Classifies the build host into a platform tag (macosx_x86_64, linux_i386,
/// win_32, ...) and assembles the platform-qualified release metadata.
///
/// Examples:
///   sbml2matlab-dist tag                       # linux_x86_64
///   sbml2matlab-dist version                   # 1.2.3-linux_x86_64
///   sbml2matlab-dist --os Windows describe     # descriptor for a Windows build
#[derive(Parser, Debug)]
#[command(author, version = env!("S2M_DIST_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Release config file (JSON; defaults to ./release.json, then the user config dir)
    #[arg(
        long = "config",
        short = 'c',
        env = "S2M_DIST_CONFIG",
        value_name = "PATH",
        global = true
    )]
    pub config: Option<PathBuf>,

    /// OS name to classify instead of the host's (e.g. Darwin, Linux, Windows)
    #[arg(long = "os", env = "S2M_DIST_OS", value_name = "NAME", global = true)]
    pub os: Option<String>,

    /// Architecture descriptor to classify instead of the host's (e.g. 64bit)
    #[arg(long = "arch", env = "S2M_DIST_ARCH", value_name = "DESC", global = true)]
    pub arch: Option<String>,

    /// Base version to qualify instead of the configured one
    #[arg(long = "base-version", value_name = "VERSION", global = true)]
    pub base_version: Option<String>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Print the platform tag of the build host
    Tag,

    /// Print the platform-qualified version string
    Version,

    /// Print or write the release descriptor as JSON
    Describe(DescribeArgs),

    /// List the files that would be bundled from a package directory
    Manifest(ManifestArgs),
}

#[derive(clap::Args, Debug)]
pub struct DescribeArgs {
    /// Staged package directory; adds the resolved file list to the descriptor
    #[arg(long = "package-dir", short = 'p', value_name = "DIR")]
    pub package_dir: Option<PathBuf>,

    /// Write the descriptor to this file instead of stdout
    #[arg(long = "output", short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct ManifestArgs {
    /// Staged package directory
    #[arg(long = "package-dir", short = 'p', value_name = "DIR")]
    pub package_dir: PathBuf,

    /// Fail when nothing matches or an artifact belongs to another platform
    #[arg(long)]
    pub strict: bool,
}

impl Cli {
    fn settings(&self) -> Settings {
        Settings {
            config: self.config.clone(),
            os: self.os.clone(),
            arch: self.arch.clone(),
            base_version: self.base_version.clone(),
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let settings = cli.settings();
    let runtime = sbml2matlab_dist::runtime::RealRuntime;

    match cli.command {
        Commands::Tag => commands::tag(runtime, &settings)?,
        Commands::Version => commands::version(runtime, &settings)?,
        Commands::Describe(args) => {
            commands::describe(runtime, &settings, args.package_dir, args.output)?
        }
        Commands::Manifest(args) => {
            commands::manifest(runtime, &settings, args.package_dir, args.strict)?
        }
    }
    Ok(())
}
