use anyhow::Context;
use clap::Parser;

use pkgcompat::version::registries::NpmRegistry;
use pkgcompat::version::resolver::CompatResolver;

#[derive(Parser)]
#[command(name = "pkgcompat")]
#[command(version, about = "Find npm package versions compatible with a Node.js version")]
struct Cli {
    /// Name of the npm package to check
    package_name: String,

    /// Only show the latest compatible version
    #[arg(short, long)]
    latest: bool,

    /// Version range to check (e.g., ">=1.0.0 <2.0.0")
    #[arg(short, long)]
    range: Option<String>,

    /// Limit the number of versions to show (default: all)
    #[arg(long)]
    limit: Option<usize>,

    /// Node.js version to check against (e.g., "18.12.0");
    /// defaults to the version reported by the local `node` binary
    #[arg(short = 'n', long)]
    node_version: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run(cli))
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let node_version = match cli.node_version {
        Some(version) => version,
        None => host_node_version()?,
    };
    let display_version = if node_version.starts_with('v') {
        node_version.clone()
    } else {
        format!("v{node_version}")
    };

    println!("Checking compatibility with Node.js version: {display_version}");

    let resolver = CompatResolver::new(NpmRegistry::default());
    let compatible_versions = resolver
        .find_compatible_versions(
            &cli.package_name,
            &node_version,
            cli.range.as_deref(),
            cli.limit,
        )
        .await?;

    if compatible_versions.is_empty() {
        println!(
            "No compatible versions found for {} with Node.js {}",
            cli.package_name, display_version
        );
        return Ok(());
    }

    if cli.latest {
        println!("Latest compatible version: {}", compatible_versions[0]);
    } else {
        println!(
            "Compatible versions for {} with Node.js {}:",
            cli.package_name, display_version
        );
        for version in &compatible_versions {
            println!("  {version}");
        }
    }

    Ok(())
}

/// Ask the local `node` binary for its version
fn host_node_version() -> anyhow::Result<String> {
    let output = std::process::Command::new("node")
        .arg("--version")
        .output()
        .context("no Node.js version given and no `node` binary found; pass --node-version")?;

    if !output.status.success() {
        anyhow::bail!("`node --version` exited with {}", output.status);
    }

    let version = String::from_utf8(output.stdout)
        .context("`node --version` produced invalid UTF-8")?
        .trim()
        .to_string();

    Ok(version)
}
