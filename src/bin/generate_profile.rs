use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use task_provenance::profile::{CorpusProfiler, ProfilerConfig};
use task_provenance::store::{generate_profile, render_summary, ProfilePaths};

/// Profile a task corpus and write profile.json plus a text summary.
#[derive(Debug, Parser)]
#[command(name = "generate-profile", version)]
struct Args {
    /// Directory holding tasks.json / metadata.json and receiving the outputs.
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    /// Override the tasks file.
    #[arg(long)]
    tasks: Option<PathBuf>,

    /// Override the metadata file.
    #[arg(long)]
    metadata: Option<PathBuf>,

    /// Override the profile output path.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Override the summary output path.
    #[arg(long)]
    summary: Option<PathBuf>,

    /// Map records sequentially even for large corpora.
    #[arg(long)]
    sequential: bool,

    /// Emit logs as JSON lines.
    #[arg(long)]
    json_logs: bool,
}

impl Args {
    fn paths(&self) -> ProfilePaths {
        let mut paths = ProfilePaths::in_dir(&self.data_dir);
        if let Some(p) = &self.tasks {
            paths.tasks = p.clone();
        }
        if let Some(p) = &self.metadata {
            paths.metadata = p.clone();
        }
        if let Some(p) = &self.out {
            paths.profile = p.clone();
        }
        if let Some(p) = &self.summary {
            paths.summary = p.clone();
        }
        paths
    }
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.json_logs);

    let config = if args.sequential {
        ProfilerConfig::sequential()
    } else {
        ProfilerConfig::v0()
    };
    let profiler = CorpusProfiler::new(config);
    let paths = args.paths();

    let run = generate_profile(&paths, &profiler)
        .with_context(|| format!("writing profile to {}", paths.profile.display()))?;

    println!("Profile generated. Summary:");
    print!("{}", render_summary(&run.profile));
    Ok(())
}
