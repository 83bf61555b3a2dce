use anyhow::Result;
use clap::Parser;
use docdiff::domain::areas::session::Session;
use docdiff::domain::objects::comparison::{default_comparisons, load_comparisons};
use docdiff::domain::objects::mistake::LookupPolicy;
use env_logger::Env;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "docdiff",
    version = "0.1.0",
    about = "Report line differences between pairs of documents",
    long_about = "This tool extracts the plain text of pairs of .docx documents, \
    diffs them line by line and prints every added or removed line as a mistake record \
    in a single JSON report, grouped by document pair.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
struct Cli {
    #[arg(
        short,
        long,
        help = "JSON file listing the pairs to compare (file1, file2, mistakeType, label)"
    )]
    config: Option<PathBuf>,
    #[arg(
        short = 'C',
        long,
        help = "Directory that relative document paths are resolved against"
    )]
    root: Option<PathBuf>,
    #[arg(
        long,
        required = false,
        help = "Fail when a mistake points past the end of the first document"
    )]
    strict: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("warn"));

    let cli = Cli::parse();

    let comparisons = match &cli.config {
        Some(config) => load_comparisons(config)?,
        None => default_comparisons(),
    };

    let root = match cli.root {
        Some(root) => root,
        None => std::env::current_dir()?,
    };

    let policy = if cli.strict {
        LookupPolicy::Strict
    } else {
        LookupPolicy::Lenient
    };

    let session = Session::new(&root, policy, Box::new(std::io::stdout()))?;
    session.compare(&comparisons).await
}
