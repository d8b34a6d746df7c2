use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

use versesync::{
    check_completeness, load_poem_document, process_range, write_poem_json, DocumentPaths,
    PoemData, SyncConfig,
};

#[derive(Parser)]
#[command(name = "versesync")]
#[command(author, version, about = "Poem text and marker log to audio sync metadata", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct DocumentArgs {
    /// Poem transcript with #BookName/#PoemName/#PoemType headers and #v segments
    #[arg(long, env = "POEM_TEXT_FILE")]
    text_file: PathBuf,

    /// Marker log (tab- or comma-separated, one header line)
    #[arg(long, env = "POEM_MARKERS_FILE")]
    markers_file: PathBuf,
}

impl From<DocumentArgs> for DocumentPaths {
    fn from(args: DocumentArgs) -> Self {
        Self {
            text_file: args.text_file,
            markers_file: args.markers_file,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one audio-list XML per item in the range
    Generate {
        #[command(flatten)]
        document: DocumentArgs,

        /// Folder containing the Rubai-<n> item folders
        #[arg(long, env = "POEM_BASE_PATH")]
        poems_root: PathBuf,

        /// First item number (inclusive)
        #[arg(long, env = "POEM_START", default_value = "1")]
        start: u32,

        /// Last item number (inclusive)
        #[arg(long, env = "POEM_END", default_value = "1")]
        end: u32,

        /// Base catalog id; each item's poem id is base + item number
        #[arg(long, env = "POEM_GANJOOR_BASE_ID", default_value = "0")]
        base_id: u64,

        /// Output folder for the XML files
        #[arg(long, env = "POEM_OUT_DIR", default_value = "out")]
        out_dir: PathBuf,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Parse a poem document and report what was found
    Inspect {
        #[command(flatten)]
        document: DocumentArgs,

        /// Also write the parsed poem as JSON
        #[arg(long)]
        json: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

impl Commands {
    fn verbose(&self) -> bool {
        match self {
            Commands::Generate { verbose, .. } | Commands::Inspect { verbose, .. } => *verbose,
        }
    }
}

fn main() -> Result<()> {
    let dotenv = dotenvy::dotenv();
    let cli = Cli::parse();

    setup_logging(cli.command.verbose());
    if let Err(e) = dotenv {
        debug!("No .env file loaded: {}", e);
    }

    match cli.command {
        Commands::Generate {
            document,
            poems_root,
            start,
            end,
            base_id,
            out_dir,
            ..
        } => {
            let config = SyncConfig {
                poems_root,
                range_start: start,
                range_end: end,
                catalog_base_id: base_id,
                out_dir,
            };
            generate(document.into(), &config)
        }
        Commands::Inspect {
            document,
            json,
            ..
        } => inspect(document.into(), json),
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn generate(paths: DocumentPaths, config: &SyncConfig) -> Result<()> {
    let poem = load_poem_document(&paths).context("Failed to load poem document")?;

    info!(
        "Generating items {}..={} into {:?}",
        config.range_start, config.range_end, config.out_dir
    );
    let result = process_range(config, &poem).context("Failed to generate audio lists")?;

    info!("Process completed: {} XML files written", result.written.len());
    Ok(())
}

fn inspect(paths: DocumentPaths, json: Option<PathBuf>) -> Result<()> {
    let poem = load_poem_document(&paths).context("Failed to load poem document")?;

    print_summary(&poem);

    let issues = check_completeness(&poem);
    println!();
    println!("Completeness");
    println!("------------");
    if issues.is_empty() {
        println!("No gaps found");
    } else {
        for issue in &issues {
            println!("- {}", issue);
        }
    }

    if let Some(path) = json {
        write_poem_json(&poem, &path).context("Failed to write poem JSON")?;
        info!("Poem JSON written to {:?}", path);
    }

    Ok(())
}

fn format_time(time: Option<f64>) -> String {
    match time {
        Some(t) if t.is_finite() => format!("{:.2}s", t),
        Some(_) => "invalid".to_string(),
        None => "-".to_string(),
    }
}

fn print_summary(poem: &PoemData) {
    println!("Poem Summary");
    println!("============");
    println!("Book: {}", poem.book_name);
    println!("Poem: {}", poem.poem_name);
    println!("Type: {}", poem.poem_type);
    println!("Couplets: {}", poem.total_couplets());
    println!(
        "Outro: {} -> {}",
        format_time(poem.outro_start),
        format_time(poem.outro_end)
    );
    println!();

    println!("Couplets");
    println!("--------");
    for couplet in &poem.couplets {
        println!(
            "#{}: couplet {} -> {}, verse {} -> {}  {}",
            couplet.number,
            format_time(couplet.couplet_start_time),
            format_time(couplet.couplet_end_time),
            format_time(couplet.verse_start_time),
            format_time(couplet.verse_end_time),
            couplet.persian1.as_deref().unwrap_or_default()
        );
    }
}
