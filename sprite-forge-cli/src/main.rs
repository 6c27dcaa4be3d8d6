//! sprite-forge CLI
//!
//! One-shot importer for sprite image assets: scans an asset tree, infers
//! sprite metadata from filenames, and writes `sprite`/`sprite_slice`
//! rows into the game database.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

mod error;

use error::CliError;

#[derive(Parser)]
#[command(name = "sprite-forge")]
#[command(about = "Import sprite image assets into the game database", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan an asset tree and import sprites and slices
    Import {
        /// Asset root containing the maps/houses/zepps/characters/decorations folders
        root: PathBuf,

        /// Path to the sprite database
        #[arg(short, long)]
        db: PathBuf,

        /// Classify and aggregate but skip both insert passes
        #[arg(short = 'n', long)]
        dry_run: bool,
    },

    /// Create the sprite tables in a new or existing database
    Init {
        /// Path to the sprite database
        #[arg(short, long)]
        db: PathBuf,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Import { root, db, dry_run } => run_import(&root, &db, dry_run),
        Commands::Init { db } => run_init(&db),
    };

    if let Err(e) = result {
        eprintln!(
            "{} {}",
            "FATAL:".if_supports_color(Stdout, |t| t.red()),
            e,
        );
        std::process::exit(1);
    }
}

/// Run the import and print the summary.
fn run_import(root: &PathBuf, db: &PathBuf, dry_run: bool) -> Result<(), CliError> {
    println!(
        "Importing sprites from: {}",
        root.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    if dry_run {
        println!(
            "{}",
            "Dry run: no rows will be inserted".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    println!();

    let report = sprite_forge_lib::run_import(root, db, dry_run)?;

    println!("{}", "Summary:".if_supports_color(Stdout, |t| t.bold()));
    println!(
        "  {} {} files scanned, {} sprites found",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        report.files_scanned,
        report.sprites_found,
    );
    if !dry_run {
        println!(
            "  {} {} sprites and {} slices inserted",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            report.sprites_inserted,
            report.slices_inserted,
        );
    }
    if report.action_misses > 0 {
        println!(
            "  {} {} files with no matching action (imported as MISSING)",
            "?".if_supports_color(Stdout, |t| t.yellow()),
            report.action_misses,
        );
    }

    Ok(())
}

/// Create the schema.
fn run_init(db: &PathBuf) -> Result<(), CliError> {
    let conn = sprite_forge_db::open_database(db)?;
    sprite_forge_db::create_schema(&conn)?;

    println!(
        "{} Sprite tables ready in {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        db.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}
