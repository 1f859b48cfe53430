use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context as _;
use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "spriteforge", version)]
struct Cli {
    /// Asset root; the fixed asset paths are resolved under it.
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    /// Log progress to stderr (-v info, -vv debug).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Verify that the game's image assets exist and decode.
    Check(CheckArgs),
    /// Composite the walk/attack spritesheet from the two source poses.
    Build(BuildArgs),
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// JSON array of asset descriptors to check instead of the built-in table.
    #[arg(long)]
    manifest: Option<PathBuf>,

    /// Print the report as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Parser, Debug)]
struct BuildArgs {
    /// Output PNG path (default: <root>/assets/juliette_animated_spritesheet.png).
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ok = match cli.cmd {
        Command::Check(args) => cmd_check(&cli.root, args)?,
        Command::Build(args) => cmd_build(&cli.root, args),
    };
    Ok(if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_check(root: &Path, args: CheckArgs) -> anyhow::Result<bool> {
    let descriptors = match &args.manifest {
        Some(path) => spriteforge::load_manifest(path)
            .with_context(|| format!("load manifest '{}'", path.display()))?,
        None => spriteforge::DEFAULT_ASSETS.to_vec(),
    };

    let report = spriteforge::check_assets(root, &descriptors);

    if args.json {
        let json = serde_json::to_string_pretty(&report).context("serialize report")?;
        println!("{json}");
    } else {
        println!("=== Asset Checker - Juliette Psicose 2D ===\n");
        println!("{report}");
    }
    Ok(report.passed())
}

fn cmd_build(root: &Path, args: BuildArgs) -> bool {
    let mut paths = spriteforge::SheetPaths::under(root);
    if let Some(out) = args.out {
        paths.output = out;
    }
    let layout = spriteforge::SheetLayout::default();

    println!("=== Sprite Processor - Juliette Psicose 2D ===");
    println!(
        "Processing: {} and {}",
        paths.primary.display(),
        paths.secondary.display()
    );
    println!(
        "Sheet: {} ({}x{} frames of {})",
        layout.sheet_size(),
        layout.columns,
        layout.rows,
        layout.frame
    );

    match spriteforge::build_spritesheet(&paths, layout) {
        Ok(summary) => {
            println!("Spritesheet saved to: {}", summary.output.display());
            let rows: Vec<String> = summary
                .row_frames
                .iter()
                .map(|(name, n)| format!("{n} {name}"))
                .collect();
            println!(
                "\nSpritesheet created: {} frames ({})",
                summary.frame_count(),
                rows.join(" + ")
            );
            true
        }
        Err(err) => {
            println!("\nError creating spritesheet: {err}");
            false
        }
    }
}
