#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
use csblock::{
    load_matrix_market_with, max_abs_difference, render, BlockEngine, CsMatrix, LoadConfig,
};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(about = "csblock CLI - clip, patch and partition Matrix Market sparse matrices")]
struct Cli {
    /// Read files through a memory map
    #[arg(long, global = true)]
    mmap: bool,

    /// Log filter when RUST_LOG is unset
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Show matrix shape and storage
    Info {
        /// Matrix Market file
        path: String,

        /// Dump the raw compressed arrays
        #[arg(long)]
        dump: bool,
    },
    /// Extract an m x n window
    Clip {
        /// Matrix Market file
        path: String,
        /// Top row of the window
        ri: usize,
        /// Left column of the window
        ci: usize,
        /// Window rows
        m: usize,
        /// Window columns
        n: usize,

        /// Print the block as JSON instead of a dump
        #[arg(long)]
        json: bool,
    },
    /// Split at a pivot, assemble the blocks and compare with the input
    Roundtrip {
        /// Matrix Market file
        path: String,
        /// Pivot row
        #[arg(long)]
        row: usize,
        /// Pivot column
        #[arg(long)]
        col: usize,
    },
}

#[cfg(feature = "cli")]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = LoadConfig::default().with_mmap(cli.mmap);
    let engine = BlockEngine::new();
    let start_time = std::time::Instant::now();

    match &cli.command {
        Commands::Info { path, dump } => {
            let a = load(&engine, path, &config)?;
            let c = a.as_compressed()?;
            println!("Matrix: {path}");
            println!("  Dimensions: {} x {}", c.nrows(), c.ncols());
            println!("  Stored entries: {}", c.nnz());
            println!("  1-norm: {}", c.norm1());
            if *dump {
                print!("{}", render(&a, "A"));
            }
        }
        Commands::Clip {
            path,
            ri,
            ci,
            m,
            n,
            json,
        } => {
            let a = load(&engine, path, &config)?;
            let block: CsMatrix = engine.clip(&a, *ri, *ci, *m, *n)?.into();
            print_block(&block, *json)?;
        }
        Commands::Roundtrip { path, row, col } => {
            let a = load(&engine, path, &config)?;
            let blocks = engine.split(&a, *row, *col)?;
            let back = engine.assemble(&blocks)?;
            let residual = engine.diff(a.as_compressed()?, &back)?;

            println!("Split at ({row}, {col}):");
            for (name, block) in [
                ("a11", &blocks.a11),
                ("a12", &blocks.a12),
                ("a21", &blocks.a21),
                ("a22", &blocks.a22),
            ] {
                println!("  {name}: {} x {}, {} stored", block.nrows(), block.ncols(), block.nnz());
            }
            println!("  |A - assemble(split(A))|_1 = {}", residual.norm1());
            if let Some(worst) = max_abs_difference(&a, &back.into()) {
                println!("  max entry difference = {worst}");
            }
        }
    }

    let elapsed = start_time.elapsed();
    println!("Completed in {elapsed:.2?}");

    Ok(())
}

#[cfg(feature = "cli")]
fn load(
    engine: &BlockEngine,
    path: &str,
    config: &LoadConfig,
) -> Result<CsMatrix, Box<dyn std::error::Error>> {
    let t = load_matrix_market_with(path, config)?;
    Ok(engine.compress(&t)?.into())
}

#[cfg(all(feature = "cli", feature = "serde"))]
fn print_block(block: &CsMatrix, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", csblock::to_json(block)?);
    } else {
        print!("{}", render(block, "C"));
    }
    Ok(())
}

#[cfg(all(feature = "cli", not(feature = "serde")))]
fn print_block(block: &CsMatrix, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        return Err("--json needs the 'serde' feature".into());
    }
    print!("{}", render(block, "C"));
    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("This example requires the 'cli' feature to be enabled.");
    eprintln!("Run with: cargo run --features cli --example block_cli -- --help");
    std::process::exit(1);
}
