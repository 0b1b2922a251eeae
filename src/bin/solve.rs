use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use indicatif::ProgressBar;
use safecracker::{load_safe_from_file, Backtracker, SafeConfig, SearchLimits};

#[derive(Debug, Parser)]
#[command(name = "solve", about = "Safe-cracking batch solver")]
struct Args {
    /// Safe description file
    safe: PathBuf,

    /// Node budget; the search gives up once this many configurations have
    /// been visited
    #[arg(long)]
    max_nodes: Option<u64>,

    /// Print every placement on the way to the solution
    #[arg(long)]
    path: bool,

    /// Print search statistics as JSON
    #[arg(long)]
    stats: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let safe = load_safe_from_file(&args.safe)?;
    println!(
        "[solve] Loaded {}x{} safe from {}",
        safe.rows(),
        safe.cols(),
        args.safe.display()
    );
    print!("{safe}");

    let limits = SearchLimits {
        max_nodes: args.max_nodes,
    };
    let mut engine = Backtracker::with_limits(limits);

    let spinner = ProgressBar::new_spinner();
    spinner.set_message("searching");
    spinner.enable_steady_tick(Duration::from_millis(100));
    let started = Instant::now();
    let result = if args.path {
        engine
            .solve_with_path(SafeConfig::from_safe(safe.clone()))
            .map(|path| {
                // Report placement decisions only; skip steps leave the laser
                // count unchanged
                let mut lasers = safe.laser_count();
                let mut step = 0usize;
                for config in &path {
                    let n = config.safe().laser_count();
                    if n > lasers {
                        lasers = n;
                        if let Some((r, c)) = config.cursor_coord() {
                            spinner
                                .suspend(|| println!("[solve] Step {step}: laser at ({r}, {c})"));
                            step += 1;
                        }
                    }
                }
                path.into_iter()
                    .last()
                    .map_or(safe.clone(), SafeConfig::into_safe)
            })
    } else {
        engine
            .solve(SafeConfig::from_safe(safe))
            .map(SafeConfig::into_safe)
    };
    let elapsed = started.elapsed();
    spinner.finish_and_clear();

    match result {
        Some(solved) => {
            println!("[solve] Solved in {elapsed:.2?}");
            print!("{solved}");
        }
        None => {
            println!("[solve] No solution ({elapsed:.2?})");
        }
    }

    if args.stats {
        println!("{}", serde_json::to_string_pretty(&engine.stats())?);
    }

    Ok(())
}
