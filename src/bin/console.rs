use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use std::rc::Rc;

use clap::Parser;
use safecracker::{hint, solve_safe, Hint, SafeModel};

#[derive(Debug, Parser)]
#[command(name = "console", about = "Safe-cracking interactive text console")]
struct Args {
    /// Safe description file
    safe: PathBuf,

    /// Optional command file executed before switching to standard input
    #[arg(long)]
    input: Option<PathBuf>,
}

fn prompt() {
    print!("> ");
    let _ = io::stdout().flush();
}

fn display_help() {
    println!(
        "a|add r c: Add laser to (r,c)\n\
         d|display: Display safe\n\
         h|help: Print this help message\n\
         q|quit: Exit program\n\
         r|remove r c: Remove laser from (r,c)\n\
         s|solve: Replace the safe with a solution\n\
         t|hint: Suggest the next laser placement\n\
         v|verify: Verify safe correctness"
    );
}

fn parse_coords(tokens: &[&str]) -> Option<(usize, usize)> {
    if tokens.len() != 3 {
        return None;
    }
    let r = tokens[1].parse().ok()?;
    let c = tokens[2].parse().ok()?;
    Some((r, c))
}

/// One command line. Returns false when the loop should stop.
fn dispatch(model: &mut SafeModel, line: &str) -> bool {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some(&command) = tokens.first() else {
        return true;
    };
    match command.chars().next().unwrap_or(' ') {
        'a' => match parse_coords(&tokens) {
            Some((r, c)) => {
                model.add(r, c);
            }
            None => {
                println!("Incorrect coordinates");
                prompt();
            }
        },
        'd' => {
            print!("{model}");
            prompt();
        }
        'h' => {
            display_help();
            prompt();
        }
        'q' => return false,
        'r' => match parse_coords(&tokens) {
            Some((r, c)) => {
                model.remove(r, c);
            }
            None => {
                println!("Incorrect coordinates");
                prompt();
            }
        },
        's' => match solve_safe(model.safe()) {
            Some(solved) => model.replace(solved, "Safe solved"),
            None => {
                println!("No solution");
                prompt();
            }
        },
        't' => match hint(model.safe()) {
            Hint::Place { row, col } => {
                model.add(row, col);
            }
            Hint::Solved => {
                println!("Safe is fully verified!");
                prompt();
            }
            Hint::NoSolution => {
                println!("Not a part of a valid solution");
                prompt();
            }
        },
        'v' => {
            model.verify();
        }
        _ => {
            println!("Unrecognized command: {line}");
            prompt();
        }
    }
    true
}

fn run() -> Result<(), String> {
    let args = Args::parse();
    let mut model = SafeModel::from_file(&args.safe)?;

    // Mirror of the observer update: every mutating or verifying operation
    // redraws the safe, reports its status line, and re-prompts.
    model.set_listener(Rc::new(|m: &SafeModel| {
        print!("{m}");
        println!("{}", m.status());
        prompt();
    }));

    print!("{model}");
    prompt();

    if let Some(path) = &args.input {
        let file =
            File::open(path).map_err(|e| format!("Failed to open command file: {e}"))?;
        for line in BufReader::new(file).lines() {
            let line = line.map_err(|e| format!("Failed to read command file: {e}"))?;
            if line.trim().is_empty() {
                continue;
            }
            // Echo commands supplied by file, like typed input would appear
            println!("{line}");
            if !dispatch(&mut model, &line) {
                return Ok(());
            }
        }
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.map_err(|e| format!("Failed to read input: {e}"))?;
        if line.trim().is_empty() {
            continue;
        }
        if !dispatch(&mut model, &line) {
            break;
        }
    }
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("[console] {e}");
        std::process::exit(1);
    }
}
