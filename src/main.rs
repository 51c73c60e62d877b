use std::{
    fs::File,
    io::{self, BufRead, BufReader, Write},
};

use calcline::evaluate_line;
use clap::Parser;

/// calcline is a small interactive calculator for arithmetic expressions:
/// one expression per line, standard precedence, parenthesized grouping.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Read expressions from a file instead of standard input.
    #[arg(short, long)]
    file: Option<String>,
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    let result = match args.file {
        Some(path) => {
            let file = File::open(&path).unwrap_or_else(|_| {
                eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                std::process::exit(1);
            });
            run(BufReader::new(file), false)
        },
        None => run(io::stdin().lock(), true),
    };

    if let Err(e) = result {
        eprintln!("{e}");
    }
}

/// Runs the read-eval-print loop over the given input.
///
/// Each line is evaluated independently: notices and the result line go to
/// standard output on success, a single `Error:` line on parse failure. The
/// loop ends at end of input or at a line whose trimmed content is `exit`.
/// Blank lines are skipped.
fn run(reader: impl BufRead, interactive: bool) -> io::Result<()> {
    if interactive {
        println!("Simple arithmetic calculator (type 'exit' to quit)");
        print!("calc > ");
        io::stdout().flush()?;
    }

    for line in reader.lines() {
        let line = line?;
        if line.trim() == "exit" {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        match evaluate_line(&line) {
            Ok(evaluation) => {
                for notice in &evaluation.notices {
                    println!("{notice}");
                }
                println!("{evaluation}");
            },
            Err(e) => println!("{e}"),
        }
    }

    Ok(())
}
