use std::{
    fs,
    io::{self, BufRead},
};

use clap::Parser;
use intscript::{interpreter::evaluator::core::Session, run_script};

/// intscript runs small integer programs made of `var`, assignment and
/// `print` statements, one statement per line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells intscript to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Prints every variable and its final value after the run.
    #[arg(short, long)]
    dump: bool,

    /// The script (or, with `--file`, its path). Reads standard input line
    /// by line when omitted.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();
    let mut session = Session::new();

    match args.contents {
        Some(contents) => {
            let script = if args.file {
                fs::read_to_string(&contents).unwrap_or_else(|_| {
                    eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
                    std::process::exit(1);
                })
            } else {
                contents
            };

            for e in run_script(&mut session, &script) {
                eprintln!("{e}");
            }
        },
        None => {
            for line in io::stdin().lock().lines() {
                let Ok(line) = line else {
                    eprintln!("Failed to read from standard input.");
                    break;
                };
                if let Err(e) = session.run(&line) {
                    eprintln!("{e}");
                }
            }
        },
    }

    if args.dump {
        for (name, value) in session.symbols().iter() {
            println!("{name} = {value}");
        }
    }
}
