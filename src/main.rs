use std::{fs, io, path::PathBuf, process};

use clap::Parser;

/// monkey is a small dynamically-typed scripting language with first-class
/// functions and lexical closures.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Runs this script instead of starting the interactive REPL.
    script: Option<PathBuf>,

    /// Pipe mode prints the script's final value to stdout.
    #[arg(short, long)]
    pipe_mode: bool,
}

fn main() {
    let args = Args::parse();

    let Some(path) = args.script else {
        let stdin = io::stdin();
        let stdout = io::stdout();
        if let Err(error) = monkey::repl::start(&mut stdin.lock(), &mut stdout.lock()) {
            eprintln!("{error}");
            process::exit(1);
        }
        return;
    };

    let source = fs::read_to_string(&path).unwrap_or_else(|_| {
        eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                  path.display());
        process::exit(1);
    });

    match monkey::run(&source) {
        Ok(value) => {
            if args.pipe_mode {
                println!("{value}");
            }
        },
        Err(error) => {
            eprintln!("{error}");
            process::exit(1);
        },
    }
}
