// Lispy interactive REPL.
// Reads one line at a time, runs it through parse -> read -> eval -> print,
// and keeps going until end-of-input. A bad line never aborts the process.

use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use yansi::Paint;

use lispy::input_handling::{read_input_content, validate_input_args, InputConfig, InputSource};

#[derive(Parser)]
#[command(name = "lispy-repl")]
#[command(about = "Lispy interactive calculator with multi-source input support")]
struct Args {
    /// Input source type
    #[arg(short, long, value_enum, default_value_t = InputSource::Interactive)]
    input: InputSource,

    /// Input string (when using --input string)
    #[arg(short, long)]
    string: Option<String>,

    /// Input file path (when using --input file)
    #[arg(short, long)]
    file: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    match args.input {
        InputSource::Interactive => run_interactive_repl(),
        InputSource::String | InputSource::File | InputSource::Pipe => {
            let file_path = args.file.map(std::path::PathBuf::from);

            if let Err(e) = validate_input_args(&args.input, &file_path, &args.string) {
                eprintln!("{}", e);
                std::process::exit(1);
            }

            let input_config = match args.input {
                InputSource::File => {
                    let path = file_path.expect("file path validated above");
                    InputConfig::from_file(path, args.verbose)
                }
                InputSource::String => {
                    let content = args.string.expect("string content validated above");
                    InputConfig::from_string(content, args.verbose)
                }
                InputSource::Pipe => InputConfig::from_pipe(args.verbose),
                InputSource::Interactive => unreachable!(),
            };

            let input_content = match read_input_content(&input_config) {
                Ok(content) => content,
                Err(e) => {
                    eprintln!("{}", e);
                    std::process::exit(1);
                }
            };

            for line in input_content.content.lines() {
                if !line.trim().is_empty() {
                    process_line(line);
                }
            }
        }
    }
}

fn run_interactive_repl() {
    println!("Lisp Version 0.0.0.1");
    println!("Press Ctrl+c to Exit");
    println!();

    let mut rl = DefaultEditor::new().expect("Failed to create line editor");

    loop {
        match rl.readline("lispy> ") {
            Ok(line) => {
                let line = line.trim();

                if !line.is_empty() {
                    let _ = rl.add_history_entry(line);
                }

                match line {
                    "" => continue,
                    "quit" | "exit" => break,
                    _ => process_line(line),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                // Ctrl-C / Ctrl-D
                break;
            }
            Err(err) => {
                eprintln!("Error reading input: {}", err);
                break;
            }
        }
    }
}

/// Evaluate one line and print a single result line. Parse diagnostics and
/// error values are colored; successful results print plain.
fn process_line(line: &str) {
    match lispy::parse(line) {
        Ok(pairs) => {
            let result = lispy::eval(lispy::read_program(pairs));
            if result.is_err() {
                println!("{}", Paint::red(&result));
            } else {
                println!("{}", result);
            }
        }
        Err(e) => println!("{}", Paint::red(&e)),
    }
}
