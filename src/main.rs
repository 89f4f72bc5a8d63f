use brainfudge::cli_util::print_run_error;
use brainfudge::Brainfudge;
use clap::Parser;
use std::env;
use std::fs;
use std::io::{self, Read, Write};

/// Run a Brainfudge program and print its output.
///
/// The program text comes from the concatenated CODE arguments, from
/// --file, or from stdin when neither is given. Input for the `,`
/// instruction is read from stdin one byte at a time.
#[derive(Parser, Debug)]
#[command(name = "brainfudge", version)]
struct Cli {
    /// Read the program from PATH instead of positional CODE
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    file: Option<String>,

    /// Concatenated program text parts
    #[arg(value_name = "CODE", trailing_var_arg = true, allow_hyphen_values = true)]
    code: Vec<String>,
}

fn run(program: &str, cli: Cli) -> i32 {
    let Cli { file, code } = cli;

    if file.is_some() && !code.is_empty() {
        eprintln!("{program}: cannot use positional CODE together with --file");
        let _ = io::stderr().flush();
        return 2;
    }

    let code_str = if let Some(path) = file {
        match fs::read_to_string(&path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("{program}: failed to read program file as UTF-8: {e}");
                let _ = io::stderr().flush();
                return 1;
            }
        }
    } else if !code.is_empty() {
        code.join("")
    } else {
        // No positional code and no file: the program itself comes from
        // stdin. Stdin is consumed in full, so a `,` in such a program will
        // report input exhaustion.
        let mut s = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut s) {
            eprintln!("{program}: failed reading UTF-8 program from stdin: {e}");
            let _ = io::stderr().flush();
            return 1;
        }
        s
    };

    match Brainfudge::run(&code_str) {
        Ok(output) => {
            // For readability, ensure output ends with a newline
            println!("{output}");
            let _ = io::stdout().flush();
            0
        }
        Err(err) => {
            print_run_error(Some(program), &code_str, &err);
            let _ = io::stderr().flush();
            1
        }
    }
}

fn main() {
    // Pull the invoked name for error-message prefixes
    let program = env::args()
        .next()
        .unwrap_or_else(|| String::from("brainfudge"));

    let cli = Cli::parse();
    std::process::exit(run(&program, cli));
}
