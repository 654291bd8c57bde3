use std::{fs::read_to_string, path::{Path, PathBuf}, process::ExitCode, time::Instant};

use clap::Parser;
use saltino::{
    errors::errors::{Error, ErrorTip},
    line_column, parse_source,
    parser::parser::{ParserConfig, DEFAULT_MAX_DEPTH},
};

#[derive(Parser, Debug)]
#[command(name = "saltino", version, about = "Parse a Saltino program and print its AST")]
struct Opt {
    /// Source file to parse
    file: PathBuf,

    /// Print the AST as JSON instead of canonical source
    #[arg(long = "json", default_value_t = false)]
    json: bool,

    /// Maximum nesting depth of values and blocks
    #[arg(long = "max-depth", default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Print phase timings to stderr
    #[arg(long = "timings", default_value_t = false)]
    timings: bool,
}

fn main() -> ExitCode {
    let opt = Opt::parse();

    let source = match read_to_string(&opt.file) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Error: cannot read {}: {}", opt.file.display(), error);
            return ExitCode::FAILURE;
        }
    };

    let file_name = opt
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned());

    let start = Instant::now();
    let config = ParserConfig {
        max_depth: opt.max_depth,
    };
    let program = match parse_source(&source, file_name, config) {
        Ok(program) => program,
        Err(error) => {
            display_error(&error, &source, &opt.file);
            return ExitCode::FAILURE;
        }
    };

    if opt.timings {
        eprintln!("Parsed in {:?}", start.elapsed());
    }

    if opt.json {
        match serde_json::to_string_pretty(&program) {
            Ok(json) => println!("{}", json),
            Err(error) => {
                eprintln!("Error: cannot serialize AST: {}", error);
                return ExitCode::FAILURE;
            }
        }
    } else {
        print!("{}", program);
    }

    ExitCode::SUCCESS
}

fn display_error(error: &Error, source: &str, file: &Path) {
    /*
        Error: message
        -> main.salt
           |
        20 | x = 1 < 2 < 3
           | ----------^
    */

    let position = error.get_position();
    let (line, line_text, column) = line_column(source, position.0);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    if let ErrorTip::None = error.get_tip() {
        eprintln!("Error: {}", error.get_error_name());
    } else {
        eprintln!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    eprintln!("-> {}", file.as_os_str().to_string_lossy());
    eprintln!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    eprintln!("{} | {}", line_string, line_text_removed.trim_end());

    let arrows = column.saturating_sub(removed_whitespace).max(1);

    eprintln!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string.chars().take_while(|c| *c == ' ' || *c == '\t').count();

    (string.chars().skip(start).collect(), start)
}
