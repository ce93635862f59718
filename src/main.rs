use std::{
    env,
    fs::read_to_string,
    io::{self, Read, Write},
    process,
    time::Instant,
};

use kaleidoscope::{
    display_error,
    driver::{Driver, TopLevel},
    lexer::lexer::Lexer,
};

fn main() {
    let args: Vec<String> = env::args().collect();

    let status = match args.len() {
        1 => run_interactive(),
        2 => run_file(&args[1]),
        _ => {
            eprintln!("usage: {} [file]", args[0]);
            2
        }
    };

    process::exit(status);
}

/// Reads standard input as a character stream, one top-level unit at a time.
fn run_interactive() -> i32 {
    prompt();

    let chars = io::stdin()
        .lock()
        .bytes()
        .map_while(Result::ok)
        .map(char::from);
    let driver = Driver::new(Lexer::new(chars, None));

    for unit in driver {
        match unit {
            Ok(unit) => report(&unit),
            Err(error) => display_error(&error, None, "shell"),
        }
        prompt();
    }

    0
}

fn run_file(file_path: &str) -> i32 {
    let file_name = file_path.rsplit('/').next().unwrap_or(file_path);

    let source = match read_to_string(file_path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Failed to read {}: {}", file_path, error);
            return 1;
        }
    };

    let start = Instant::now();
    let mut failed = false;

    for unit in Driver::from_source(&source, Some(String::from(file_name))) {
        match unit {
            Ok(unit) => report(&unit),
            Err(error) => {
                display_error(&error, Some(&source), file_name);
                failed = true;
            }
        }
    }

    println!("Parsed in {:?}", start.elapsed());

    if failed {
        1
    } else {
        0
    }
}

fn report(unit: &TopLevel) {
    match unit {
        TopLevel::Definition(function) => {
            println!("Parsed a function definition.");
            println!("{}", function);
        }
        TopLevel::Extern(proto) => {
            println!("Parsed an extern.");
            println!("{}", proto);
        }
        TopLevel::Expression(function) => {
            println!("Parsed a top-level expr.");
            println!("{}", function.body);
        }
    }
}

fn prompt() {
    print!("ready> ");
    // A prompt that fails to show must not end the session
    io::stdout().flush().ok();
}
