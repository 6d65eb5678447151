mod output;

use output::OutputMode;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::env;
use std::fs;
use std::process;
use strlist::{dispatch, MethodId, StrList};

enum ExitCode {
    /// Bad invocation or an unreadable script.
    Usage,
    /// A script command failed at the dispatch boundary.
    Command,
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut mode = OutputMode::Text;
    let mut repl_mode = false;
    let mut eval_command: Option<String> = None;
    let mut script_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help();
                process::exit(0);
            }
            "-r" | "--repl" => {
                repl_mode = true;
            }
            "--json" => {
                mode = OutputMode::Json;
            }
            "-e" | "--eval" => {
                i += 1;
                match args.get(i) {
                    Some(command) => eval_command = Some(command.clone()),
                    None => {
                        eprintln!("Error: -e/--eval requires a command");
                        process::exit(1);
                    }
                }
            }
            arg if arg.starts_with('-') => {
                eprintln!("Error: unknown option '{arg}'");
                process::exit(1);
            }
            arg => {
                script_path = Some(arg.to_string());
            }
        }
        i += 1;
    }

    let result = if repl_mode {
        run_repl()
    } else if let Some(command) = eval_command {
        run_eval(&command, mode)
    } else if let Some(path) = script_path {
        run_script(&path, mode)
    } else {
        print_help();
        process::exit(1);
    };

    match result {
        Ok(()) => {}
        Err(ExitCode::Usage) => process::exit(1),
        Err(ExitCode::Command) => process::exit(2),
    }
}

fn print_help() {
    println!("strlist host CLI");
    println!();
    println!("Drives a string list purely through its textual dispatch boundary:");
    println!("each command is a method name followed by an optional argument blob.");
    println!();
    println!("USAGE:");
    println!("    strlist-cli [OPTIONS] [SCRIPT]");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show this help");
    println!("    -r, --repl       Interactive session");
    println!("    -e, --eval CMD   Run a single command against an empty list");
    println!("    --json           Emit one JSON record per command");
    println!();
    println!("METHODS:");
    for id in MethodId::ALL {
        println!("    {}", id.name());
    }
}

/// Split a command line into the method name and the argument blob.
/// Everything after the method name is the blob, minus the separating
/// whitespace.
fn split_command(line: &str) -> (&str, Option<&str>) {
    match line.split_once(char::is_whitespace) {
        Some((method, rest)) => (method, Some(rest.trim_start())),
        None => (line, None),
    }
}

/// Execute one command, returning the rendered result or rendered error.
fn execute(list: &mut StrList, line: &str, mode: OutputMode) -> Result<String, String> {
    let (method, argument) = split_command(line);
    match dispatch(list, method, argument) {
        Ok(reply) => Ok(match mode {
            OutputMode::Text => reply.to_string(),
            OutputMode::Json => output::format_reply_json(method, &reply),
        }),
        Err(error) => Err(match mode {
            OutputMode::Text => error.to_string(),
            OutputMode::Json => output::format_error_json(method, &error),
        }),
    }
}

fn run_eval(command: &str, mode: OutputMode) -> Result<(), ExitCode> {
    let mut list = StrList::new();
    match execute(&mut list, command.trim(), mode) {
        Ok(rendered) => {
            println!("{rendered}");
            Ok(())
        }
        Err(rendered) => {
            match mode {
                OutputMode::Text => eprintln!("Error: {rendered}"),
                OutputMode::Json => println!("{rendered}"),
            }
            Err(ExitCode::Command)
        }
    }
}

fn run_script(path: &str, mode: OutputMode) -> Result<(), ExitCode> {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Error: cannot read '{path}': {error}");
            return Err(ExitCode::Usage);
        }
    };

    let mut list = StrList::new();
    for (line_number, raw_line) in source.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match execute(&mut list, line, mode) {
            Ok(rendered) => println!("{rendered}"),
            Err(rendered) => {
                match mode {
                    OutputMode::Text => {
                        eprintln!("Error at line {}: {rendered}", line_number + 1);
                    }
                    OutputMode::Json => println!("{rendered}"),
                }
                return Err(ExitCode::Command);
            }
        }
    }
    Ok(())
}

fn run_repl() -> Result<(), ExitCode> {
    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(error) => {
            eprintln!("Error: cannot start REPL: {error}");
            return Err(ExitCode::Usage);
        }
    };

    println!("strlist REPL - 'help' lists methods, 'show' prints the list, 'quit' exits");
    let mut list = StrList::new();

    loop {
        match editor.readline("list> ") {
            Ok(input) => {
                let line = input.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(line);

                match line {
                    "quit" | "exit" => break,
                    "show" => println!("{list}"),
                    "help" => {
                        for id in MethodId::ALL {
                            println!("  {}", id.name());
                        }
                    }
                    _ => match execute(&mut list, line, OutputMode::Text) {
                        Ok(rendered) => println!("{rendered}"),
                        Err(rendered) => println!("Error: {rendered}"),
                    },
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(error) => {
                eprintln!("Error: {error}");
                break;
            }
        }
    }

    Ok(())
}
