use std::error::Error;

use clap::Parser;
use rustyline::{DefaultEditor, error::ReadlineError};
use thiserror::Error;

use crate::{
    parser::ParserError,
    runtime::{
        interpreter::{InterpreterErr, evaluate},
        values::RuntimeValue,
    },
    session::{ERROR_MARKER, Notebook, canonicalize},
};

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod runtime;
pub mod session;
pub mod utils;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("{0}")]
    Interpreter(InterpreterErr),
    #[error("{0}")]
    Parser(ParserError),
}

impl From<InterpreterErr> for CalcError {
    fn from(value: InterpreterErr) -> Self {
        Self::Interpreter(value)
    }
}

impl From<ParserError> for CalcError {
    fn from(value: ParserError) -> Self {
        Self::Parser(value)
    }
}

/// Parses and reduces a canonical expression string. The session layer
/// collapses any error from here to the single "Error" display marker.
pub fn evaluate_expression(source: &str) -> Result<RuntimeValue, CalcError> {
    let mut parser = parser::Parser::default();
    let expression = parser.produce_ast(source.to_string())?;

    Ok(evaluate(expression)?)
}

fn render(notebook: &Notebook) {
    utils::clear();

    let titles: Vec<String> = notebook
        .tabs()
        .iter()
        .enumerate()
        .map(|(i, tab)| {
            if i == notebook.active_index() {
                format!("[{}]", tab.title)
            } else {
                format!(" {} ", tab.title)
            }
        })
        .collect();

    let session = &notebook.active().session;
    println!("{}", titles.join(" "));
    println!("  {}", session.history());
    println!("  {}", session.display());
}

fn repl() -> Result<(), Box<dyn Error>> {
    let mut notebook = Notebook::new();
    let mut editor = DefaultEditor::new()?;

    render(&notebook);

    loop {
        let readline = editor.readline(">> ");
        match readline {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                } else if line == "new" {
                    notebook.add_tab();
                    render(&notebook);
                } else if line == "tabs" {
                    render(&notebook);
                } else if line == "close" {
                    let closed = notebook.close_tab();
                    render(&notebook);
                    if !closed {
                        println!("Cannot close the last tab.");
                    }
                } else if let Some(index) = line.strip_prefix("tab ") {
                    let selected = match index.trim().parse::<usize>() {
                        Ok(n) if n > 0 => notebook.select(n - 1),
                        _ => false,
                    };
                    render(&notebook);
                    if !selected {
                        println!("No such tab.");
                    }
                } else if line == "C" || line == "=" || utils::is_key_input(line) {
                    notebook.active_session_mut().press(line);
                    render(&notebook);
                } else {
                    render(&notebook);
                    println!("Unknown command: {}", line);
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}

fn one_shot(expression: &str) -> Result<(), Box<dyn Error>> {
    match evaluate_expression(&canonicalize(expression)) {
        Ok(value) => println!("{}", value),
        Err(_) => println!("{}", ERROR_MARKER),
    }

    Ok(())
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluate a single expression and exit instead of starting the
    /// interactive calculator.
    #[arg(short, long)]
    expr: Option<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    if let Some(expr) = args.expr {
        one_shot(&expr)
    } else {
        repl()
    }
}
