//! Parses a small LaTeX-like language: text runs, `{...}` groups nested to any
//! depth, control words such as `\emph` and control symbols such as `\{`.
//!
//! ```text
//! cargo run --example braces -- 'Hi, {mom}! There are some {nested {braces}} here.'
//! RUST_LOG=pegcomb=trace cargo run --example braces -- '\emph{x}'
//! ```

use pegcomb::prelude::*;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
enum Node<'code> {
    Text(String),
    Command(&'code str),
    Group(Vec<Node<'code>>),
}

fn print_tree(nodes: &[Node<'_>], depth: usize) {
    let indent = "  ".repeat(depth);
    for node in nodes {
        match node {
            Node::Text(text) => println!("{indent}text {text:?}"),
            Node::Command(name) => println!("{indent}command {name}"),
            Node::Group(children) => {
                println!("{indent}group");
                print_tree(children, depth + 1);
            }
        }
    }
}

/// `document := (command | text | "{" document "}")*`
fn document<'code>(
    command: BoxedParser<'code, &'code str>,
) -> BoxedParser<'code, Vec<Node<'code>>> {
    let text = none_of("{}\\")
        .with_label("text")
        .at_least(1)
        .map(|chars: Vec<char>| Node::Text(chars.into_iter().collect()));

    let inner = command.clone();
    let group = lazy(move || document(inner.clone()))
        .between(string("{"), string("}"))
        .map(Node::Group)
        .traced("group");

    alt((command.map(Node::Command), text, group))
        .many()
        .boxed()
}

fn grammar<'code>() -> Result<BoxedParser<'code, Vec<Node<'code>>>, GrammarError> {
    let symbol = regexp(r"\\[^a-zA-Z]")?.with_label("control symbol");
    let word = regexp(r"\\[a-zA-Z]+")?.with_label("control word");
    let command = alt((symbol, word)).boxed();

    Ok(document(command).skip(eof()).boxed())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let input = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Hi, {mom}! There are some {nested {braces}} here.".to_string());

    let parser = match grammar() {
        Ok(parser) => parser,
        Err(error) => {
            eprintln!("invalid grammar: {error}");
            return ExitCode::FAILURE;
        }
    };

    match parser.run(&input) {
        Ok(parsed) => {
            print_tree(&parsed.value, 0);
            ExitCode::SUCCESS
        }
        Err(RunError::Failed(failure)) => {
            eprintln!("{failure}");
            eprintln!("  at: {:?}", failure.remaining);
            ExitCode::FAILURE
        }
        Err(RunError::Grammar(error)) => {
            eprintln!("invalid grammar: {error}");
            ExitCode::FAILURE
        }
    }
}
