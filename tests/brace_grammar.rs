use pegcomb::prelude::*;
use pretty_assertions::assert_eq;

#[derive(Debug, Clone, PartialEq)]
enum Node {
    Text(String),
    Group(Vec<Node>),
}

fn text(s: &str) -> Node {
    Node::Text(s.to_string())
}

fn text_run<'code>() -> impl Parser<'code, Output = Node> + Send + Sync + 'code {
    none_of("{}")
        .with_label("text")
        .at_least(1)
        .map(|chars: Vec<char>| Node::Text(chars.into_iter().collect()))
}

/// `group := (text | "{" group "}")*`
fn group<'code>() -> BoxedParser<'code, Vec<Node>> {
    alt((
        text_run(),
        lazy(group).between(string("{"), string("}")).map(Node::Group),
    ))
    .many()
    .boxed()
}

fn control_sequence() -> impl for<'code> Parser<'code, Output = &'code str> {
    let symbol = regexp(r"\\[^a-zA-Z]").unwrap().with_label("csymb");
    let word = regexp(r"\\[a-zA-Z]+").unwrap().with_label("cword");
    alt((symbol, word))
}

#[test]
fn test_nested_braces() {
    let input = "Hi, {mom}! There are some {nested {braces}} here.";
    let parsed = run(&group(), input).unwrap();

    assert_eq!(
        parsed.value,
        vec![
            text("Hi, "),
            Node::Group(vec![text("mom")]),
            text("! There are some "),
            Node::Group(vec![text("nested "), Node::Group(vec![text("braces")])]),
            text(" here."),
        ]
    );
    assert_eq!(parsed.remaining, "");
    assert_eq!(parsed.consumed, input);
}

#[test]
fn test_empty_groups() {
    let parsed = run(&group(), "{}{{}}").unwrap();
    assert_eq!(
        parsed.value,
        vec![
            Node::Group(vec![]),
            Node::Group(vec![Node::Group(vec![])]),
        ]
    );
}

#[test]
fn test_unclosed_group() {
    let error = run(&group(), "ok {oops").unwrap_err();
    let failure = error.failure().unwrap();

    assert_eq!(failure.index, 8);
    assert!(failure.expected.contains(&"}".to_string()));
    assert_eq!(failure.remaining, "");
}

#[test]
fn test_stray_closing_brace_is_leftover() {
    let parsed = run(&group(), "a}b").unwrap();
    assert_eq!(parsed.value, vec![text("a")]);
    assert_eq!(parsed.remaining, "}b");
}

#[test]
fn test_deeply_nested_groups() {
    let depth = 2_000;
    let input = format!("{}x{}", "{".repeat(depth), "}".repeat(depth));
    let parsed = run(&group(), &input).unwrap();

    let mut node = &parsed.value[0];
    let mut levels = 0;
    while let Node::Group(children) = node {
        levels += 1;
        node = &children[0];
    }
    assert_eq!(levels, depth);
    assert_eq!(node, &text("x"));
}

#[test]
fn test_control_symbol() {
    let parsed = run(&control_sequence(), "\\123").unwrap();
    assert_eq!(parsed.value, "\\1");
    assert_eq!(parsed.remaining, "23");
}

#[test]
fn test_control_word() {
    let parsed = run(&control_sequence(), "\\mycmd123").unwrap();
    assert_eq!(parsed.value, "\\mycmd");
    assert_eq!(parsed.remaining, "123");
}

#[test]
fn test_not_a_control_sequence() {
    let error = run(&control_sequence(), "mycmd").unwrap_err();
    let failure = error.failure().unwrap();

    assert_eq!(failure.index, 0);
    assert_eq!(failure.expected, vec!["csymb", "cword"]);
    assert_eq!(error.to_string(), "expected csymb or cword at offset 0");
}
