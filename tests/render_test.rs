use std::io::Cursor;

use pretty_assertions::assert_eq;

use keyprompt::core::NoWrap;
use keyprompt::engine::Responder;
use keyprompt::input::TerminalSource;
use keyprompt::term::Wrapper;
use keyprompt::PromptConfig;

fn delete_file(default: Option<char>) -> PromptConfig {
    let mut builder = PromptConfig::builder(
        "Delete File",
        [('y', "delete the file"), ('n', "leave the file alone")],
    );
    if let Some(d) = default {
        builder = builder.default_response(d);
    }
    builder.build().unwrap()
}

type TestResponder = Responder<TerminalSource<Cursor<Vec<u8>>>, Vec<u8>, Vec<u8>>;

fn responder(config: PromptConfig) -> TestResponder {
    Responder::with_io(
        config,
        TerminalSource::new(Cursor::new(Vec::new())),
        Vec::new(),
        Vec::new(),
    )
}

fn stdout_of(r: &TestResponder) -> String {
    String::from_utf8(r.output().clone()).unwrap()
}

#[test]
fn print_prompt_with_default() {
    let mut r = responder(delete_file(Some('y')));
    r.print_prompt().unwrap();
    assert_eq!(stdout_of(&r), "Delete File? ([y]/n/?): ");
}

#[test]
fn print_prompt_without_default() {
    let mut r = responder(delete_file(None));
    r.print_prompt().unwrap();
    assert_eq!(stdout_of(&r), "Delete File? (n/y/?): ");
}

#[test]
fn print_valid_responses_only() {
    let mut r = responder(delete_file(Some('n')));
    r.print_valid_responses().unwrap();
    assert_eq!(stdout_of(&r), "([n]/y/?): ");
}

#[test]
fn print_help_uses_configured_indent() {
    let config = PromptConfig::builder("Q", [('b', "beta"), ('a', "alpha"), ('c', "gamma")])
        .default_response('c')
        .indents(0, 2)
        .build()
        .unwrap();
    let mut r = responder(config).with_formatter(NoWrap);
    r.print_help().unwrap();

    let expected = "\n  Enter one of:\n      c  gamma (this is the default)\n      a  alpha\n      b  beta\n      ?  to show this message\n\n  to select the default either enter the character or whitespace (a space, tab or return character)\n";
    assert_eq!(stdout_of(&r), expected);
}

#[test]
fn print_help_indent_wraps_long_lines() {
    let mut r = responder(delete_file(Some('y'))).with_formatter(Wrapper::new(40));
    r.print_help_indent(0).unwrap();

    let expected = "\nEnter one of:\n    y  delete the file (this is the\n       default)\n    n  leave the file alone\n    ?  to show this message\n\nto select the default either enter the\ncharacter or whitespace (a space, tab or\nreturn character)\n";
    assert_eq!(stdout_of(&r), expected);
}
