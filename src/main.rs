//! Ask a single-keystroke question from the command line (default binary).
//!
//! Prints the chosen response on its own line. Exits with status 1 if no
//! valid response was given.
//!
//! ```text
//! keyprompt -p "Delete File" -c y="delete the file" -c n="leave the file alone" -d y
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use keyprompt::engine::{Respond, Responder};
use keyprompt::PromptConfig;

#[derive(Debug, Parser)]
#[command(name = "keyprompt", version, about = "Ask a question answered by a single keystroke")]
struct Cli {
    /// Question to ask; "? " and the valid responses are appended.
    #[arg(short, long)]
    prompt: String,

    /// A valid response as KEY=DESCRIPTION. Repeat for each response.
    #[arg(short = 'c', long = "choice", value_parser = parse_choice, required = true)]
    choices: Vec<(char, String)>,

    /// Response selected by space, tab or return.
    #[arg(short, long)]
    default: Option<char>,

    /// Give up after this many bad responses.
    #[arg(short = 'r', long, allow_negative_numbers = true)]
    max_retries: Option<i32>,

    /// Indent of the first prompt.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    first_indent: i32,

    /// Indent of reprompts and help text.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    indent: i32,

    /// Report errors and exit directly instead of returning them.
    #[arg(long)]
    die: bool,
}

fn parse_choice(s: &str) -> std::result::Result<(char, String), String> {
    let (key, desc) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=DESCRIPTION, got '{s}'"))?;
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok((c, desc.to_string())),
        _ => Err(format!("the key must be a single character, got '{key}'")),
    }
}

fn build_config(cli: &Cli) -> Result<PromptConfig> {
    let mut builder = PromptConfig::builder(cli.prompt.as_str(), cli.choices.iter().cloned())
        .indents(cli.first_indent, cli.indent);
    if let Some(d) = cli.default {
        builder = builder.default_response(d);
    }
    if let Some(n) = cli.max_retries {
        builder = builder.max_retries(n);
    }
    Ok(builder.build()?)
}

fn main() -> Result<()> {
    let _ = env_logger::builder()
        .format_timestamp_millis()
        .parse_default_env()
        .try_init();

    let cli = Cli::parse();
    let config = build_config(&cli).context("invalid prompt")?;
    info!(
        "prompting (responses={}, default={:?}, max_retries={:?})",
        config.responses().len(),
        config.default_response(),
        config.max_retries()
    );

    let mut responder = Responder::new(config);
    let answer = if cli.die {
        responder.get_response_or_die()
    } else {
        responder.get_response()?
    };

    println!();
    println!("{answer}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choice_splits_on_first_equals() {
        assert_eq!(parse_choice("y=yes"), Ok(('y', "yes".to_string())));
        assert_eq!(parse_choice("e=a=b"), Ok(('e', "a=b".to_string())));
        assert_eq!(parse_choice("q="), Ok(('q', String::new())));
    }

    #[test]
    fn choice_rejects_bad_keys() {
        assert!(parse_choice("yes").is_err());
        assert!(parse_choice("ab=two").is_err());
        assert!(parse_choice("=none").is_err());
    }

    #[test]
    fn cli_builds_a_config() {
        let cli = Cli::parse_from([
            "keyprompt", "-p", "Delete File", "-c", "y=delete", "-c", "n=keep", "-d", "y",
            "-r", "3",
        ]);
        let config = build_config(&cli).unwrap();
        assert_eq!(config.prompt_line(), "Delete File? ([y]/n/?): ");
        assert_eq!(config.max_retries(), Some(3));
    }

    #[test]
    fn cli_reports_config_errors() {
        let cli = Cli::parse_from(["keyprompt", "-p", "Q", "-c", "y=yes", "-r", "-1"]);
        assert!(build_config(&cli).is_err());
    }
}
