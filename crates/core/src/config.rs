//! Response registry: the validated prompt configuration.
//!
//! A [`PromptConfig`] is built once through [`PromptConfigBuilder`] and is
//! read-only afterwards. Every constraint is checked in [`PromptConfigBuilder::build`],
//! after all setters have been applied, so the last call to a setter wins.

use std::collections::BTreeMap;

use log::debug;

use crate::error::ConfigError;
use crate::types::{Indents, HELP_CHAR, MIN_RESPONSES};

/// A prompt, its valid single-character responses and how to ask for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptConfig {
    prompt: String,
    responses: BTreeMap<char, String>,
    default: Option<char>,
    max_retries: Option<u32>,
    indents: Indents,
}

impl PromptConfig {
    /// Start building a prompt from its text and candidate responses.
    ///
    /// Repeated keys collapse to a single entry; the last description wins.
    pub fn builder<I, S>(prompt: impl Into<String>, responses: I) -> PromptConfigBuilder
    where
        I: IntoIterator<Item = (char, S)>,
        S: Into<String>,
    {
        PromptConfigBuilder {
            prompt: prompt.into(),
            responses: responses.into_iter().map(|(c, d)| (c, d.into())).collect(),
            default: None,
            max_retries: None,
            indents: None,
        }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Valid responses in ascending order.
    pub fn responses(&self) -> &BTreeMap<char, String> {
        &self.responses
    }

    pub fn description(&self, response: char) -> Option<&str> {
        self.responses.get(&response).map(String::as_str)
    }

    pub fn is_valid(&self, response: char) -> bool {
        self.responses.contains_key(&response)
    }

    /// Response selected by whitespace input, if any.
    pub fn default_response(&self) -> Option<char> {
        self.default
    }

    /// Number of bad responses tolerated before giving up. `None` means unlimited.
    pub fn max_retries(&self) -> Option<u32> {
        self.max_retries
    }

    pub fn indents(&self) -> Indents {
        self.indents
    }

    /// Valid responses other than the default, in ascending order.
    pub fn non_default_responses(&self) -> impl Iterator<Item = (char, &str)> + '_ {
        self.responses
            .iter()
            .filter(move |(c, _)| Some(**c) != self.default)
            .map(|(c, d)| (*c, d.as_str()))
    }
}

/// Collects prompt options before validation.
#[derive(Debug, Clone)]
pub struct PromptConfigBuilder {
    prompt: String,
    responses: BTreeMap<char, String>,
    default: Option<char>,
    max_retries: Option<i32>,
    indents: Option<(i32, i32)>,
}

impl PromptConfigBuilder {
    /// Response chosen when the user enters whitespace. Must be one of the responses.
    pub fn default_response(mut self, response: char) -> Self {
        self.default = Some(response);
        self
    }

    /// Limit the number of bad responses before reporting an error. Must be greater than 0.
    pub fn max_retries(mut self, max: i32) -> Self {
        self.max_retries = Some(max);
        self
    }

    /// Indents for the first prompt and for everything printed after it.
    pub fn indents(mut self, first: i32, rest: i32) -> Self {
        self.indents = Some((first, rest));
        self
    }

    pub fn build(self) -> Result<PromptConfig, ConfigError> {
        if self.responses.len() < MIN_RESPONSES {
            return Err(ConfigError::TooFewResponses(self.responses.len()));
        }

        for &c in self.responses.keys() {
            check_response_char(c)?;
        }

        if let Some(d) = self.default {
            if !self.responses.contains_key(&d) {
                return Err(ConfigError::UnknownDefault(d));
            }
        }

        let max_retries = match self.max_retries {
            Some(n) if n <= 0 => return Err(ConfigError::MaxRetries(n)),
            Some(n) => Some(n.unsigned_abs()),
            None => None,
        };

        let indents = match self.indents {
            Some((first, rest)) => Indents::new(
                check_indent("first", first)?,
                check_indent("continuation", rest)?,
            ),
            None => Indents::default(),
        };

        debug!(
            "prompt configured (responses={}, default={:?}, max_retries={:?})",
            self.responses.len(),
            self.default,
            max_retries
        );

        Ok(PromptConfig {
            prompt: self.prompt,
            responses: self.responses,
            default: self.default,
            max_retries,
            indents,
        })
    }

    /// Build the configuration, panicking if it is invalid.
    ///
    /// For call sites where a bad configuration is a programming error.
    pub fn build_or_panic(self) -> PromptConfig {
        match self.build() {
            Ok(config) => config,
            Err(err) => panic!("invalid prompt configuration: {err}"),
        }
    }
}

fn check_response_char(c: char) -> Result<(), ConfigError> {
    if c.is_uppercase() {
        return Err(ConfigError::Uppercase(c));
    }
    if c.is_whitespace() {
        return Err(ConfigError::Whitespace(c));
    }
    if c.is_control() {
        return Err(ConfigError::Control(c));
    }
    if c == HELP_CHAR {
        return Err(ConfigError::HelpChar);
    }
    Ok(())
}

fn check_indent(which: &'static str, value: i32) -> Result<usize, ConfigError> {
    usize::try_from(value).map_err(|_| ConfigError::NegativeIndent { which, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yes_no() -> PromptConfigBuilder {
        PromptConfig::builder(
            "Delete File",
            [('y', "delete the file"), ('n', "leave the file alone")],
        )
    }

    #[test]
    fn builds_with_defaults() {
        let config = yes_no().build().unwrap();
        assert_eq!(config.prompt(), "Delete File");
        assert_eq!(config.default_response(), None);
        assert_eq!(config.max_retries(), None);
        assert_eq!(config.indents(), Indents::default());
        assert_eq!(config.description('y'), Some("delete the file"));
        assert!(config.is_valid('n'));
        assert!(!config.is_valid('q'));
    }

    #[test]
    fn rejects_too_few_responses() {
        let none: [(char, &str); 0] = [];
        assert_eq!(
            PromptConfig::builder("Q", none).build(),
            Err(ConfigError::TooFewResponses(0))
        );
        assert_eq!(
            PromptConfig::builder("Q", [('y', "yes")]).build(),
            Err(ConfigError::TooFewResponses(1))
        );
        // Repeated keys count once.
        assert_eq!(
            PromptConfig::builder("Q", [('y', "yes"), ('y', "yes again")]).build(),
            Err(ConfigError::TooFewResponses(1))
        );
    }

    #[test]
    fn rejects_reserved_and_malformed_keys() {
        let cases = [
            ('Y', ConfigError::Uppercase('Y')),
            (' ', ConfigError::Whitespace(' ')),
            ('\t', ConfigError::Whitespace('\t')),
            ('\r', ConfigError::Whitespace('\r')),
            ('\u{7}', ConfigError::Control('\u{7}')),
            ('?', ConfigError::HelpChar),
        ];
        for (bad, expected) in cases {
            let result = PromptConfig::builder("Q", [('a', "a"), (bad, "bad")]).build();
            assert_eq!(result, Err(expected), "key {:?}", bad);
        }
    }

    #[test]
    fn default_must_be_a_response() {
        let result = PromptConfig::builder("Q", [('a', ".."), ('b', "..")])
            .default_response('y')
            .build();
        assert_eq!(result, Err(ConfigError::UnknownDefault('y')));

        let config = yes_no().default_response('y').build().unwrap();
        assert_eq!(config.default_response(), Some('y'));
    }

    #[test]
    fn max_retries_must_be_positive() {
        assert_eq!(yes_no().max_retries(0).build(), Err(ConfigError::MaxRetries(0)));
        assert_eq!(yes_no().max_retries(-3).build(), Err(ConfigError::MaxRetries(-3)));
        assert_eq!(yes_no().max_retries(2).build().unwrap().max_retries(), Some(2));
    }

    #[test]
    fn indents_must_not_be_negative() {
        assert_eq!(
            yes_no().indents(-1, 0).build(),
            Err(ConfigError::NegativeIndent { which: "first", value: -1 })
        );
        assert_eq!(
            yes_no().indents(0, -2).build(),
            Err(ConfigError::NegativeIndent { which: "continuation", value: -2 })
        );
        assert_eq!(
            yes_no().indents(2, 4).build().unwrap().indents(),
            Indents::new(2, 4)
        );
    }

    #[test]
    fn last_setter_wins() {
        let config = yes_no()
            .default_response('q')
            .default_response('n')
            .max_retries(-1)
            .max_retries(5)
            .indents(-1, -1)
            .indents(1, 2)
            .build()
            .unwrap();
        assert_eq!(config.default_response(), Some('n'));
        assert_eq!(config.max_retries(), Some(5));
        assert_eq!(config.indents(), Indents::new(1, 2));
    }

    #[test]
    fn non_default_responses_skip_default() {
        let config = PromptConfig::builder("Q", [('c', "c"), ('a', "a"), ('b', "b")])
            .default_response('b')
            .build()
            .unwrap();
        let keys: Vec<char> = config.non_default_responses().map(|(c, _)| c).collect();
        assert_eq!(keys, vec!['a', 'c']);
    }

    #[test]
    #[should_panic(expected = "invalid prompt configuration")]
    fn build_or_panic_panics_on_bad_config() {
        PromptConfig::builder("Q", [('y', "yes")]).build_or_panic();
    }
}
