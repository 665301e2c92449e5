//! Scanner state and per-token outcomes.

use crate::error::FlagError;

/// Where the scanner is in its single pass over the arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// Ready for the next token.
    Continue,
    /// The previous token named a flag; the next token is its value.
    AwaitingValue {
        /// Registration index of the pending flag.
        flag: usize,
    },
    /// The pass finished.
    Parsed,
}

/// What happened to one argument token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenOutcome {
    /// A value was bound to the named flag.
    Bound { flag: String, value: String },
    /// The token named a flag; its value is expected next.
    AwaitingValue { flag: String },
    /// Non-flag token kept as a positional argument.
    Positional(String),
    /// The token was not accepted.
    Rejected(FlagError),
}

/// Result of a lenient parse: one outcome per token, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    /// Outcomes in argument order.
    pub outcomes: Vec<TokenOutcome>,
    /// Every problem found, including ones not tied to a token (duplicate names).
    pub errors: Vec<FlagError>,
}

impl ParseReport {
    /// True when nothing was rejected.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of flag values bound during the pass.
    pub fn bound(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, TokenOutcome::Bound { .. }))
            .count()
    }
}

/// A dash token split into flag name and optional inline value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FlagToken<'a> {
    pub name: &'a str,
    pub inline_value: Option<&'a str>,
}

/// Split a token that starts with `-`. Returns `None` for non-flag tokens.
///
/// All leading dashes are stripped; the rest splits at the first `=`.
pub(crate) fn split_flag_token(token: &str) -> Option<FlagToken<'_>> {
    if !token.starts_with('-') {
        return None;
    }
    let body = token.trim_start_matches('-');
    let token = match body.split_once('=') {
        Some((name, value)) => FlagToken {
            name,
            inline_value: Some(value),
        },
        None => FlagToken {
            name: body,
            inline_value: None,
        },
    };
    Some(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_token_is_not_a_flag() {
        assert_eq!(split_flag_token("extra1"), None);
        assert_eq!(split_flag_token("a-b"), None);
    }

    #[test]
    fn dashes_are_stripped_identically() {
        let one = split_flag_token("-username").unwrap();
        let two = split_flag_token("--username").unwrap();
        let three = split_flag_token("---username").unwrap();
        assert_eq!(one, two);
        assert_eq!(two, three);
        assert_eq!(one.name, "username");
        assert_eq!(one.inline_value, None);
    }

    #[test]
    fn splits_at_first_equals() {
        let tok = split_flag_token("-expr=a=b").unwrap();
        assert_eq!(tok.name, "expr");
        assert_eq!(tok.inline_value, Some("a=b"));

        let empty = split_flag_token("--name=").unwrap();
        assert_eq!(empty.inline_value, Some(""));
    }

    #[test]
    fn report_counts_bound_outcomes() {
        let report = ParseReport {
            outcomes: vec![
                TokenOutcome::Bound {
                    flag: "a".into(),
                    value: "1".into(),
                },
                TokenOutcome::Positional("x".into()),
                TokenOutcome::Rejected(FlagError::UnknownFlag {
                    token: "-b".into(),
                }),
            ],
            errors: vec![FlagError::UnknownFlag {
                token: "-b".into(),
            }],
        };
        assert_eq!(report.bound(), 1);
        assert!(!report.is_clean());
    }
}
