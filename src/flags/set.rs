//! Flag registry and single-pass argument scanner.

use std::fmt;
use std::io::{self, Write};

use crate::config::ParseConfig;
use crate::error::FlagError;
use crate::flags::coerce::coerce;
use crate::flags::option::{Flag, FlagOption, FlagType};
use crate::flags::scanner::{split_flag_token, ParseReport, ScanState, TokenOutcome};

/// Registered flags plus the argument list they are parsed from.
///
/// Flags are kept in registration order; that order drives default
/// application, matching (first match wins), visiting and usage output.
pub struct FlagSet {
    argv: Vec<String>,
    pub(super) flags: Vec<FlagOption>,
    positional: Vec<String>,
    state: ScanState,
    bound: usize,
    config: ParseConfig,
    pub(super) output: Box<dyn Write>,
}

impl FlagSet {
    /// Create a set over a full argument vector. Element 0 is the program name.
    pub fn new<I, S>(argv: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            argv: argv.into_iter().map(Into::into).collect(),
            flags: Vec::new(),
            positional: Vec::new(),
            state: ScanState::Continue,
            bound: 0,
            config: ParseConfig::default(),
            output: Box::new(io::stderr()),
        }
    }

    /// Create a set over the current process arguments.
    pub fn from_env() -> Self {
        Self::new(std::env::args())
    }

    /// Replace the scanner policy.
    pub fn with_config(mut self, config: ParseConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ParseConfig {
        &self.config
    }

    // --- registration ---

    /// Register a signed integer flag.
    pub fn int(&mut self, name: &str, default: i32, description: &str) -> Flag<i32> {
        self.register(name, default, description)
    }

    /// Register an unsigned integer flag.
    pub fn uint(&mut self, name: &str, default: u32, description: &str) -> Flag<u32> {
        self.register(name, default, description)
    }

    /// Register a string flag.
    pub fn string(&mut self, name: &str, default: &str, description: &str) -> Flag<String> {
        self.register(name, default.to_string(), description)
    }

    fn register<T: FlagType>(&mut self, name: &str, default: T, description: &str) -> Flag<T> {
        let index = self.flags.len();
        let kind = T::KIND;
        self.flags
            .push(FlagOption::new(name, default.into_value(), description));
        tracing::debug!(flag = name, kind = %kind, "registered flag");
        Flag::new(index)
    }

    // --- parsing ---

    /// Scan the argument vector once, binding values into the registered flags.
    ///
    /// Defaults are re-applied first, so calling this again yields the same
    /// end state as a single call. In lenient mode every problem is recorded in
    /// the returned report; in strict mode the first problem is returned as
    /// `Err` and [`passed`](Self::passed) stays false.
    pub fn parse(&mut self) -> Result<ParseReport, FlagError> {
        self.reset();
        match self.scan() {
            Ok(report) => {
                self.state = ScanState::Parsed;
                tracing::info!(
                    bound = self.bound,
                    positional = self.positional.len(),
                    errors = report.errors.len(),
                    "parsed arguments"
                );
                Ok(report)
            }
            Err(err) => {
                self.state = ScanState::Continue;
                tracing::warn!("parse aborted: {}", err);
                Err(err)
            }
        }
    }

    fn reset(&mut self) {
        self.positional.clear();
        self.bound = 0;
        self.state = ScanState::Continue;
        for flag in &mut self.flags {
            flag.reset_used();
            flag.restore_default();
        }
    }

    fn scan(&mut self) -> Result<ParseReport, FlagError> {
        let mut report = ParseReport::default();

        for err in self.duplicate_names() {
            if self.config.strict {
                return Err(err);
            }
            tracing::warn!("{}", err);
            report.errors.push(err);
        }

        let mut terminated = false;
        for i in 1..self.argv.len() {
            let token = self.argv[i].clone();

            let flag_token = if terminated {
                None
            } else {
                split_flag_token(&token)
            };
            let Some(flag_token) = flag_token else {
                if let ScanState::AwaitingValue { flag } = self.state {
                    self.state = ScanState::Continue;
                    self.bind_index(flag, &token, &mut report)?;
                } else {
                    tracing::debug!(arg = %token, "positional argument");
                    self.positional.push(token.clone());
                    report.outcomes.push(TokenOutcome::Positional(token));
                }
                continue;
            };

            if let ScanState::AwaitingValue { flag } = self.state {
                self.state = ScanState::Continue;
                let err = FlagError::MissingValue {
                    flag: self.flags[flag].name().to_string(),
                };
                self.reject(&mut report, err)?;
            }

            if self.config.stop_at_terminator && token == "--" {
                terminated = true;
                continue;
            }

            match self.position(flag_token.name) {
                None => {
                    let err = FlagError::UnknownFlag {
                        token: token.clone(),
                    };
                    self.reject(&mut report, err)?;
                }
                Some(index) => match flag_token.inline_value {
                    Some(value) => self.bind_index(index, value, &mut report)?,
                    None => {
                        self.state = ScanState::AwaitingValue { flag: index };
                        report.outcomes.push(TokenOutcome::AwaitingValue {
                            flag: flag_token.name.to_string(),
                        });
                    }
                },
            }
        }

        if let ScanState::AwaitingValue { flag } = self.state {
            self.state = ScanState::Continue;
            let err = FlagError::MissingValue {
                flag: self.flags[flag].name().to_string(),
            };
            self.reject(&mut report, err)?;
        }

        Ok(report)
    }

    fn bind_index(
        &mut self,
        index: usize,
        raw: &str,
        report: &mut ParseReport,
    ) -> Result<(), FlagError> {
        let option = &mut self.flags[index];
        match coerce(option.name(), option.kind(), raw) {
            Ok(value) => {
                tracing::debug!(flag = option.name(), value = %value, "bound flag");
                option.bind(value);
                self.bound += 1;
                report.outcomes.push(TokenOutcome::Bound {
                    flag: option.name().to_string(),
                    value: raw.to_string(),
                });
                Ok(())
            }
            Err(err) => self.reject(report, err),
        }
    }

    fn reject(&self, report: &mut ParseReport, err: FlagError) -> Result<(), FlagError> {
        if self.config.strict {
            return Err(err);
        }
        tracing::warn!("{}", err);
        report.outcomes.push(TokenOutcome::Rejected(err.clone()));
        report.errors.push(err);
        Ok(())
    }

    /// One error per registration that repeats an earlier name.
    fn duplicate_names(&self) -> Vec<FlagError> {
        self.flags
            .iter()
            .enumerate()
            .filter(|(i, flag)| self.flags[..*i].iter().any(|f| f.name() == flag.name()))
            .map(|(_, flag)| FlagError::DuplicateName {
                name: flag.name().to_string(),
            })
            .collect()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.flags.iter().position(|f| f.name() == name)
    }

    // --- queries ---

    /// Read a flag's current value through its registration handle.
    ///
    /// Returns `None` when the handle's index is out of range or its type does
    /// not match the flag at that index. A handle from another set is not
    /// detected otherwise.
    pub fn get<T: FlagType>(&self, flag: Flag<T>) -> Option<T> {
        self.flags
            .get(flag.index())
            .and_then(|option| T::from_value(option.value()))
    }

    /// First flag registered under exactly `name`.
    pub fn lookup(&self, name: &str) -> Option<&FlagOption> {
        self.flags.iter().find(|f| f.name() == name)
    }

    /// Call `f` for every flag that had a value bound, in registration order.
    pub fn visit<F>(&self, mut f: F)
    where
        F: FnMut(&FlagOption),
    {
        for flag in self.flags.iter().filter(|flag| flag.used()) {
            f(flag);
        }
    }

    /// Call `f` for every flag, in registration order.
    pub fn visit_all<F>(&self, f: F)
    where
        F: FnMut(&FlagOption),
    {
        self.flags.iter().for_each(f);
    }

    /// All registered flags, in registration order.
    pub fn flags(&self) -> impl Iterator<Item = &FlagOption> {
        self.flags.iter()
    }

    /// Bind `value` to every flag registered under exactly `name`.
    ///
    /// Returns how many flags were bound. Nothing is bound if the value does
    /// not coerce for any of them.
    pub fn set(&mut self, name: &str, value: &str) -> Result<usize, FlagError> {
        let mut pending = Vec::new();
        for (index, option) in self.flags.iter().enumerate() {
            if option.name() == name {
                pending.push((index, coerce(name, option.kind(), value)?));
            }
        }
        if pending.is_empty() {
            return Err(FlagError::UnknownFlag {
                token: name.to_string(),
            });
        }

        let count = pending.len();
        for (index, coerced) in pending {
            self.flags[index].bind(coerced);
            self.bound += 1;
        }
        tracing::debug!(flag = name, value, count, "set flag");
        Ok(count)
    }

    /// Positional arguments captured by the last parse, in order of appearance.
    pub fn args(&self) -> &[String] {
        &self.positional
    }

    /// Entry `index` of the raw argument vector, or `""` when out of range.
    pub fn arg(&self, index: usize) -> &str {
        self.argv.get(index).map(String::as_str).unwrap_or("")
    }

    /// Number of flag values bound so far.
    pub fn n_flag(&self) -> usize {
        self.bound
    }

    /// True once a parse has run to completion.
    pub fn passed(&self) -> bool {
        self.state == ScanState::Parsed
    }

    pub fn state(&self) -> ScanState {
        self.state
    }
}

impl fmt::Debug for FlagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlagSet")
            .field("argv", &self.argv)
            .field("flags", &self.flags)
            .field("positional", &self.positional)
            .field("state", &self.state)
            .field("bound", &self.bound)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_readable_before_parse() {
        let mut set = FlagSet::new(["prog"]);
        let n = set.int("n", -4, "");
        assert_eq!(set.get(n), Some(-4));
        assert!(!set.passed());
        assert_eq!(set.state(), ScanState::Continue);
    }

    #[test]
    fn duplicate_names_report_extra_registrations_only() {
        let mut set = FlagSet::new(["prog"]);
        set.int("a", 0, "");
        set.int("a", 1, "");
        set.string("b", "", "");
        set.uint("a", 2, "");
        let dups = set.duplicate_names();
        assert_eq!(
            dups,
            vec![
                FlagError::DuplicateName { name: "a".into() },
                FlagError::DuplicateName { name: "a".into() },
            ]
        );
    }

    #[test]
    fn pending_flag_is_tracked_by_index() {
        let mut set = FlagSet::new(["prog", "--name"]);
        set.int("other", 0, "");
        set.string("name", "x", "");
        let report = set.parse().unwrap();
        assert_eq!(
            report.outcomes,
            vec![
                TokenOutcome::AwaitingValue {
                    flag: "name".into()
                },
                TokenOutcome::Rejected(FlagError::MissingValue {
                    flag: "name".into()
                }),
            ]
        );
        assert!(set.passed());
    }
}
