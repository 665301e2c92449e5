//! Go-style command-line flags.
//!
//! ```no_run
//! use betterflag::FlagSet;
//!
//! let mut flags = FlagSet::from_env();
//! let x = flags.uint("xValue", 100, "Define X value");
//! let user = flags.string("username", "Gabriel Correia", "Setups user name");
//! let report = flags.parse().expect("lenient parse never fails");
//!
//! for err in &report.errors {
//!     eprintln!("warning: {}", err);
//! }
//! println!("{:?} {:?} {:?}", flags.get(x), flags.get(user), flags.args());
//! ```

pub mod config;
pub mod error;
pub mod flags;
pub mod logging;

pub use config::{ConfigError, ParseConfig};
pub use error::FlagError;
pub use flags::{
    Flag, FlagKind, FlagOption, FlagSet, FlagType, FlagValue, ParseReport, ScanState,
    TokenOutcome,
};
