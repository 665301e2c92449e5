//! Flag handling for command-line programs.
//!
//! ```text
//! Register → Apply defaults → Scan argv → Query
//! ```
//!
//! Flags are registered on a [`FlagSet`], which walks the argument vector once,
//! binds values into the registered flags and keeps the remaining tokens as
//! positional arguments.

mod coerce;
mod option;
mod scanner;
mod set;
mod usage;

pub use coerce::coerce;
pub use option::{Flag, FlagKind, FlagOption, FlagType, FlagValue};
pub use scanner::{ParseReport, ScanState, TokenOutcome};
pub use set::FlagSet;
