//! Usage text and its output destination.

use std::fmt::Write as _;
use std::io::Write;

use crate::error::FlagError;
use crate::flags::set::FlagSet;

impl FlagSet {
    /// Destination for usage text. Defaults to stderr.
    pub fn output(&mut self) -> &mut dyn Write {
        self.output.as_mut()
    }

    /// Replace the usage destination.
    pub fn set_output<W: Write + 'static>(&mut self, writer: W) {
        self.output = Box::new(writer);
    }

    /// Render the defaults of every flag, in registration order. The
    /// description line starts with a tab:
    ///
    /// ```text
    /// -xValue unsigned int
    /// 	Define X value (default 100)
    /// ```
    pub fn defaults_text(&self) -> String {
        let mut text = String::new();
        for flag in &self.flags {
            // writing into a String cannot fail
            let _ = writeln!(
                text,
                "-{} {}\n\t{} (default {})",
                flag.name(),
                flag.kind(),
                flag.description(),
                flag.default_value()
            );
        }
        text
    }

    /// Write [`defaults_text`](Self::defaults_text) to the output destination.
    pub fn print_defaults(&mut self) -> Result<(), FlagError> {
        let text = self.defaults_text();
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }
}
