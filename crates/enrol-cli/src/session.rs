//! # Interactive Session
//!
//! The identifier prompt loop. Invalid identifiers are recoverable —
//! the user is told why and asked again — so the only hard failures
//! here are IO errors and a closed input stream.

use std::io::{BufRead, Write};

use enrol_core::{EnrolError, SchoolRegistry};

/// Prompt until the input yields a resolvable school identifier.
///
/// Returns the school-axis index of the chosen school. The loop prints
/// the resolution failure's message and re-prompts; it ends with an IO
/// error when the input closes before a school is chosen.
pub fn prompt_school_index<R, W>(
    mut input: R,
    mut output: W,
    registry: &SchoolRegistry,
) -> Result<usize, EnrolError>
where
    R: BufRead,
    W: Write,
{
    loop {
        write!(output, "Please enter the high school name or school code: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "input closed before a school was chosen",
            )
            .into());
        }

        match registry.resolve(&line) {
            Ok(index) => return Ok(index),
            Err(err @ EnrolError::InvalidIdentifier(_)) => {
                tracing::warn!(identifier = %line.trim(), "unresolvable school identifier");
                writeln!(output, "{err}")?;
            }
            Err(err) => return Err(err),
        }
    }
}
