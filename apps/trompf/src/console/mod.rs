//! Console presentation: prompts, player registration and event output.
//!
//! Nothing here decides game logic. It feeds the engine through
//! [`BidSource`](crate::domain::BidSource) and renders what comes back
//! through [`EventSink`](crate::domain::EventSink).

use std::io::{self, BufRead, Write};

use crate::errors::domain::{DomainError, FatalKind};

pub mod bid_input;
pub mod jsonl;
pub mod registration;
pub mod renderer;
pub mod session;

pub use bid_input::ConsoleBidSource;
pub use jsonl::JsonLinesSink;
pub use renderer::TextRenderer;
pub use session::run_session;

pub(crate) fn io_fatal(err: io::Error) -> DomainError {
    DomainError::fatal(FatalKind::Io, err.to_string())
}

/// Line-oriented question/answer over a reader and a writer.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `prompt` without a newline and read one line, minus its terminator.
    ///
    /// End of input is fatal.
    pub fn ask(&mut self, prompt: &str) -> Result<String, DomainError> {
        write!(self.output, "{prompt}").map_err(io_fatal)?;
        self.output.flush().map_err(io_fatal)?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(io_fatal)?;
        if read == 0 {
            return Err(DomainError::fatal(
                FatalKind::InputClosed,
                "input closed while waiting for an answer",
            ));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    pub fn say(&mut self, text: &str) -> Result<(), DomainError> {
        writeln!(self.output, "{text}").map_err(io_fatal)
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }
}
