use std::io::Write;

use crate::console::io_fatal;
use crate::domain::{EventSink, GameEvent};
use crate::errors::domain::{DomainError, FatalKind};

/// One JSON object per line per event.
pub struct JsonLinesSink<W> {
    out: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> EventSink for JsonLinesSink<W> {
    fn emit(&mut self, event: &GameEvent) -> Result<(), DomainError> {
        serde_json::to_writer(&mut self.out, event)
            .map_err(|e| DomainError::fatal(FatalKind::Io, e.to_string()))?;
        writeln!(self.out).map_err(io_fatal)?;
        self.out.flush().map_err(io_fatal)
    }
}
