//! Move log sinks.
//!
//! The orchestrator reports each committed [`Move`] in turn order. The
//! on-disk format is one `<SIDE>: <position+1>` line per move with no
//! header.

use super::Move;
use std::io::{self, Write};

/// Receives committed moves in turn order.
pub trait MoveLog {
    /// Records one move.
    fn record(&mut self, mv: Move) -> io::Result<()>;
}

/// Writes moves as text lines, flushing after each one.
#[derive(Debug)]
pub struct WriterLog<W: Write> {
    writer: W,
}

impl<W: Write> WriterLog<W> {
    /// Wraps a writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> MoveLog for WriterLog<W> {
    fn record(&mut self, mv: Move) -> io::Result<()> {
        writeln!(self.writer, "{}", mv)?;
        self.writer.flush()
    }
}

/// Keeps moves in memory.
impl MoveLog for Vec<Move> {
    fn record(&mut self, mv: Move) -> io::Result<()> {
        self.push(mv);
        Ok(())
    }
}

/// Discards every move.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLog;

impl MoveLog for NullLog {
    fn record(&mut self, _mv: Move) -> io::Result<()> {
        Ok(())
    }
}

impl<L: MoveLog + ?Sized> MoveLog for Box<L> {
    fn record(&mut self, mv: Move) -> io::Result<()> {
        (**self).record(mv)
    }
}

impl<L: MoveLog + ?Sized> MoveLog for &mut L {
    fn record(&mut self, mv: Move) -> io::Result<()> {
        (**self).record(mv)
    }
}
