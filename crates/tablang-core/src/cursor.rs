//! Line sources shared between the scanner and the table reader.
//!
//! A multi-line table block is read by pulling further lines from the same
//! source the scanner is walking, so the scanner resumes after the block's
//! closing line. Both sides hold the source as `&mut dyn LineSource`; nothing
//! copies or re-reads the input.

/// A pull-based, single-pass source of raw text lines.
pub trait LineSource {
    /// Hand out the next line, or `None` once the source is exhausted.
    fn next_line(&mut self) -> Option<String>;

    /// 1-based number of the last line handed out (0 before the first).
    fn line_number(&self) -> usize;
}

/// A [`LineSource`] over any iterator of string-like lines.
#[derive(Debug)]
pub struct LineCursor<I> {
    lines: I,
    line: usize,
}

impl<I> LineCursor<I> {
    pub fn new<T>(lines: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self {
            lines: lines.into_iter(),
            line: 0,
        }
    }
}

impl<I, S> LineSource for LineCursor<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    fn next_line(&mut self) -> Option<String> {
        let line = self.lines.next()?;
        self.line += 1;
        Some(line.as_ref().to_string())
    }

    fn line_number(&self) -> usize {
        self.line
    }
}

/// A [`LineSource`] that never yields a line.
///
/// Inline tables are read against this: everything they need is already in
/// the value text. The fixed line number keeps error positions pointing at the
/// line that held the inline table.
#[derive(Debug, Clone, Copy, Default)]
pub struct Exhausted {
    line: usize,
}

impl Exhausted {
    pub fn at(line: usize) -> Self {
        Self { line }
    }
}

impl LineSource for Exhausted {
    fn next_line(&mut self) -> Option<String> {
        None
    }

    fn line_number(&self) -> usize {
        self.line
    }
}
