//! Absolute source locations shared by every buffer of a session.
//!
//! Buffers are laid out one after another in a single address space. Address
//! zero is reserved for the invalid location, and consecutive buffers are
//! separated by one unused address so that the end of a buffer never aliases
//! the start of the next one.

use std::fmt;
use std::num::NonZeroU32;

use ferrule_inputs::{File, LineCol};
use text_size::TextSize;

use crate::nullable::BridgedNullable;

/// An opaque, absolute source location. [`SourceLoc::INVALID`] means "no location".
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct SourceLoc(Option<NonZeroU32>);

impl SourceLoc {
    pub const INVALID: Self = Self(None);

    pub fn is_valid(self) -> bool {
        self.0.is_some()
    }

    /// Moves a valid location forward by `offset` bytes.
    #[track_caller]
    pub fn advanced_by(self, offset: TextSize) -> Self {
        let start = self.0.expect("cannot advance an invalid source location");
        let raw = start.checked_add(u32::from(offset)).expect("source location overflow");
        Self(Some(raw))
    }
}

impl BridgedNullable for SourceLoc {
    type Raw = NonZeroU32;

    fn from_raw(raw: Option<NonZeroU32>) -> Self {
        Self(raw)
    }

    fn raw(self) -> Option<NonZeroU32> {
        self.0
    }
}

impl fmt::Debug for SourceLoc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(raw) => write!(f, "SourceLoc({raw})"),
            None => f.write_str("SourceLoc(invalid)"),
        }
    }
}

/// A closed token range: the start of the first token and the start of the
/// last token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct SourceRange {
    pub start: SourceLoc,
    pub end: SourceLoc,
}

impl SourceRange {
    pub const INVALID: Self = Self { start: SourceLoc::INVALID, end: SourceLoc::INVALID };

    pub fn new(start: SourceLoc, end: SourceLoc) -> Self {
        Self { start, end }
    }

    pub fn is_valid(self) -> bool {
        self.start.is_valid()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BufferId(u32);

/// Describes one registered buffer: where it starts in the address space and
/// how many bytes it holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SourceBuffer {
    id: BufferId,
    start: SourceLoc,
    len: TextSize,
}

impl SourceBuffer {
    pub fn id(self) -> BufferId {
        self.id
    }

    /// Location of the first byte.
    pub fn start(self) -> SourceLoc {
        self.start
    }

    pub fn len(self) -> TextSize {
        self.len
    }

    pub fn is_empty(self) -> bool {
        self.len == TextSize::new(0)
    }

    /// Location one past the last byte.
    pub fn end(self) -> SourceLoc {
        self.start.advanced_by(self.len)
    }

    /// Byte offset of `loc` within this buffer, if it points into it.
    /// The end location is included.
    pub fn offset_of(self, loc: SourceLoc) -> Option<TextSize> {
        let start = self.start.0?.get();
        let raw = loc.0?.get();
        let offset = raw.checked_sub(start)?;
        (offset <= u32::from(self.len)).then(|| TextSize::new(offset))
    }
}

struct BufferEntry {
    buffer: SourceBuffer,
    file: File,
}

pub struct SourceManager {
    buffers: Vec<BufferEntry>,
    next_start: NonZeroU32,
}

impl Default for SourceManager {
    fn default() -> Self {
        Self { buffers: Vec::new(), next_start: NonZeroU32::MIN }
    }
}

impl SourceManager {
    /// Registers a buffer of `len` bytes holding the text of `file`.
    pub fn add_buffer(&mut self, file: File, len: TextSize) -> SourceBuffer {
        let id = BufferId(self.buffers.len().try_into().expect("too many source buffers"));
        let start = SourceLoc(Some(self.next_start));
        let buffer = SourceBuffer { id, start, len };

        let next = buffer.end().0.and_then(|end| end.checked_add(1));
        self.next_start = next.expect("source address space exhausted");
        self.buffers.push(BufferEntry { buffer, file });
        buffer
    }

    #[track_caller]
    pub fn buffer(&self, id: BufferId) -> SourceBuffer {
        self.buffers[id.0 as usize].buffer
    }

    #[track_caller]
    pub fn file(&self, id: BufferId) -> File {
        self.buffers[id.0 as usize].file
    }

    pub fn buffers(&self) -> impl Iterator<Item = SourceBuffer> + '_ {
        self.buffers.iter().map(|entry| entry.buffer)
    }

    /// Finds the buffer containing `loc` and the offset into it.
    pub fn resolve(&self, loc: SourceLoc) -> Option<(SourceBuffer, TextSize)> {
        let raw = loc.0?;
        let idx = self.buffers.partition_point(|entry| entry.buffer.start.0 <= Some(raw));
        let buffer = self.buffers.get(idx.checked_sub(1)?)?.buffer;
        Some((buffer, buffer.offset_of(loc)?))
    }

    /// Zero-based line and column of `loc`.
    pub fn line_col(&self, db: &dyn salsa::Database, loc: SourceLoc) -> Option<LineCol> {
        let (buffer, offset) = self.resolve(loc)?;
        Some(self.file(buffer.id).line_col(db, offset))
    }
}
