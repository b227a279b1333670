//! Zero-copy reads from a borrowed byte buffer through an explicit,
//! inclusive [`Range`].
//!
//! A [`Reader`] decodes big-endian integers, extracts `\n` / `\r\n` / `\r`
//! terminated lines and skips past substrings. It never allocates and never
//! copies: lines come back as slices of the buffer, and the cursor is the
//! `Range` the caller passes in and gets back.
//!
//! ```rust
//! use byterange::{Range, Reader};
//!
//! let reader = Reader::new(b"AB\r\nCD\rEF\nGH");
//! let mut cursor = reader.cursor(Range::new(0, 11));
//!
//! let lines: Vec<&[u8]> = (0..4).map(|_| cursor.read_line().bytes()).collect();
//! assert_eq!(lines, [b"AB", b"CD", b"EF", b"GH"]);
//! assert!(cursor.read_line().is_empty());
//! ```
//!
//! Reading outside the declared window is a caller bug. The plain operations
//! panic on it; the `checked_*` operations return a [`ReadError`] instead.

#![cfg_attr(not(test), no_std)]

mod cursor;
mod error;
mod int;
mod line;
mod options;
mod range;
mod reader;

pub mod graphics;
pub mod search;
pub mod trace;

#[cfg(test)]
mod tests;

pub use cursor::Cursor;
pub use error::ReadError;
pub use int::BigEndian;
pub use line::Line;
pub use options::ReaderOptions;
pub use range::{Range, validate};
pub use reader::{Reader, Step};
