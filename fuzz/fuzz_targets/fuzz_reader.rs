#![no_main]
use arbitrary::Arbitrary;
use byterange::{
    Range, Reader, ReaderOptions,
    search::{BlockSearch, LoopSearch},
    trace::NoTrace,
};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    buf: Vec<u8>,
    start: u16,
    end: u16,
    /// Mapped onto a four-byte alphabet before use so matches actually occur.
    pattern: Vec<u8>,
}

fn reader(data: &[u8]) {
    let Ok(input) = Input::arbitrary_take_rest(arbitrary::Unstructured::new(data)) else {
        return;
    };
    if input.buf.is_empty() {
        return;
    }

    let end = usize::from(input.end) % input.buf.len();
    let start = usize::from(input.start) % (end + 2);
    let range = Range::new(start, end);

    let by_loop = Reader::with_parts(&input.buf, NoTrace, LoopSearch, ReaderOptions::default());
    let by_block = Reader::with_parts(&input.buf, NoTrace, BlockSearch, ReaderOptions::default());

    let pattern: Vec<u8> = input
        .pattern
        .iter()
        .take(8)
        .map(|b| b"\r\nab"[usize::from(b % 4)])
        .collect();
    if !pattern.is_empty() {
        let a = by_loop.find_str(range, &pattern);
        let b = by_block.find_str(range, &pattern);
        assert_eq!(a, b, "strategies disagree on {range} for {pattern:?}");
        if !a.value {
            assert_eq!(a.rest, range);
        }
        // A match ending on `end` leaves a cursor with nothing to read.
        let mut cursor = by_block.cursor(range);
        if cursor.find_str(&pattern) && a.exhausted {
            assert!(cursor.is_exhausted());
        }
    }

    // Every line read stays inside the window and the cursor never moves back;
    // once the window is exhausted each read yields a zero-length line.
    let mut cursor = by_block.cursor(range);
    for _ in 0..=range.remaining() + 1 {
        let before = cursor.range();
        let line = cursor.read_line();
        let after = cursor.range();
        assert!(after.is_valid());
        assert!(after.start >= before.start);
        assert_eq!(after.end, before.end);
        assert!(line.offset() >= start);
        assert!(line.offset() + line.len() <= end + 1);
        if before.is_empty() {
            assert!(line.is_empty());
            assert!(cursor.is_exhausted());
        }
    }
}

fuzz_target!(|data: &[u8]| reader(data));
