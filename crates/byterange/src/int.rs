//! Fixed-width big-endian integers.
//!
//! Byte 0 of the window is the most significant byte. Decoding goes through
//! `from_be_bytes` on unsigned byte arrays, so no sign extension leaks in from
//! individual bytes; only the top bit of the whole value determines the sign.

mod sealed {
    pub trait Sealed {}
}

/// An integer type that can be decoded from the front of a range.
///
/// Implemented for `i8`, `i16`, `i32`, `i64` and their unsigned
/// counterparts. Sealed.
pub trait BigEndian: sealed::Sealed + Copy {
    /// Number of bytes consumed by one read.
    const WIDTH: usize;
    /// Operation tag used in errors and trace records.
    const OP: &'static str;

    /// Decodes the first [`Self::WIDTH`] bytes of `bytes`.
    ///
    /// Callers guarantee `bytes.len() >= Self::WIDTH`.
    fn from_be_slice(bytes: &[u8]) -> Self;

    /// Lossless widening for trace records.
    fn widen(self) -> i128;
}

macro_rules! big_endian {
    ($($ty:ty => $op:literal),* $(,)?) => {$(
        impl sealed::Sealed for $ty {}

        impl BigEndian for $ty {
            const WIDTH: usize = size_of::<$ty>();
            const OP: &'static str = $op;

            #[inline]
            fn from_be_slice(bytes: &[u8]) -> Self {
                let mut raw = [0u8; size_of::<$ty>()];
                raw.copy_from_slice(&bytes[..size_of::<$ty>()]);
                <$ty>::from_be_bytes(raw)
            }

            #[inline]
            fn widen(self) -> i128 {
                i128::from(self)
            }
        }
    )*};
}

big_endian! {
    i64 => "read_i64",
    i32 => "read_i32",
    i16 => "read_i16",
    i8 => "read_i8",
    u64 => "read_u64",
    u32 => "read_u32",
    u16 => "read_u16",
    u8 => "read_u8",
}
