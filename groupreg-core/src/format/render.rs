//! Digit emission and field padding for bitmap templates

use alloc::vec::Vec;

use super::directive::{Conversion, Directive, Template};
use crate::bitmap::{Bitmap, Chunk, CHUNK_BITS};

/// Placeholder rendered for a missing bitmap
pub const NULL_PLACEHOLDER: &[u8] = b"(null)";

const LOWER_DIGITS: &[u8; 16] = b"0123456789abcdef";
const UPPER_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Byte destination for rendered output
pub trait Sink {
    /// Append bytes
    fn put(&mut self, bytes: &[u8]);

    /// Append `byte` repeated `count` times
    fn repeat(&mut self, byte: u8, count: usize);
}

impl Sink for Vec<u8> {
    fn put(&mut self, bytes: &[u8]) {
        self.extend_from_slice(bytes);
    }

    fn repeat(&mut self, byte: u8, count: usize) {
        self.resize(self.len() + count, byte);
    }
}

/// Fixed buffer with bounded-formatter semantics
///
/// Keeps the first `len - 1` bytes and counts everything offered, so the
/// untruncated length is known without materializing the output.
#[derive(Debug)]
pub struct BoundedBuf<'a> {
    buf: &'a mut [u8],
    written: usize,
    total: usize,
}

impl<'a> BoundedBuf<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self {
            buf,
            written: 0,
            total: 0,
        }
    }

    fn capacity(&self) -> usize {
        self.buf.len().saturating_sub(1)
    }

    /// NUL-terminate (unless the buffer is empty) and return the
    /// untruncated output length
    pub fn finish(self) -> usize {
        if let Some(terminator) = self.buf.get_mut(self.written) {
            *terminator = 0;
        }
        self.total
    }
}

impl Sink for BoundedBuf<'_> {
    fn put(&mut self, bytes: &[u8]) {
        self.total = self.total.saturating_add(bytes.len());
        let room = self.capacity() - self.written;
        let take = bytes.len().min(room);
        self.buf[self.written..self.written + take].copy_from_slice(&bytes[..take]);
        self.written += take;
    }

    fn repeat(&mut self, byte: u8, count: usize) {
        self.total = self.total.saturating_add(count);
        let room = self.capacity() - self.written;
        let take = count.min(room);
        self.buf[self.written..self.written + take].fill(byte);
        self.written += take;
    }
}

/// Render a parsed template
pub fn render<S: Sink>(template: &Template, bitmap: Option<&Bitmap>, out: &mut S) {
    out.put(&template.prefix);
    match bitmap {
        Some(bitmap) => render_bitmap(&template.directive, bitmap, out),
        None => render_null(&template.directive, out),
    }
    out.put(&template.suffix);
}

/// Render the directive field for a present bitmap
pub fn render_bitmap<S: Sink>(directive: &Directive, bitmap: &Bitmap, out: &mut S) {
    let conversion = directive.conversion;
    let span = bitmap.bit_span();

    let (digits, prefix) = if span == 0 {
        (1, "")
    } else if directive.alternate {
        (conversion.digit_count(span), conversion.alternate_prefix())
    } else {
        (conversion.digit_count(span), "")
    };

    let pad = directive.width.saturating_sub(digits + prefix.len());
    let space_pad = if directive.zero_pad { 0 } else { pad };

    if !directive.left_align {
        out.repeat(b' ', space_pad);
    }
    out.put(prefix.as_bytes());
    if directive.zero_pad {
        out.repeat(b'0', pad);
    }

    push_digits(bitmap, conversion, out);

    if directive.left_align {
        out.repeat(b' ', space_pad);
    }
}

/// Render the directive field for a missing bitmap, as a string field
/// holding `(null)`
///
/// Width pads with spaces on the side selected by `-`; a non-zero
/// precision truncates the placeholder. `#` and `0` have no effect.
pub fn render_null<S: Sink>(directive: &Directive, out: &mut S) {
    let shown = match directive.precision {
        0 => NULL_PLACEHOLDER,
        precision => &NULL_PLACEHOLDER[..precision.min(NULL_PLACEHOLDER.len())],
    };
    let pad = directive.width.saturating_sub(shown.len());

    if !directive.left_align {
        out.repeat(b' ', pad);
    }
    out.put(shown);
    if directive.left_align {
        out.repeat(b' ', pad);
    }
}

/// Most significant chunk without leading zeros, the rest as 8 digits each
fn push_hex<S: Sink>(bitmap: &Bitmap, table: &[u8; 16], out: &mut S) {
    let Some((top, rest)) = bitmap.significant_chunks().split_last() else {
        return;
    };

    let top_digits = (CHUNK_BITS - top.leading_zeros() as usize).div_ceil(4);
    push_hex_chunk(*top, top_digits, table, out);
    for &chunk in rest.iter().rev() {
        push_hex_chunk(chunk, CHUNK_BITS / 4, table, out);
    }
}

fn push_hex_chunk<S: Sink>(chunk: Chunk, digits: usize, table: &[u8; 16], out: &mut S) {
    let mut text = [0u8; CHUNK_BITS / 4];
    for (slot, shift) in text[..digits].iter_mut().zip((0..digits).rev()) {
        *slot = table[((chunk >> (shift * 4)) & 0xf) as usize];
    }
    out.put(&text[..digits]);
}

/// Octal digits from the top bit down
///
/// The accumulator starts with enough phantom high bits that the last digit
/// lands exactly on bit 0.
fn push_octal<S: Sink>(bitmap: &Bitmap, span: usize, out: &mut S) {
    let mut value = 0u8;
    let mut filled = (3 - span % 3) % 3;

    for bit in (0..span).rev() {
        value = (value << 1) | u8::from(bitmap.is_set(bit));
        filled += 1;
        if filled == 3 || bit == 0 {
            out.put(&[b'0' + value]);
            value = 0;
            filled = 0;
        }
    }
}

fn push_binary<S: Sink>(bitmap: &Bitmap, span: usize, out: &mut S) {
    for bit in (0..span).rev() {
        out.put(if bitmap.is_set(bit) { b"1" } else { b"0" });
    }
}

/// Digits only, no prefix or padding
pub fn push_digits<S: Sink>(bitmap: &Bitmap, conversion: Conversion, out: &mut S) {
    let span = bitmap.bit_span();
    if span == 0 {
        out.put(b"0");
        return;
    }
    match conversion {
        Conversion::LowerHex => push_hex(bitmap, LOWER_DIGITS, out),
        Conversion::UpperHex => push_hex(bitmap, UPPER_DIGITS, out),
        Conversion::Octal => push_octal(bitmap, span, out),
        Conversion::LowerBinary | Conversion::UpperBinary => push_binary(bitmap, span, out),
    }
}
