//! Bitmap formatting
//!
//! Renders a bitmap as a hexadecimal, octal or binary magnitude through a
//! printf-style template (see [`directive`] for the template language).
//! [`format_bitmap`] follows bounded-buffer formatter semantics: the output
//! is truncated to fit, always NUL-terminated when the buffer is non-empty,
//! and the return value is the length the full output would have had.
//!
//! Bitmaps also implement the standard radix formatting traits, which use
//! Rust's own flag semantics rather than the template language.

pub mod directive;
pub mod render;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::bitmap::Bitmap;
pub use directive::{Conversion, Directive, Template};
pub use render::{BoundedBuf, Sink};

/// Format a bitmap into `buf`
///
/// Writes at most `buf.len() - 1` bytes followed by a NUL and returns the
/// untruncated length. An empty `buf` is left untouched. A missing bitmap
/// renders as `(null)` under the directive's width and precision.
pub fn format_bitmap(buf: &mut [u8], template: &str, bitmap: Option<&Bitmap>) -> usize {
    let template = Template::parse(template);
    let mut out = BoundedBuf::new(buf);
    render::render(&template, bitmap, &mut out);
    out.finish()
}

/// Format a bitmap into a new byte vector
pub fn format_to_vec(template: &str, bitmap: Option<&Bitmap>) -> Vec<u8> {
    let template = Template::parse(template);
    let mut out = Vec::with_capacity(template.prefix.len() + template.suffix.len() + 16);
    render::render(&template, bitmap, &mut out);
    out
}

/// Format a bitmap into a new string
pub fn format_to_string(template: &str, bitmap: Option<&Bitmap>) -> String {
    match String::from_utf8(format_to_vec(template, bitmap)) {
        Ok(text) => text,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    }
}

macro_rules! impl_radix_fmt {
    ($($trait:ident => $conversion:expr, $prefix:literal;)*) => {$(
        impl fmt::$trait for Bitmap {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let mut digits = Vec::new();
                render::push_digits(self, $conversion, &mut digits);
                let digits = core::str::from_utf8(&digits).map_err(|_| fmt::Error)?;
                f.pad_integral(true, $prefix, digits)
            }
        }
    )*};
}

impl_radix_fmt! {
    LowerHex => Conversion::LowerHex, "0x";
    UpperHex => Conversion::UpperHex, "0x";
    Octal => Conversion::Octal, "0o";
    Binary => Conversion::LowerBinary, "0b";
}
