//! Writing formatted bitmaps to streams

use std::io::{self, Write};

use groupreg_core::{format_to_vec, Bitmap};
use tracing::trace;

/// Write a bitmap formatted through `template`, returning the bytes written
pub fn write_bitmap<W: Write>(
    writer: &mut W,
    template: &str,
    bitmap: Option<&Bitmap>,
) -> io::Result<usize> {
    let rendered = format_to_vec(template, bitmap);
    writer.write_all(&rendered)?;
    trace!(template, len = rendered.len(), "wrote bitmap");
    Ok(rendered.len())
}

/// Write a formatted bitmap to standard output
pub fn print_bitmap(template: &str, bitmap: Option<&Bitmap>) -> io::Result<usize> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    write_bitmap(&mut lock, template, bitmap)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_bitmap() {
        let bitmap = Bitmap::from_bits(&[2, 71]).unwrap();
        let mut out = Vec::new();

        assert_eq!(write_bitmap(&mut out, "mask %#x\n", Some(&bitmap)).unwrap(), 26);
        assert_eq!(write_bitmap(&mut out, "[%8b]", None).unwrap(), 10);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "mask 0x800000000000000004\n[  (null)]"
        );
    }

    #[test]
    fn test_long_output_is_not_truncated() {
        let bitmap = Bitmap::from_bits(&[9000]).unwrap();
        let mut out = Vec::new();
        let written = write_bitmap(&mut out, "%b", Some(&bitmap)).unwrap();
        assert_eq!(written, 9001);
        assert_eq!(out.len(), 9001);
        assert_eq!(out[0], b'1');
    }
}
