//! Render bitmaps through printf-style templates, including truncation

use groupreg::{format_bitmap, format_to_string, Bitmap};

fn main() -> groupreg::Result<()> {
    let bitmap = Bitmap::from_bits(&[2, 71])?;

    println!("Bits set: {:?}", bitmap.ones().collect::<Vec<_>>());
    for template in ["%x", "%#X", "%o", "%#o", "%b", "[%30x]", "[%-30x]", "[%#030x]"] {
        println!("   {template:<10} -> {}", format_to_string(template, Some(&bitmap)));
    }

    println!("\nMissing bitmap:");
    println!("   {}", format_to_string("hello %x goodbye", None));

    println!("\nTruncated output:");
    let mut buf = [0u8; 8];
    let needed = format_bitmap(&mut buf, "%#x", Some(&bitmap));
    let shown = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    println!(
        "   buffer of {} bytes holds {:?}, full output needs {needed}",
        buf.len(),
        String::from_utf8_lossy(&buf[..shown])
    );

    Ok(())
}
