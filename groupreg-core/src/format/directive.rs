//! Template parsing for bitmap formatting
//!
//! A template holds literal text around at most one conversion directive:
//!
//! ```text
//! prefix-text %[#][-][+][0][width][.precision][conversion] suffix-text
//! ```
//!
//! Flags are only recognized in the order shown, each at most once. In the
//! prefix `%%` is a literal percent and the first other `%` starts the
//! directive. In the suffix `%%` is a literal percent and a lone `%` is
//! dropped.

use alloc::vec::Vec;

/// Upper bound for parsed width and precision
pub const MAX_FIELD_WIDTH: usize = i32::MAX as usize;

/// Digit system selected by the conversion character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Conversion {
    /// `x`, and any unrecognized letter
    #[default]
    LowerHex,
    /// `X`
    UpperHex,
    /// `o` or `O`
    Octal,
    /// `b`
    LowerBinary,
    /// `B`
    UpperBinary,
}

impl Conversion {
    /// Map a conversion letter; anything unrecognized renders as hex
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            b'X' => Conversion::UpperHex,
            b'o' | b'O' => Conversion::Octal,
            b'b' => Conversion::LowerBinary,
            b'B' => Conversion::UpperBinary,
            _ => Conversion::LowerHex,
        }
    }

    /// Bits encoded per digit
    pub const fn bits_per_digit(self) -> usize {
        match self {
            Conversion::LowerHex | Conversion::UpperHex => 4,
            Conversion::Octal => 3,
            Conversion::LowerBinary | Conversion::UpperBinary => 1,
        }
    }

    /// Digits needed for a magnitude of `bit_span` bits
    pub const fn digit_count(self, bit_span: usize) -> usize {
        bit_span.div_ceil(self.bits_per_digit())
    }

    /// Prefix emitted by the `#` flag
    pub const fn alternate_prefix(self) -> &'static str {
        match self {
            Conversion::LowerHex => "0x",
            Conversion::UpperHex => "0X",
            Conversion::Octal => "0",
            Conversion::LowerBinary => "0b",
            Conversion::UpperBinary => "0B",
        }
    }
}

/// Parsed conversion directive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Directive {
    /// `#`: emit the radix prefix
    pub alternate: bool,
    /// `-`: pad on the right
    pub left_align: bool,
    /// `0`: pad with zeros after the prefix
    pub zero_pad: bool,
    /// Minimum field width
    pub width: usize,
    /// Precision; only applied to the `(null)` placeholder, zero means none
    pub precision: usize,
    pub conversion: Conversion,
}

/// A template split into its literal parts and the directive
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Template {
    /// Literal text before the directive, with `%%` unescaped
    pub prefix: Vec<u8>,
    pub directive: Directive,
    /// Literal text after the directive, with escapes resolved
    pub suffix: Vec<u8>,
}

impl Template {
    /// Parse a template
    ///
    /// Parsing never fails: a template without a directive yields default
    /// directive fields, so the bitmap is rendered after the literal text.
    pub fn parse(template: &str) -> Self {
        let bytes = template.as_bytes();
        let mut pos = 0;

        let mut prefix = Vec::new();
        while let Some(&byte) = bytes.get(pos) {
            if byte == b'%' {
                if bytes.get(pos + 1) != Some(&b'%') {
                    break;
                }
                pos += 1;
            }
            prefix.push(byte);
            pos += 1;
        }

        let (directive, consumed) = Directive::parse(&bytes[pos..]);
        pos += consumed;

        let mut suffix = Vec::with_capacity(bytes.len() - pos);
        while let Some(&byte) = bytes.get(pos) {
            if byte == b'%' {
                pos += 1;
                match bytes.get(pos) {
                    Some(&next) => suffix.push(next),
                    None => break,
                }
            } else {
                suffix.push(byte);
            }
            pos += 1;
        }

        Self {
            prefix,
            directive,
            suffix,
        }
    }
}

impl Directive {
    /// Parse a directive at the start of `bytes`, returning it with the
    /// number of bytes consumed
    ///
    /// The leading `%` is optional so that an exhausted template still
    /// yields a default directive.
    pub fn parse(bytes: &[u8]) -> (Self, usize) {
        let mut directive = Directive::default();
        let mut pos = 0;

        let accept = |pos: &mut usize, wanted: u8| {
            if bytes.get(*pos) == Some(&wanted) {
                *pos += 1;
                true
            } else {
                false
            }
        };

        accept(&mut pos, b'%');
        directive.alternate = accept(&mut pos, b'#');
        directive.left_align = accept(&mut pos, b'-');
        accept(&mut pos, b'+');
        directive.zero_pad = accept(&mut pos, b'0');

        let (width, digits) = parse_decimal(&bytes[pos..]);
        directive.width = width;
        pos += digits;

        if accept(&mut pos, b'.') {
            let (precision, digits) = parse_decimal(&bytes[pos..]);
            directive.precision = precision;
            pos += digits;
        }

        if let Some(&byte) = bytes.get(pos) {
            if byte.is_ascii_alphabetic() {
                directive.conversion = Conversion::from_byte(byte);
                pos += 1;
            }
        }

        (directive, pos)
    }
}

/// Parse leading ASCII digits, saturating at [`MAX_FIELD_WIDTH`]
fn parse_decimal(bytes: &[u8]) -> (usize, usize) {
    let mut value: usize = 0;
    let mut consumed = 0;

    for &byte in bytes {
        if !byte.is_ascii_digit() {
            break;
        }
        let digit = (byte - b'0') as usize;
        value = value
            .saturating_mul(10)
            .saturating_add(digit)
            .min(MAX_FIELD_WIDTH);
        consumed += 1;
    }

    (value, consumed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags_in_order() {
        let (directive, consumed) = Directive::parse(b"%#-+012.3Xtail");
        assert_eq!(consumed, 10);
        assert_eq!(
            directive,
            Directive {
                alternate: true,
                left_align: true,
                zero_pad: true,
                width: 12,
                precision: 3,
                conversion: Conversion::UpperHex,
            }
        );

        // out-of-order flags are not flags: '#' after '-' ends the directive
        let (directive, consumed) = Directive::parse(b"%-#x");
        assert_eq!(consumed, 2);
        assert!(directive.left_align);
        assert!(!directive.alternate);
        assert_eq!(directive.conversion, Conversion::LowerHex);
    }

    #[test]
    fn test_parse_conversion() {
        assert_eq!(Directive::parse(b"%o").0.conversion, Conversion::Octal);
        assert_eq!(Directive::parse(b"%O").0.conversion, Conversion::Octal);
        assert_eq!(Directive::parse(b"%b").0.conversion, Conversion::LowerBinary);
        assert_eq!(Directive::parse(b"%B").0.conversion, Conversion::UpperBinary);
        // unknown letters are consumed and render as hex
        assert_eq!(Directive::parse(b"%q"), (Directive::default(), 2));
        // non-letters are not consumed
        assert_eq!(Directive::parse(b"%5 x").1, 2);
        assert_eq!(Directive::parse(b""), (Directive::default(), 0));
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal(b"0"), (0, 1));
        assert_eq!(parse_decimal(b"123x"), (123, 3));
        assert_eq!(parse_decimal(b"x"), (0, 0));
        assert_eq!(
            parse_decimal(b"99999999999999999999999999"),
            (MAX_FIELD_WIDTH, 26)
        );
    }

    #[test]
    fn test_template_split() {
        let template = Template::parse("100%% of %#x is 50%% of %d%");
        assert_eq!(template.prefix, b"100% of ");
        assert!(template.directive.alternate);
        assert_eq!(template.suffix, b" is 50% of d");

        let template = Template::parse("no directive");
        assert_eq!(template.prefix, b"no directive");
        assert_eq!(template.directive, Directive::default());
        assert!(template.suffix.is_empty());

        let template = Template::parse("trailing %");
        assert_eq!(template.prefix, b"trailing ");
        assert!(template.suffix.is_empty());
    }

    #[test]
    fn test_digit_count() {
        assert_eq!(Conversion::LowerHex.digit_count(3), 1);
        assert_eq!(Conversion::LowerHex.digit_count(72), 18);
        assert_eq!(Conversion::Octal.digit_count(72), 24);
        assert_eq!(Conversion::Octal.digit_count(4), 2);
        assert_eq!(Conversion::LowerBinary.digit_count(3), 3);
    }
}
