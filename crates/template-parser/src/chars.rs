//! Code point classification used by the tokenizer.

/// Tab, line feed, form feed, carriage return or space.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\x0C' | '\r' | ' ')
}

#[inline]
pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

#[inline]
pub fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

#[inline]
pub fn is_letter_or_digit(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// C0 controls and the C1 block (`U+007F..=U+009F`).
#[inline]
pub fn is_control(cp: u32) -> bool {
    cp <= 0x1F || (0x7F..=0x9F).contains(&cp)
}

/// Control characters that are not also whitespace or NUL.
#[inline]
pub fn is_disallowed_control(cp: u32) -> bool {
    is_control(cp) && cp != 0 && !matches!(cp, 0x09 | 0x0A | 0x0C | 0x0D | 0x20)
}

#[inline]
pub fn is_surrogate(cp: u32) -> bool {
    (0xD800..=0xDFFF).contains(&cp)
}

/// `U+FDD0..=U+FDEF` and the last two code points of every plane.
#[inline]
pub fn is_noncharacter(cp: u32) -> bool {
    (0xFDD0..=0xFDEF).contains(&cp) || ((cp & 0xFFFE) == 0xFFFE && cp <= 0x10FFFF)
}

/// Replacement for numeric references into the C1 block, per the
/// windows-1252 mapping browsers apply.
pub fn c1_replacement(cp: u32) -> Option<char> {
    let c = match cp {
        0x80 => '\u{20AC}',
        0x82 => '\u{201A}',
        0x83 => '\u{0192}',
        0x84 => '\u{201E}',
        0x85 => '\u{2026}',
        0x86 => '\u{2020}',
        0x87 => '\u{2021}',
        0x88 => '\u{02C6}',
        0x89 => '\u{2030}',
        0x8A => '\u{0160}',
        0x8B => '\u{2039}',
        0x8C => '\u{0152}',
        0x8E => '\u{017D}',
        0x91 => '\u{2018}',
        0x92 => '\u{2019}',
        0x93 => '\u{201C}',
        0x94 => '\u{201D}',
        0x95 => '\u{2022}',
        0x96 => '\u{2013}',
        0x97 => '\u{2014}',
        0x98 => '\u{02DC}',
        0x99 => '\u{2122}',
        0x9A => '\u{0161}',
        0x9B => '\u{203A}',
        0x9C => '\u{0153}',
        0x9E => '\u{017E}',
        0x9F => '\u{0178}',
        _ => return None,
    };
    Some(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_excludes_vertical_tab() {
        assert!(is_whitespace('\x0C'));
        assert!(!is_whitespace('\x0B'));
    }

    #[test]
    fn test_noncharacters() {
        assert!(is_noncharacter(0xFDD0));
        assert!(is_noncharacter(0xFFFF));
        assert!(is_noncharacter(0x10FFFE));
        assert!(!is_noncharacter(0xFFFD));
    }

    #[test]
    fn test_disallowed_control() {
        assert!(is_disallowed_control(0x01));
        assert!(is_disallowed_control(0x85));
        assert!(!is_disallowed_control(0x0A));
        assert!(!is_disallowed_control(0x00));
    }

    #[test]
    fn test_c1_replacement() {
        assert_eq!(c1_replacement(0x80), Some('€'));
        assert_eq!(c1_replacement(0x81), None);
    }
}
