//! Input utility functions

use crate::arch::PtrVal;

/// Parse any pointer specification entered in by a user.
///
/// Pointers are hexadecimal, and may be written with a `0x` or `$` prefix
/// (`1234`, `0x1234` and `$1234` all name the same address). Anything that
/// does not fit in 16 bits is rejected.
pub fn parse_ptr(text_str: &str) -> Option<PtrVal> {
    let text_str = text_str.trim();
    let digits = text_str
        .strip_prefix("0x")
        .or_else(|| text_str.strip_prefix("0X"))
        .or_else(|| text_str.strip_prefix('$'))
        .unwrap_or(text_str);

    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    PtrVal::from_str_radix(digits, 16).ok()
}

#[cfg(test)]
mod tests {
    use super::parse_ptr;

    #[test]
    fn parse_bare_hex() {
        assert_eq!(parse_ptr("1234"), Some(0x1234));
        assert_eq!(parse_ptr("ffff"), Some(0xFFFF));
        assert_eq!(parse_ptr("0"), Some(0));
    }

    #[test]
    fn parse_prefixed_hex() {
        assert_eq!(parse_ptr("0x00ff"), Some(0x00FF));
        assert_eq!(parse_ptr("0XABCD"), Some(0xABCD));
        assert_eq!(parse_ptr("$4000"), Some(0x4000));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(parse_ptr(""), None);
        assert_eq!(parse_ptr("0x"), None);
        assert_eq!(parse_ptr("+12"), None);
        assert_eq!(parse_ptr("start"), None);
        assert_eq!(parse_ptr("10000"), None);
    }
}
