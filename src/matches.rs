macro_rules! byte_map {
    // ===== 256 lookup table =====
    {
        $(#[$meta:meta])*
        $vis:vis const fn $fn_id:ident($byte:ident:$u8:ty) { $e:expr }
    } => {
        $(#[$meta])*
        $vis const fn $fn_id($byte: $u8) -> bool {
            static PAT: [bool; 256] = {
                let mut bytes = [false; 256];
                let mut $byte = 0u8;
                const fn filter($byte: $u8) -> bool {
                    $e
                }
                loop {
                    bytes[$byte as usize] = filter($byte);
                    if $byte == 255 {
                        break;
                    }
                    $byte += 1;
                }
                bytes
            };
            PAT[$byte as usize]
        }
    };
}

byte_map! {
    /// token   = 1*tchar
    /// tchar   = "!" / "#" / "$" / "%" / "&" / "'" / "*"
    ///         / "+" / "-" / "." / "^" / "_" / "`" / "|" / "~"
    ///         / DIGIT / ALPHA
    #[inline(always)]
    pub const fn is_token(byte: u8) {
        matches!(
            byte,
            | b'!' | b'#' | b'$' | b'%' | b'&' | b'\'' | b'*'
            | b'+' | b'-' | b'.' | b'^' | b'_' | b'`' | b'|' | b'~'
            | b'0'..=b'9' | b'a'..=b'z' | b'A'..=b'Z'
        )
    }
}

byte_map! {
    /// Visible ASCII, SP and HTAB. Control bytes and obs-text are rejected.
    #[inline(always)]
    pub const fn is_header_value(byte: u8) {
        matches!(byte, b'\t' | b' '..=b'~')
    }
}

pub const CRLF: &[u8; 2] = b"\r\n";

/// Returns the index of the first `\r\n` in `bytes`.
pub fn find_crlf(bytes: &[u8]) -> Option<usize> {
    let mut offset = 0;
    let mut state = bytes;

    while let Some(nth) = state.iter().position(|&b| b == b'\r') {
        match state.get(nth + 1) {
            Some(b'\n') => return Some(offset + nth),
            // a lone trailing `\r`, the `\n` may arrive in the next read
            None => return None,
            Some(_) => {
                offset += nth + 1;
                state = &state[nth + 1..];
            }
        }
    }

    None
}

/// Returns `true` if `bytes` starts with `\r\n`.
#[inline]
pub fn starts_with_crlf(bytes: &[u8]) -> bool {
    matches!(bytes.first_chunk::<2>(), Some(CRLF))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_find_crlf() {
        assert_eq!(find_crlf(b""), None);
        assert_eq!(find_crlf(b"GET / HTTP/1.1"), None);
        assert_eq!(find_crlf(b"GET / HTTP/1.1\r"), None);
        assert_eq!(find_crlf(b"GET / HTTP/1.1\r\n"), Some(14));
        assert_eq!(find_crlf(b"\r\n"), Some(0));
        assert_eq!(find_crlf(b"a\rb\r\n"), Some(3));
        assert_eq!(find_crlf(b"\r\r\n"), Some(1));
        assert_eq!(find_crlf(b"a\nb"), None);
    }

    #[test]
    fn test_byte_map() {
        assert!(is_token(b'G'));
        assert!(is_token(b'~'));
        assert!(!is_token(b' '));
        assert!(!is_token(b':'));
        assert!(!is_token(0x80));

        assert!(is_header_value(b' '));
        assert!(is_header_value(b'\t'));
        assert!(!is_header_value(b'\r'));
        assert!(!is_header_value(b'\n'));
        assert!(!is_header_value(0));
        assert!(!is_header_value(0x80));
    }
}
