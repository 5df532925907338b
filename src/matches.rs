macro_rules! byte_map {
    {
        $(#[$meta:meta])*
        $vis:vis const fn $fn_id:ident($byte:ident: u8) { $e:expr }
    } => {
        $(#[$meta])*
        $vis const fn $fn_id($byte: u8) -> bool {
            static PAT: [bool; 256] = {
                let mut bytes = [false; 256];
                let mut $byte = 0u8;
                const fn filter($byte: u8) -> bool {
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

// ===== Blocks =====

byte_map! {
    /// unreserved = ALPHA / DIGIT / "-" / "." / "_" / "~"
    #[inline(always)]
    const fn unreserved(byte: u8) {
        byte.is_ascii_alphanumeric()
        || matches!(byte, b'-' | b'.' | b'_' | b'~')
    }
}

byte_map! {
    /// sub-delims = "!" / "$" / "&" / "'" / "(" / ")"
    ///            / "*" / "+" / "," / ";" / "="
    #[inline(always)]
    const fn sub_delims(byte: u8) {
        matches!(
            byte,
            b'!' | b'$' | b'&' | b'\'' | b'(' | b')' | b'*' | b'+' | b',' | b';' | b'='
        )
    }
}

byte_map! {
    /// pchar = unreserved / pct-encoded / sub-delims / ":" / "@"
    #[inline(always)]
    const fn is_pchar(byte: u8) {
        unreserved(byte)
        || matches!(byte, b'%')
        || sub_delims(byte)
        || matches!(byte, b':' | b'@')
    }
}

// ===== lookup table =====

byte_map! {
    /// scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
    #[inline(always)]
    pub(crate) const fn is_scheme(byte: u8) {
        byte.is_ascii_alphanumeric() || matches!(byte, b'+' | b'-' | b'.')
    }
}

byte_map! {
    /// userinfo = *( unreserved / pct-encoded / sub-delims / ":" )
    #[inline(always)]
    pub(crate) const fn is_userinfo(byte: u8) {
        unreserved(byte) || matches!(byte, b'%') || sub_delims(byte) || matches!(byte, b':')
    }
}

byte_map! {
    /// hex / ":" / "."
    ///
    /// the exact syntax of ipv6 is not validated
    #[inline(always)]
    pub(crate) const fn is_ipv6(byte: u8) {
        byte.is_ascii_hexdigit() || matches!(byte, b':' | b'.')
    }
}

byte_map! {
    /// reg-name = *( unreserved / pct-encoded / sub-delims )
    #[inline(always)]
    pub(crate) const fn is_regname(byte: u8) {
        unreserved(byte) || matches!(byte, b'%') || sub_delims(byte)
    }
}

byte_map! {
    /// segment         = *pchar
    /// path-abempty    = *( "/" / segment )
    #[inline(always)]
    pub(crate) const fn is_path(byte: u8) {
        is_pchar(byte) || matches!(byte, b'/')
    }
}

byte_map! {
    /// query = *( pchar / "/" / "?" )
    #[inline(always)]
    pub(crate) const fn is_query(byte: u8) {
        is_pchar(byte) || matches!(byte, b'/' | b'?')
    }
}

/// fragment = *( pchar / "/" / "?" )
#[inline(always)]
pub(crate) const fn is_fragment(byte: u8) -> bool {
    is_query(byte)
}

// ===== Delimiters =====

/// Split around the first '@'.
pub(crate) fn split_at_sign(bytes: &[u8]) -> Option<(&[u8], &[u8])> {
    let mut state = bytes;

    while let [byte, rest @ ..] = state {
        if *byte == b'@' {
            let lead = &bytes[..bytes.len() - state.len()];
            return Some((lead, rest));
        }

        state = rest;
    }

    None
}

#[test]
fn test_split_at_sign() {
    assert!(split_at_sign(b"example.com").is_none());

    let (left, right) = split_at_sign(b"user:passwd@example.com").unwrap();
    assert_eq!(left, b"user:passwd");
    assert_eq!(right, b"example.com");

    let (left, right) = split_at_sign(b"a@b").unwrap();
    assert_eq!(left, b"a");
    assert_eq!(right, b"b");

    let (left, right) = split_at_sign(b"@b").unwrap();
    assert_eq!(left, b"");
    assert_eq!(right, b"b");
}

/// Split around the first ':'.
pub(crate) fn split_colon(bytes: &[u8]) -> Option<(&[u8], &[u8])> {
    let mut state = bytes;

    while let [byte, rest @ ..] = state {
        if *byte == b':' {
            let lead = &bytes[..bytes.len() - state.len()];
            return Some((lead, rest));
        }

        state = rest;
    }

    None
}

#[test]
fn test_split_colon() {
    assert!(split_colon(b"user").is_none());

    let (left, right) = split_colon(b"user:passwd").unwrap();
    assert_eq!(left, b"user");
    assert_eq!(right, b"passwd");

    let (left, right) = split_colon(b"user:pa:ss").unwrap();
    assert_eq!(left, b"user");
    assert_eq!(right, b"pa:ss");
}

/// Split a trailing ':' port off the authority.
///
/// Scans from the end so a bracketed IPv6 host keeps its colons.
pub(crate) fn split_port(bytes: &[u8]) -> Option<(&[u8], &[u8])> {
    let mut at = bytes.len();

    while at > 0 {
        let byte = bytes[at - 1];
        if byte.is_ascii_digit() {
            at -= 1;
        } else if byte == b':' {
            return Some((&bytes[..at - 1], &bytes[at..]));
        } else {
            return None;
        }
    }

    None
}

#[test]
fn test_split_port() {
    assert!(split_port(b"example.com").is_none());
    assert!(split_port(b"[a2f::1]").is_none());

    let (left, right) = split_port(b"example.com:443").unwrap();
    assert_eq!(left, b"example.com");
    assert_eq!(right, b"443");

    let (left, right) = split_port(b"example.com:").unwrap();
    assert_eq!(left, b"example.com");
    assert_eq!(right, b"");

    let (left, right) = split_port(b"[a2f::1]:443").unwrap();
    assert_eq!(left, b"[a2f::1]");
    assert_eq!(right, b"443");
}
