use bytes::Bytes;

use crate::log::{debug, trace};
use crate::{Uri, UriError, matches};

/// Placeholder scheme injected so the splitter accepts authority-leading
/// input. A bare authority is ambiguous to the splitter without an
/// explicit scheme in front of it.
const DEFAULT_SCHEME: &str = "http";

const SCHEME_SEPARATOR: &str = "://";
const RELATIVE_SCHEME: &str = "//";

impl Uri {
    /// Parse a URI.
    ///
    /// Leading and trailing whitespace is ignored. Input without a scheme
    /// (`example.com/path`) or with a relative scheme (`//example.com/path`)
    /// is accepted, and `scheme` is reported absent for both.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if the input cannot be structurally decomposed,
    /// e.g. a non numeric port or an invalid character.
    pub fn parse(raw: &str) -> Result<Self, UriError> {
        let trimmed = raw.trim();

        let scheme_relative = trimmed.starts_with(RELATIVE_SCHEME);
        let no_scheme = !scheme_relative && !trimmed.contains(SCHEME_SEPARATOR);

        let value = if no_scheme || scheme_relative {
            debug!("no scheme in {trimmed:?}, injecting {DEFAULT_SCHEME:?}");
            let sep = if scheme_relative { ":" } else { SCHEME_SEPARATOR };
            let mut prefixed =
                String::with_capacity(DEFAULT_SCHEME.len() + sep.len() + trimmed.len());
            prefixed.push_str(DEFAULT_SCHEME);
            prefixed.push_str(sep);
            prefixed.push_str(trimmed);
            Bytes::from(prefixed)
        } else {
            Bytes::copy_from_slice(trimmed.as_bytes())
        };

        let mut uri = split(value)?;

        // the injected scheme is an artifact of the workaround, not input
        if no_scheme || scheme_relative {
            uri.scheme = None;
        }

        trace!("parsed {uri:?}");
        Ok(uri)
    }
}

// ===== Logic =====

/// RFC3986 split of a fully qualified URI.
///
/// Components are zero-copy slices of `value`. All fields are sliced from
/// `value`, which is checked UTF-8, upholding the field invariant.
fn split(value: Bytes) -> Result<Uri, UriError> {
    let mut uri = Uri::default();
    let bytes: &[u8] = &value;

    // scheme
    let mut len = 0;
    loop {
        match bytes.get(len).copied() {
            Some(b':') => break,
            Some(byte) if matches::is_scheme(byte) => len += 1,
            Some(_) => return Err(UriError::Char),
            None => return Err(UriError::Incomplete),
        }
    }
    if len == 0 {
        return Err(UriError::Incomplete);
    }
    uri.scheme = Some(value.slice_ref(&bytes[..len]));

    // hier-part: an authority only follows "//"
    let rest = &bytes[len + 1..];
    let rest = if let [b'/', b'/', after @ ..] = rest {
        let end = after
            .iter()
            .position(|&byte| matches!(byte, b'/' | b'?' | b'#'))
            .unwrap_or(after.len());
        split_authority(&mut uri, &value, &after[..end])?;
        &after[end..]
    } else {
        rest
    };

    // path
    let mut len = 0;
    loop {
        match rest.get(len).copied() {
            Some(b'?' | b'#') | None => break,
            Some(byte) if matches::is_path(byte) => len += 1,
            Some(_) => return Err(UriError::Char),
        }
    }
    if len != 0 {
        uri.path = Some(value.slice_ref(&rest[..len]));
    }
    let rest = &rest[len..];

    // query
    let rest = if let [b'?', after @ ..] = rest {
        let mut len = 0;
        loop {
            match after.get(len).copied() {
                Some(b'#') | None => break,
                Some(byte) if matches::is_query(byte) => len += 1,
                Some(_) => return Err(UriError::Char),
            }
        }
        uri.query = Some(value.slice_ref(&after[..len]));
        &after[len..]
    } else {
        rest
    };

    // fragment
    if let [b'#', after @ ..] = rest {
        let mut state = after;
        while let [byte, tail @ ..] = state {
            if !matches::is_fragment(*byte) {
                return Err(UriError::Char);
            }
            state = tail;
        }
        uri.fragment = Some(value.slice_ref(after));
    }

    Ok(uri)
}

/// Split `user:password@host:port` into its four fields.
fn split_authority(uri: &mut Uri, value: &Bytes, authority: &[u8]) -> Result<(), UriError> {
    if authority.is_empty() {
        return Ok(());
    }

    let mut host = authority;

    // userinfo
    if let Some((userinfo, rest)) = matches::split_at_sign(host) {
        host = rest;

        let mut state = userinfo;
        while let [byte, tail @ ..] = state {
            if !matches::is_userinfo(*byte) {
                return Err(UriError::Char);
            }
            state = tail;
        }

        match matches::split_colon(userinfo) {
            Some((user, password)) => {
                uri.user = Some(value.slice_ref(user));
                uri.password = Some(value.slice_ref(password));
            }
            None => uri.user = Some(value.slice_ref(userinfo)),
        }
    }

    // port
    if let Some((rest, port)) = matches::split_port(host) {
        host = rest;

        if port.len() > 5 {
            return Err(UriError::Port);
        }
        let mut number: u32 = 0;
        let mut state = port;
        while let [byte, tail @ ..] = state {
            // split_port only yields ascii digits
            number = number * 10 + (*byte - b'0') as u32;
            state = tail;
        }
        if number > u16::MAX as u32 {
            return Err(UriError::Port);
        }

        uri.port = Some(value.slice_ref(port));
    }

    // host
    if let [b'[', ip @ .., b']'] = host {
        let mut state = ip;
        while let [byte, tail @ ..] = state {
            if !matches::is_ipv6(*byte) {
                return Err(UriError::Char);
            }
            state = tail;
        }
    } else {
        let mut state = host;
        while let [byte, tail @ ..] = state {
            if !matches::is_regname(*byte) {
                return Err(UriError::Char);
            }
            state = tail;
        }
    }
    if !host.is_empty() {
        uri.host = Some(value.slice_ref(host));
    }

    Ok(())
}
