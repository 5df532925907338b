use bytes::Bytes;

use crate::{Builder, Uri, UriError};

impl Uri {
    /// Returns the scheme, e.g: `https`.
    ///
    /// Absent when the input carried no explicit scheme, including
    /// scheme-relative input.
    #[inline]
    pub fn scheme(&self) -> Option<&str> {
        as_str(&self.scheme)
    }

    /// Returns the userinfo user, e.g: `user`.
    #[inline]
    pub fn user(&self) -> Option<&str> {
        as_str(&self.user)
    }

    /// Returns the userinfo password.
    #[inline]
    pub fn password(&self) -> Option<&str> {
        as_str(&self.password)
    }

    /// Returns the host, e.g: `example.com`.
    #[inline]
    pub fn host(&self) -> Option<&str> {
        as_str(&self.host)
    }

    /// Returns the port as `str`, e.g: `8080`.
    #[inline]
    pub fn port(&self) -> Option<&str> {
        as_str(&self.port)
    }

    /// Returns the port as integer.
    #[inline]
    pub fn port_u16(&self) -> Option<u16> {
        match self.port() {
            Some(port) => port.parse().ok(),
            None => None,
        }
    }

    /// Returns the path, e.g: `/over/there`.
    #[inline]
    pub fn path(&self) -> Option<&str> {
        as_str(&self.path)
    }

    /// Returns the raw query, e.g: `name=joe&query=4`.
    #[inline]
    pub fn query(&self) -> Option<&str> {
        as_str(&self.query)
    }

    /// Returns the raw fragment, e.g: `anchor`.
    #[inline]
    pub fn fragment(&self) -> Option<&str> {
        as_str(&self.fragment)
    }

    /// Returns a [`Builder`] to assemble a [`Uri`] without parsing.
    #[inline]
    pub fn builder() -> Builder {
        Builder::default()
    }
}

#[inline]
fn as_str(field: &Option<Bytes>) -> Option<&str> {
    match field {
        // SAFETY: precondition, fields hold valid UTF-8
        Some(value) => Some(unsafe { str::from_utf8_unchecked(value) }),
        None => None,
    }
}

// ===== Formatting =====

/// Reassembles the textual form.
///
/// Each component is written in fixed order, preceded by its delimiter,
/// if and only if it is present. Presence is the field being set, not it
/// being non empty, so `query = Some("")` still emits its `?`.
impl std::fmt::Display for Uri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(scheme) = self.scheme() {
            f.write_str(scheme)?;
            f.write_str("://")?;
        }
        if let Some(user) = self.user() {
            f.write_str(user)?;
            f.write_str(":")?;
        }
        if let Some(password) = self.password() {
            f.write_str(password)?;
        }
        if self.user.is_some() || self.password.is_some() {
            f.write_str("@")?;
        }
        if let Some(host) = self.host() {
            f.write_str(host)?;
        }
        if let Some(port) = self.port() {
            f.write_str(":")?;
            f.write_str(port)?;
        }
        if let Some(path) = self.path() {
            f.write_str(path)?;
        }
        if let Some(query) = self.query() {
            f.write_str("?")?;
            f.write_str(query)?;
        }
        if let Some(fragment) = self.fragment() {
            f.write_str("#")?;
            f.write_str(fragment)?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for Uri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{self}\"")
    }
}

impl std::str::FromStr for Uri {
    type Err = UriError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
