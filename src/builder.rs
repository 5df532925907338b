use bytes::Bytes;

use crate::Uri;

/// Builder to assemble a [`Uri`] without parsing.
///
/// No validation is performed, the finished value formats whatever was
/// set. Setting a component to an empty string makes it present, its
/// delimiter is emitted.
#[derive(Debug, Default)]
pub struct Builder {
    uri: Uri,
}

impl Builder {
    /// Set the scheme.
    pub fn scheme(mut self, scheme: &str) -> Self {
        self.uri.scheme = Some(copy(scheme));
        self
    }

    /// Set the userinfo user.
    pub fn user(mut self, user: &str) -> Self {
        self.uri.user = Some(copy(user));
        self
    }

    /// Set the userinfo password.
    pub fn password(mut self, password: &str) -> Self {
        self.uri.password = Some(copy(password));
        self
    }

    /// Set the host.
    pub fn host(mut self, host: &str) -> Self {
        self.uri.host = Some(copy(host));
        self
    }

    /// Set the port.
    pub fn port(mut self, port: &str) -> Self {
        self.uri.port = Some(copy(port));
        self
    }

    /// Set the path.
    pub fn path(mut self, path: &str) -> Self {
        self.uri.path = Some(copy(path));
        self
    }

    /// Set the raw query.
    pub fn query(mut self, query: &str) -> Self {
        self.uri.query = Some(copy(query));
        self
    }

    /// Set the raw fragment.
    pub fn fragment(mut self, fragment: &str) -> Self {
        self.uri.fragment = Some(copy(fragment));
        self
    }

    /// Finish the [`Uri`].
    pub fn build(self) -> Uri {
        self.uri
    }
}

#[inline]
fn copy(value: &str) -> Bytes {
    Bytes::copy_from_slice(value.as_bytes())
}
