
/// A possible error value when parsing URI.
#[derive(Clone)]
pub enum UriError {
    /// Input ends before all components parsed.
    Incomplete,
    /// Invalid character found.
    Char,
    /// Port is not a valid port number.
    Port,
}

// ===== Error =====

impl std::error::Error for UriError { }

impl std::fmt::Display for UriError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use UriError::*;
        match self {
            Incomplete => f.write_str("URI incomplete"),
            Char => f.write_str("URI contains invalid character"),
            Port => f.write_str("URI port out of range"),
        }
    }
}

impl std::fmt::Debug for UriError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "\"{self}\"")
    }
}
