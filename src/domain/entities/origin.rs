//! Public origin of an incoming request.

use std::fmt;

/// `scheme://host[:port]` of the request being served.
///
/// Content services use it to turn stored image paths into absolute URLs,
/// so links stay valid behind proxies and on any host name the site answers on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOrigin {
    scheme: String,
    host: String,
}

impl RequestOrigin {
    pub fn new(scheme: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            host: host.into(),
        }
    }

    /// Joins a public path (e.g. `/uploads/banner.png`) onto this origin.
    pub fn join(&self, path: &str) -> String {
        format!("{}/{}", self, path.trim_start_matches('/'))
    }
}

impl fmt::Display for RequestOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}", self.scheme, self.host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_display() {
        let origin = RequestOrigin::new("https", "coinvest.example:8443");
        assert_eq!(origin.to_string(), "https://coinvest.example:8443");
    }

    #[test]
    fn test_join_normalizes_leading_slash() {
        let origin = RequestOrigin::new("http", "localhost:3000");

        assert_eq!(
            origin.join("/uploads/a.png"),
            "http://localhost:3000/uploads/a.png"
        );
        assert_eq!(
            origin.join("uploads/a.png"),
            "http://localhost:3000/uploads/a.png"
        );
    }
}
