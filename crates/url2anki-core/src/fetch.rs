//! Single HTTP GET of the source page.
//!
//! Uses the curl crate (libcurl). The whole body is buffered while the easy
//! handle is alive; the handle is dropped before `fetch` returns, so callers
//! only ever hold the in-memory [`Body`].

use std::io::{self, Cursor, Read};

/// Error returned by a [`Fetch`] implementation.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// DNS, TLS, connection or other libcurl failure.
    #[error("transport error: {0}")]
    Transport(#[from] curl::Error),
    /// Any response status other than 200.
    #[error("HTTP {0}")]
    BadStatus(u32),
}

/// Response body of a successful fetch.
#[derive(Debug)]
pub struct Body {
    inner: Cursor<Vec<u8>>,
}

impl Body {
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            inner: Cursor::new(bytes.into()),
        }
    }

    /// Number of bytes in the body.
    pub fn len(&self) -> usize {
        self.inner.get_ref().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Read for Body {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

/// Retrieves the page a scrape runs against.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<Body, FetchError>;
}

/// libcurl-backed fetcher: one GET, redirects followed, no retries and no
/// timeout or header overrides.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurlFetcher;

impl Fetch for CurlFetcher {
    fn fetch(&self, url: &str) -> Result<Body, FetchError> {
        let mut buf: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.get(true)?;
        easy.follow_location(true)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                buf.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        tracing::debug!("GET {} returned HTTP {} ({} bytes)", url, code, buf.len());
        if code != 200 {
            return Err(FetchError::BadStatus(code));
        }

        Ok(Body::from_bytes(buf))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_reads_back_bytes() {
        let mut body = Body::from_bytes(b"<p>hi</p>".to_vec());
        assert_eq!(body.len(), 9);
        let mut out = String::new();
        body.read_to_string(&mut out).unwrap();
        assert_eq!(out, "<p>hi</p>");
    }

    #[test]
    fn bad_status_display() {
        assert_eq!(FetchError::BadStatus(404).to_string(), "HTTP 404");
    }

    #[test]
    fn unresolvable_host_is_transport_error() {
        let err = CurlFetcher
            .fetch("http://url2anki.invalid/")
            .expect_err("host should not resolve");
        assert!(matches!(err, FetchError::Transport(_)));
    }
}
