// ABOUTME: Error types for the onthisday query pipeline, an ErrorCode enum and a QueryError struct.
// ABOUTME: Only transport failures and out-of-range query parameters cross the query boundary.

use std::fmt;

/// Error codes representing the categories of query failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    InvalidDate,
    Fetch,
    Timeout,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::InvalidDate => "invalid date",
            ErrorCode::Fetch => "fetch error",
            ErrorCode::Timeout => "timeout",
        };
        write!(f, "{}", s)
    }
}

/// The main error type for query operations.
#[derive(Debug, thiserror::Error)]
pub struct QueryError {
    pub code: ErrorCode,
    pub url: String,
    pub op: String,
    #[source]
    pub source: Option<anyhow::Error>,
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "onthisday: {} {}: {}", self.op, self.url, self.code)?;
        if let Some(ref src) = self.source {
            write!(f, ": {}", src)?;
        }
        Ok(())
    }
}

impl QueryError {
    /// Create an InvalidDate error.
    pub fn invalid_date(
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self {
            code: ErrorCode::InvalidDate,
            url: url.into(),
            op: op.into(),
            source,
        }
    }

    /// Create a Fetch error.
    pub fn fetch(
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self {
            code: ErrorCode::Fetch,
            url: url.into(),
            op: op.into(),
            source,
        }
    }

    /// Create a Timeout error.
    pub fn timeout(
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self {
            code: ErrorCode::Timeout,
            url: url.into(),
            op: op.into(),
            source,
        }
    }

    /// Returns true if this is an InvalidDate error.
    pub fn is_invalid_date(&self) -> bool {
        self.code == ErrorCode::InvalidDate
    }

    /// Returns true if this is a Fetch error.
    pub fn is_fetch(&self) -> bool {
        self.code == ErrorCode::Fetch
    }

    /// Returns true if this is a Timeout error.
    pub fn is_timeout(&self) -> bool {
        self.code == ErrorCode::Timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_op_url_and_code() {
        let err = QueryError::fetch(
            "https://en.wikipedia.org/wiki/July_20",
            "Query",
            Some(anyhow::anyhow!("HTTP 503")),
        );
        let msg = err.to_string();
        assert!(msg.contains("Query"), "got: {}", msg);
        assert!(msg.contains("July_20"), "got: {}", msg);
        assert!(msg.contains("fetch error"), "got: {}", msg);
        assert!(msg.contains("HTTP 503"), "got: {}", msg);
    }

    #[test]
    fn code_predicates() {
        assert!(QueryError::timeout("u", "op", None).is_timeout());
        assert!(QueryError::fetch("u", "op", None).is_fetch());
        assert!(QueryError::invalid_date("u", "op", None).is_invalid_date());
        assert!(!QueryError::fetch("u", "op", None).is_timeout());
    }
}
