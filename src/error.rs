use std::backtrace::Backtrace;
use std::error::Error as StdError;
use std::fmt;

/// HTTP method type, re-exported for use with error inspection.
pub use reqwest::Method;
/// HTTP status code type, re-exported for use with error inspection.
pub use reqwest::StatusCode;

#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// Error related to a caller-supplied argument, rejected before any request is sent
    Validation,
    /// The API answered with a well-formed but empty result set
    NoResults,
    /// The response body was empty or could not be parsed as JSON for the expected type
    MalformedResponse,
    /// Error related to non-successful HTTP call
    Status,
    /// Lower-level HTTP failure (connection, TLS, body read)
    Transport,
    /// Internal error from dependencies
    Internal,
}

#[derive(Debug)]
pub struct Error {
    kind: Kind,
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
    context: Vec<String>,
    backtrace: Backtrace,
}

impl Error {
    pub fn with_source<S: StdError + Send + Sync + 'static>(kind: Kind, source: S) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
            context: Vec::new(),
            backtrace: Backtrace::capture(),
        }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }

    pub fn inner(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.source.as_deref()
    }

    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        let e = self.source.as_deref()?;
        e.downcast_ref::<E>()
    }

    /// Call-site descriptions attached to this error, outermost first.
    pub fn context(&self) -> &[String] {
        &self.context
    }

    /// Attaches a description of the operation that failed, e.g. `cannot get Game with ID 7`.
    #[must_use]
    pub fn with_context<S: Into<String>>(mut self, context: S) -> Self {
        self.context.insert(0, context.into());
        self
    }

    pub fn status<S: Into<String>>(
        status_code: StatusCode,
        method: Method,
        path: String,
        message: S,
    ) -> Self {
        Status {
            status_code,
            method,
            path,
            message: message.into(),
        }
        .into()
    }

    #[must_use]
    pub fn no_results(path: String) -> Self {
        NoResults { path }.into()
    }

    pub fn malformed<S: Into<String>>(path: String, reason: S) -> Self {
        MalformedResponse {
            path,
            reason: reason.into(),
        }
        .into()
    }

    pub fn is_no_results(&self) -> bool {
        self.kind == Kind::NoResults
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for context in &self.context {
            write!(f, "{context}: ")?;
        }
        match &self.source {
            Some(src) => write!(f, "{:?}: {}", self.kind, src),
            None => write!(f, "{:?}", self.kind),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn StdError + 'static))
    }
}

/// A caller-supplied value the API would reject. Always raised before a request is built.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidArgument {
    /// IDs are never negative.
    NegativeId { id: i64 },
    /// A list call needs at least one ID.
    EmptyIds,
    /// A search needs a non-blank query.
    EmptyQuery,
    /// A numeric option fell outside the window the API accepts.
    OutOfRange {
        option: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
    /// Any other rejected input.
    Other { reason: String },
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeId { id } => write!(f, "invalid: ID cannot be negative, got {id}"),
            Self::EmptyIds => write!(f, "invalid: ID list cannot be empty"),
            Self::EmptyQuery => write!(f, "invalid: search query cannot be empty"),
            Self::OutOfRange {
                option,
                value,
                min,
                max,
            } => write!(
                f,
                "invalid: {option} {value} is out of range, expected {min}..={max}"
            ),
            Self::Other { reason } => write!(f, "invalid: {reason}"),
        }
    }
}

impl StdError for InvalidArgument {}

#[non_exhaustive]
#[derive(Debug)]
pub struct Status {
    pub status_code: StatusCode,
    pub method: Method,
    pub path: String,
    pub message: String,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "error({}) making {} call to {} with {}",
            self.status_code, self.method, self.path, self.message
        )
    }
}

impl StdError for Status {}

/// The API returned an empty JSON array.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct NoResults {
    pub path: String,
}

impl fmt::Display for NoResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no results returned from {}", self.path)
    }
}

impl StdError for NoResults {}

/// The response body was not valid JSON, or did not match the expected shape.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct MalformedResponse {
    pub path: String,
    pub reason: String,
}

impl fmt::Display for MalformedResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid JSON from {}: {}", self.path, self.reason)
    }
}

impl StdError for MalformedResponse {}

impl From<InvalidArgument> for Error {
    fn from(err: InvalidArgument) -> Self {
        Error::with_source(Kind::Validation, err)
    }
}

impl From<Status> for Error {
    fn from(err: Status) -> Self {
        Error::with_source(Kind::Status, err)
    }
}

impl From<NoResults> for Error {
    fn from(err: NoResults) -> Self {
        Error::with_source(Kind::NoResults, err)
    }
}

impl From<MalformedResponse> for Error {
    fn from(err: MalformedResponse) -> Self {
        Error::with_source(Kind::MalformedResponse, err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::with_source(Kind::Transport, e)
    }
}

impl From<reqwest::header::InvalidHeaderValue> for Error {
    fn from(e: reqwest::header::InvalidHeaderValue) -> Self {
        Error::with_source(Kind::Internal, e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::with_source(Kind::MalformedResponse, e)
    }
}

impl From<serde_html_form::ser::Error> for Error {
    fn from(e: serde_html_form::ser::Error) -> Self {
        Error::with_source(Kind::Internal, e)
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Error::with_source(Kind::Internal, e)
    }
}
