use http::StatusCode;

/// The two operations the dispatcher performs on a response.
///
/// On a miss the dispatcher calls `write_status(404)` followed by `end()`,
/// once each. On a hit it leaves the response to the handler.
pub trait RouteResponse {
    fn write_status(&mut self, status: StatusCode);
    fn end(&mut self);
}

/// In-memory response that records what was done to it.
///
/// Handy for tests and for tools that want to inspect a dispatch outcome
/// instead of writing it to a socket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordedResponse {
    status: Option<StatusCode>,
    body: String,
    end_calls: usize,
}

impl RecordedResponse {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append text to the body.
    pub fn write_body(&mut self, chunk: &str) {
        self.body.push_str(chunk);
    }

    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        self.status
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// How many times `end()` was called.
    #[must_use]
    pub fn end_calls(&self) -> usize {
        self.end_calls
    }

    #[must_use]
    pub fn is_ended(&self) -> bool {
        self.end_calls > 0
    }
}

impl RouteResponse for RecordedResponse {
    fn write_status(&mut self, status: StatusCode) {
        self.status = Some(status);
    }

    fn end(&mut self) {
        self.end_calls += 1;
    }
}

/// A built `http::Response` is complete by construction; `end` is a no-op.
impl<B> RouteResponse for http::Response<B> {
    fn write_status(&mut self, status: StatusCode) {
        *self.status_mut() = status;
    }

    fn end(&mut self) {}
}
