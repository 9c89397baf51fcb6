use crate::exchange::{IncomingRequest, RecordedResponse, RouteResponse};
use crate::router::Params;
use http::StatusCode;
use serde_json::json;
use std::sync::Arc;

/// Handler that answers `200` with a JSON description of what was matched.
///
/// The body carries the handler name it was registered under, the request
/// method and url, and the captured path params.
pub fn echo_handler(
    handler_name: impl Into<Arc<str>>,
) -> impl Fn(&IncomingRequest, &mut RecordedResponse, &Params) + Send + Sync + 'static {
    let handler_name: Arc<str> = handler_name.into();
    move |req, res, params| {
        let body = json!({
            "handler": handler_name.as_ref(),
            "method": req.method,
            "url": req.url,
            "params": params,
        });
        res.write_status(StatusCode::OK);
        res.write_body(&body.to_string());
        res.end();
    }
}
