//! Minimal TwiML rendering for webhook replies.

use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};

/// A `<Response><Message>` reply sent back to the SMS provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageReply(pub String);

impl MessageReply {
    /// Render the TwiML document. The message text is XML-escaped.
    pub fn render(&self) -> String {
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?><Response><Message>{}</Message></Response>",
            html_escape::encode_text(&self.0)
        )
    }
}

impl IntoResponse for MessageReply {
    fn into_response(self) -> Response {
        ([(CONTENT_TYPE, "text/xml")], self.render()).into_response()
    }
}
