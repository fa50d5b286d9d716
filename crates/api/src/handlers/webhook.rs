//! Handler for inbound SMS/MMS deliveries from Twilio.
//!
//! The provider expects TwiML on success and reads any non-2xx response as a
//! delivery failure, so errors here are plain text rather than JSON.

use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Form;
use serde::Deserialize;

use screenhound_core::classifier::{classify, Classification, InboundMessage};

use crate::state::AppState;
use crate::twiml::MessageReply;

/// Plain-text body returned when a submission cannot be stored.
pub const PROCESSING_ERROR_BODY: &str = "Error processing submission";

/// Form fields posted by the provider. Unlisted fields are ignored.
#[derive(Debug, Deserialize)]
pub struct TwilioWebhook {
    #[serde(rename = "From", default)]
    pub from: String,
    #[serde(rename = "Body", default)]
    pub body: String,
    #[serde(rename = "NumMedia")]
    pub num_media: Option<String>,
    #[serde(rename = "MediaUrl0")]
    pub media_url: Option<String>,
    #[serde(rename = "MediaContentType0")]
    pub media_content_type: Option<String>,
}

impl From<TwilioWebhook> for InboundMessage {
    fn from(hook: TwilioWebhook) -> Self {
        InboundMessage {
            from: hook.from,
            body: hook.body,
            num_media: hook.num_media,
            media_url: hook.media_url,
            media_content_type: hook.media_content_type,
        }
    }
}

/// Failure to persist a webhook submission.
#[derive(Debug)]
pub struct WebhookError(sqlx::Error);

impl IntoResponse for WebhookError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "Failed to store webhook submission");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(CONTENT_TYPE, "text/plain; charset=utf-8")],
            PROCESSING_ERROR_BODY,
        )
            .into_response()
    }
}

/// POST /webhook/twilio
///
/// Classify the message, store it as `pending`, and reply with the
/// auto-acknowledgement.
pub async fn receive_message(
    State(state): State<AppState>,
    Form(payload): Form<TwilioWebhook>,
) -> Result<MessageReply, WebhookError> {
    let message = InboundMessage::from(payload);
    let Classification { submission, reply } = classify(&message);

    let created = state.store.create(&submission).await.map_err(WebhookError)?;

    tracing::info!(
        submission_id = created.id(),
        kind = %created.kind(),
        phone_number = %message.from,
        "Webhook submission stored"
    );

    Ok(MessageReply(reply))
}
