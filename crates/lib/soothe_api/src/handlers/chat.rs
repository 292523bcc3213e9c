//! Chat endpoint.

use axum::Json;
use axum::extract::rejection::FormRejection;
use axum::extract::{Form, State};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::AppState;

/// Form body of `POST /chat`.
#[derive(Debug, Default, Deserialize)]
pub struct ChatForm {
    pub message: Option<String>,
}

/// JSON body returned by `POST /chat`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatResponse {
    pub reply: String,
}

/// `POST /chat`: reply to a form-encoded `message`.
///
/// Always answers `200` with a reply. A missing field or an unreadable body
/// is handled as an empty message.
pub async fn chat_handler(
    State(state): State<AppState>,
    form: Result<Form<ChatForm>, FormRejection>,
) -> Json<ChatResponse> {
    let message = match form {
        Ok(Form(form)) => form.message.unwrap_or_default(),
        Err(rejection) => {
            debug!("unreadable chat form, treating as empty message: {rejection}");
            String::new()
        }
    };

    debug!(len = message.len(), "chat message received");
    let reply = state.resolver.resolve(&message).await;
    Json(ChatResponse { reply })
}
