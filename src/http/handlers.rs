use super::state::AppState;
use crate::mail::{parse_recipients, Email, MailError};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json},
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    /// Raw meeting transcript (required, non-empty)
    pub transcript: Option<String>,

    /// Optional instructions shaping the summary
    pub instructions: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SummarizeResponse {
    pub summary: String,
}

#[derive(Debug, Deserialize)]
pub struct ShareRequest {
    /// Summary text to mail out (required)
    pub summary: Option<String>,

    /// Comma-separated destination addresses (required)
    pub recipients: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ShareResponse {
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /
/// Landing page with the transcript form
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../templates/index.html"))
}

/// POST /summarize
/// Summarize a meeting transcript through the LLM gateway
pub async fn summarize(
    State(state): State<AppState>,
    payload: Result<Json<SummarizeRequest>, JsonRejection>,
) -> impl IntoResponse {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Request must be JSON".to_string(),
                }),
            )
                .into_response();
        }
    };

    let transcript = match req.transcript {
        Some(ref transcript) if !transcript.is_empty() => transcript,
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Transcript is required".to_string(),
                }),
            )
                .into_response();
        }
    };

    info!("Summarizing transcript ({} chars)", transcript.len());

    match state
        .summarizer
        .summarize(transcript, req.instructions.as_deref())
        .await
    {
        Ok(summary) => (StatusCode::OK, Json(SummarizeResponse { summary })).into_response(),
        Err(e) => {
            error!("Summarization failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Summarization failed: {}", e),
                }),
            )
                .into_response()
        }
    }
}

/// POST /share
/// Email a summary to a comma-separated recipient list
pub async fn share(
    State(state): State<AppState>,
    payload: Result<Json<ShareRequest>, JsonRejection>,
) -> impl IntoResponse {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "No data provided".to_string(),
                }),
            )
                .into_response();
        }
    };

    let (summary, recipients) = match (req.summary, req.recipients) {
        (Some(summary), Some(recipients)) if !summary.is_empty() && !recipients.is_empty() => {
            (summary, recipients)
        }
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Summary and recipients are required".to_string(),
                }),
            )
                .into_response();
        }
    };

    let email = Email::summary_notification(parse_recipients(&recipients), summary);

    info!("Sharing summary with {} recipient(s)", email.recipients.len());

    // A recipients string of bare separators parses to nothing; treat that as
    // a send failure rather than handing the transport an empty address list.
    let outcome = if email.recipients.is_empty() {
        Err(MailError::NoRecipients)
    } else {
        state.mailer.send(&email).await
    };

    match outcome {
        Ok(()) => (
            StatusCode::OK,
            Json(ShareResponse {
                status: "Email sent successfully".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to send email: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to send email: {}", e),
                }),
            )
                .into_response()
        }
    }
}
