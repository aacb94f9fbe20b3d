//! Newsletter subscription route handlers.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use teaweb_core::Email;

use crate::db::NewsletterRepository;
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Newsletter subscription request body.
#[derive(Debug, Deserialize)]
pub struct SubscribeRequest {
    pub email: String,
}

/// Newsletter subscription confirmation.
#[derive(Debug, Serialize)]
pub struct SubscribeResponse {
    pub ok: bool,
    /// The normalized email that was stored.
    pub email: Email,
    /// Subscription time, epoch seconds.
    pub created_at: i64,
}

/// Subscribe an email to the newsletter.
///
/// Validates and normalizes the email, then upserts the subscription;
/// subscribing twice refreshes the timestamp rather than failing.
#[instrument(skip(state, req), fields(email = %req.email))]
pub async fn subscribe(
    State(state): State<AppState>,
    Json(req): Json<SubscribeRequest>,
) -> Result<Json<SubscribeResponse>> {
    let email = Email::parse(&req.email)
        .map_err(|e| AppError::Validation(format!("Invalid email: {e}")))?;

    let subscription = NewsletterRepository::new(state.pool())
        .subscribe(&email)
        .await?;
    tracing::info!(email = %subscription.email, "Newsletter subscription stored");

    Ok(Json(SubscribeResponse {
        ok: true,
        email: subscription.email,
        created_at: subscription.created_at,
    }))
}
