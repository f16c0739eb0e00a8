//! # Comment Handler
//!
//! Posting a review on a koi. All preconditions are enforced here, before
//! any network call: rating range, non-empty content, authentication, and
//! the (configurable) one-comment-per-koi policy.

use crate::app::events::AppEvent;
use crate::app::state::{AppState, Screen};
use crate::app::tasks::ScreenTasks;
use crate::core::service::ApiService;
use crate::utils::validation::validate_rating;
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

fn set_comment_error(state: &Arc<RwLock<AppState>>, message: impl Into<String>) {
    state.write().koi_detail.comment_error = Some(message.into());
}

/// Handle comment submit on the koi detail screen.
///
/// `enforce_single_comment` comes from [`ClientConfig::single_comment_per_koi`];
/// whether the server also enforces the rule is an open product question, so
/// the client treats it as policy rather than hardcoding it.
///
/// [`ClientConfig::single_comment_per_koi`]: crate::config::ClientConfig
pub(crate) fn handle_post_comment(
    state: Arc<RwLock<AppState>>,
    tasks: Arc<ScreenTasks>,
    event_tx: Sender<AppEvent>,
    enforce_single_comment: bool,
) {
    let (koi_id, rating, content, authenticated, already_commented) = {
        let state = state.read();
        let koi = match &state.koi_detail.koi {
            Some(koi) => koi,
            None => return,
        };

        let author_id = state.account.account.as_ref().map(|a| a.id.as_str());
        let already = match author_id {
            Some(id) => koi.comments.iter().any(|c| c.author.id == id),
            None => false,
        };

        (
            koi.id.clone(),
            state.koi_detail.comment_rating,
            state.koi_detail.comment_content.clone(),
            state.is_authenticated(),
            already,
        )
    };

    if !authenticated {
        set_comment_error(&state, "Please log in to post a review");
        return;
    }

    let rating_check = validate_rating(rating);
    if !rating_check.is_valid {
        set_comment_error(&state, rating_check.error.unwrap_or_default());
        return;
    }

    if content.trim().is_empty() {
        set_comment_error(&state, "Review content is required");
        return;
    }

    if enforce_single_comment && already_commented {
        set_comment_error(&state, "You have already reviewed this koi");
        return;
    }

    let api_client = match state.read().api_client.as_ref() {
        Some(client) => client.clone(),
        None => return,
    };

    state.write().koi_detail.comment_error = None;
    tasks.spawn_for(Screen::KoiDetail, async move {
        let result = api_client.post_comment(&koi_id, rating, content).await;
        let _ = event_tx.send(AppEvent::CommentPosted(result)).await;
    });
}
