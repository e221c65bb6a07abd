//! Transient notice banner and the helpers pages use to raise notices.

use std::time::Duration;

use leptos::prelude::*;

use crate::error::AppError;
use crate::state::notice::{NOTICE_TIMEOUT_MS, NoticeKind, NoticeState};
use crate::util::reactive::update_if_live;

/// Show a success notice. Safe to call after the caller unmounted.
pub fn show_success(notices: RwSignal<NoticeState>, title: &str, message: &str) {
    update_if_live(notices, |n| n.success(title, message));
}

/// Log a failed action. User-side outcomes are `info`, transport and server
/// failures are `error`.
pub fn log_failure(action: &str, error: &AppError) {
    match error {
        AppError::Validation(_) | AppError::UserCancelled | AppError::InvalidCredentials => {
            log::info!("{action}: {error}");
        }
        AppError::Network(_) | AppError::Server { .. } => {
            log::error!("{action} failed ({}): {error}", error.error_code());
        }
    }
}

/// Log a failed action and show it as an error notice.
pub fn show_error(notices: RwSignal<NoticeState>, action: &str, error: &AppError, fallback: &str) {
    log_failure(action, error);
    update_if_live(notices, |n| n.error(error, fallback));
}

/// Renders the current notice and dismisses it after a timeout.
#[component]
pub fn Toast() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    Effect::new(move || {
        let Some(seq) = notices.with(|n| n.current.as_ref().map(|notice| notice.seq)) else {
            return;
        };
        set_timeout(
            move || {
                update_if_live(notices, |n| n.dismiss(seq));
            },
            Duration::from_millis(NOTICE_TIMEOUT_MS),
        );
    });

    move || {
        notices.with(|n| n.current.clone()).map(|notice| {
            let seq = notice.seq;
            let kind_class = match notice.kind {
                NoticeKind::Success => "toast toast--success",
                NoticeKind::Error => "toast toast--error",
            };
            view! {
                <div class=kind_class role="alert">
                    <strong class="toast__title">{notice.title}</strong>
                    <p class="toast__message">{notice.message}</p>
                    <button
                        class="toast__close"
                        aria-label="Dismiss"
                        on:click=move |_| notices.update(|n| n.dismiss(seq))
                    >
                        "✕"
                    </button>
                </div>
            }
        })
    }
}
