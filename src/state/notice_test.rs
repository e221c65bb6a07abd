use super::*;

#[test]
fn notice_state_starts_empty() {
    assert!(NoticeState::default().current.is_none());
}

#[test]
fn push_replaces_current_notice() {
    let mut state = NoticeState::default();
    state.success("Deleted!", "The visa has been deleted.");
    state.success("Updated!", "The visa has been updated successfully.");

    let current = state.current.as_ref().unwrap();
    assert_eq!(current.title, "Updated!");
    assert_eq!(current.kind, NoticeKind::Success);
}

#[test]
fn push_increments_sequence() {
    let mut state = NoticeState::default();
    let a = state.success("a", "");
    let b = state.success("b", "");
    assert!(b > a);
}

#[test]
fn stale_dismiss_keeps_newer_notice() {
    let mut state = NoticeState::default();
    let first = state.success("first", "");
    state.success("second", "");

    state.dismiss(first);

    assert_eq!(state.current.as_ref().map(|n| n.title.as_str()), Some("second"));
}

#[test]
fn matching_dismiss_clears_notice() {
    let mut state = NoticeState::default();
    let seq = state.success("only", "");
    state.dismiss(seq);
    assert!(state.current.is_none());
}

#[test]
fn error_notice_uses_fallback_for_network_failures() {
    let mut state = NoticeState::default();
    state.error(&AppError::Network("timeout".to_owned()), "Failed to cancel application.");

    let current = state.current.unwrap();
    assert_eq!(current.kind, NoticeKind::Error);
    assert_eq!(current.message, "Failed to cancel application.");
}

#[test]
fn error_notice_shows_server_message() {
    let mut state = NoticeState::default();
    state.error(
        &AppError::Server { status: 400, message: "Already applied".to_owned() },
        "Failed to submit application.",
    );
    assert_eq!(state.current.unwrap().message, "Already applied");
}
