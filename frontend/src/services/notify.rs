use yew::UseStateHandle;
use wasm_bindgen_futures::spawn_local;

use super::logging::Logger;

const NOTICE_DURATION_MS: u32 = 3_000;

#[derive(Debug, Clone, PartialEq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient banner message, the console's equivalent of a toast.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

/// Show a notice and clear it after three seconds, unless a newer notice
/// has replaced it in the meantime.
pub fn flash(slot: &UseStateHandle<Option<Notice>>, notice: Notice) {
    slot.set(Some(notice.clone()));

    let slot = slot.clone();
    spawn_local(async move {
        gloo::timers::future::TimeoutFuture::new(NOTICE_DURATION_MS).await;
        if (*slot).as_ref() == Some(&notice) {
            slot.set(None);
        }
    });
}

/// Failure contract shared by every mutation: a user-visible notice plus a
/// console entry carrying the underlying detail.
pub fn report_failure(
    component: &str,
    user_message: &str,
    detail: &str,
    slot: &UseStateHandle<Option<Notice>>,
) {
    Logger::error_with_detail(component, user_message, detail);
    flash(slot, Notice::error(user_message));
}
