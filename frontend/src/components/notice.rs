use yew::prelude::*;

use crate::services::notify::{Notice, NoticeKind};

#[derive(Properties, PartialEq)]
pub struct NoticeBannerProps {
    pub notice: Option<Notice>,
}

/// Transient success/error banner shown above a screen's content.
#[function_component(NoticeBanner)]
pub fn notice_banner(props: &NoticeBannerProps) -> Html {
    let Some(notice) = props.notice.as_ref() else {
        return html! {};
    };

    let kind_class = match notice.kind {
        NoticeKind::Success => "success",
        NoticeKind::Error => "error",
    };

    html! {
        <div class={classes!("form-message", kind_class)}>
            {&notice.text}
        </div>
    }
}
