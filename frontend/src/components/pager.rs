use shared::{page_count, PAGE_LIMIT};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PagerProps {
    pub page: u32,
    pub total: u64,
    pub on_page_change: Callback<u32>,
}

/// Numbered pagination for a fixed page size of ten.
#[function_component(Pager)]
pub fn pager(props: &PagerProps) -> Html {
    let pages = page_count(props.total, PAGE_LIMIT);
    if pages == 0 {
        return html! {};
    }

    let page_button = |target: u32| {
        let on_page_change = props.on_page_change.clone();
        let active = props.page == target;
        html! {
            <button
                class={classes!("pager-btn", active.then_some("active"))}
                disabled={active}
                onclick={Callback::from(move |_| on_page_change.emit(target))}
            >
                {target}
            </button>
        }
    };

    let prev = {
        let on_page_change = props.on_page_change.clone();
        let page = props.page;
        Callback::from(move |_| on_page_change.emit(page - 1))
    };
    let next = {
        let on_page_change = props.on_page_change.clone();
        let page = props.page;
        Callback::from(move |_| on_page_change.emit(page + 1))
    };

    html! {
        <div class="pager">
            <button class="pager-btn" disabled={props.page <= 1} onclick={prev}>
                {"‹"}
            </button>
            {for (1..=pages).map(page_button)}
            <button class="pager-btn" disabled={props.page >= pages} onclick={next}>
                {"›"}
            </button>
        </div>
    }
}
