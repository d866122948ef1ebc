use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SearchBarProps {
    pub placeholder: AttrValue,
    pub on_search: Callback<String>,
}

/// Search input that emits the current term on submit.
#[function_component(SearchBar)]
pub fn search_bar(props: &SearchBarProps) -> Html {
    let value = use_state(String::new);

    let on_change = {
        let value = value.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            value.set(input.value());
        })
    };

    let on_submit = {
        let value = value.clone();
        let on_search = props.on_search.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_search.emit((*value).trim().to_string());
        })
    };

    html! {
        <form class="search-bar" onsubmit={on_submit}>
            <input
                type="search"
                placeholder={props.placeholder.clone()}
                value={(*value).clone()}
                onchange={on_change}
            />
            <button type="submit" class="btn btn-secondary">{"Search"}</button>
        </form>
    }
}
