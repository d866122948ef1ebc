use yew::prelude::*;

/// Top-level screens of the console.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Screen {
    Restaurants,
    Customers,
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub active: Screen,
    pub on_select: Callback<Screen>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let nav_button = |screen: Screen, label: &'static str| {
        let on_select = props.on_select.clone();
        let active = props.active == screen;
        html! {
            <button
                class={classes!("nav-btn", active.then_some("active"))}
                onclick={Callback::from(move |_| on_select.emit(screen))}
            >
                {label}
            </button>
        }
    };

    html! {
        <header class="header">
            <div class="container header-inner">
                <h1>{"Restaurant Platform Admin"}</h1>
                <nav class="header-nav">
                    {nav_button(Screen::Restaurants, "Restaurants")}
                    {nav_button(Screen::Customers, "Customers")}
                </nav>
            </div>
        </header>
    }
}
