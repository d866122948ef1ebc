use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::customers::customers_view::CustomersView;
use components::header::{Header, Screen};
use components::restaurants::restaurants_view::RestaurantsView;
use services::api::ApiClient;
use services::logging::Logger;
use services::session::SessionContext;

#[function_component(App)]
fn app() -> Html {
    // The session is read from storage exactly once; everything downstream
    // receives it by injection.
    let session = use_memo((), |_| SessionContext::load());
    let screen = use_state(|| Screen::Restaurants);

    let api_client = ApiClient::new((*session).clone());

    use_effect_with((), {
        let authenticated = session.is_authenticated();
        move |_| {
            if authenticated {
                Logger::info("app", "session restored from storage");
            } else {
                Logger::warn("app", "no session in storage; sign-in required");
            }
            || ()
        }
    });

    let on_select = {
        let screen = screen.clone();
        Callback::from(move |next: Screen| screen.set(next))
    };

    html! {
        <>
            <Header active={*screen} on_select={on_select} />
            <main class="main">
                <div class="container">
                    {if session.is_authenticated() {
                        match *screen {
                            Screen::Restaurants => html! {
                                <RestaurantsView api_client={api_client.clone()} />
                            },
                            Screen::Customers => html! {
                                <CustomersView api_client={api_client.clone()} />
                            },
                        }
                    } else {
                        html! {
                            <section class="unauthenticated">
                                <h2>{"Sign-in required"}</h2>
                                <p>
                                    {"No session was found in this browser. \
                                      Sign in through the platform login and \
                                      reopen the console."}
                                </p>
                            </section>
                        }
                    }}
                </div>
            </main>
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
