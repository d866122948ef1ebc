use yew::prelude::*;

use super::restaurant_table::RestaurantTable;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::forms::restaurant_form::RestaurantFormModal;
use crate::components::notice::NoticeBanner;
use crate::components::pager::Pager;
use crate::components::search_bar::SearchBar;
use crate::hooks::use_restaurants::use_restaurants;
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct RestaurantsViewProps {
    pub api_client: ApiClient,
}

/// Restaurants screen: searchable paginated table with add/edit/delete.
#[function_component(RestaurantsView)]
pub fn restaurants_view(props: &RestaurantsViewProps) -> Html {
    let result = use_restaurants(&props.api_client);
    let state = result.state;
    let actions = result.actions;

    let open_create = {
        let open_create = actions.open_create.clone();
        Callback::from(move |_| open_create.emit(()))
    };

    html! {
        <div class="screen">
            <div class="screen-header">
                <h2>{"Restaurants"}</h2>
                <div class="screen-tools">
                    <SearchBar
                        placeholder="Search by name"
                        on_search={actions.on_search.clone()}
                    />
                    <button class="btn btn-primary" onclick={open_create}>
                        {"+ Add Restaurant"}
                    </button>
                </div>
            </div>

            <NoticeBanner notice={state.notice.clone()} />

            <div class="card">
                <RestaurantTable
                    restaurants={state.restaurants.clone()}
                    loading={state.loading}
                    on_edit={actions.open_edit.clone()}
                    on_delete={actions.request_delete.clone()}
                />
                <Pager
                    page={state.page}
                    total={state.total}
                    on_page_change={actions.on_page_change.clone()}
                />
            </div>

            <RestaurantFormModal
                modal={state.modal.clone()}
                submitting={state.submitting}
                on_submit={actions.submit_form.clone()}
                on_cancel={actions.close_modal.clone()}
            />

            <ConfirmDialog
                open={state.pending_delete.is_some()}
                title="Are you sure you want to delete this restaurant?"
                message="This action cannot be undone."
                on_confirm={actions.confirm_delete.clone()}
                on_cancel={actions.cancel_delete.clone()}
            />
        </div>
    }
}
