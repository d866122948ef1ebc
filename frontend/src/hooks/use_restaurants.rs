use shared::{Restaurant, RestaurantListRequest, RestaurantPayload, PAGE_LIMIT};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use crate::services::notify::{flash, report_failure, Notice};

const COMPONENT: &str = "use_restaurants";

/// Add/edit modal lifecycle: closed, open empty, or open pre-populated.
#[derive(Clone, PartialEq)]
pub enum RestaurantModal {
    Closed,
    Create,
    Edit(Restaurant),
}

#[derive(Clone)]
pub struct RestaurantListState {
    pub restaurants: Vec<Restaurant>,
    pub loading: bool,
    pub page: u32,
    pub total: u64,
    pub search_term: String,
    pub modal: RestaurantModal,
    pub submitting: bool,
    pub pending_delete: Option<Restaurant>,
    pub notice: Option<Notice>,
}

#[derive(Clone)]
pub struct UseRestaurantsActions {
    pub refresh: Callback<()>,
    pub on_search: Callback<String>,
    pub on_page_change: Callback<u32>,
    pub open_create: Callback<()>,
    pub open_edit: Callback<Restaurant>,
    pub close_modal: Callback<()>,
    pub submit_form: Callback<RestaurantPayload>,
    pub request_delete: Callback<Restaurant>,
    pub confirm_delete: Callback<()>,
    pub cancel_delete: Callback<()>,
}

pub struct UseRestaurantsResult {
    pub state: RestaurantListState,
    pub actions: UseRestaurantsActions,
}

/// List controller for the restaurants screen: paginated fetch with a name
/// filter, and add/edit/delete flows that re-fetch on completion.
#[hook]
pub fn use_restaurants(api_client: &ApiClient) -> UseRestaurantsResult {
    let restaurants = use_state(Vec::<Restaurant>::new);
    let loading = use_state(|| true);
    let page = use_state(|| 1u32);
    let total = use_state(|| 0u64);
    let search_term = use_state(String::new);
    let modal = use_state(|| RestaurantModal::Closed);
    let submitting = use_state(|| false);
    let pending_delete = use_state(|| Option::<Restaurant>::None);
    let notice = use_state(|| Option::<Notice>::None);

    // Fetch sequencing: only the latest issued request may touch state.
    let fetch_seq = use_mut_ref(|| 0u64);

    let fetch = {
        let api_client = api_client.clone();
        let restaurants = restaurants.clone();
        let total = total.clone();
        let loading = loading.clone();
        let notice = notice.clone();
        let fetch_seq = fetch_seq.clone();

        use_callback((), move |(term, page): (String, u32), _| {
            let api_client = api_client.clone();
            let restaurants = restaurants.clone();
            let total = total.clone();
            let loading = loading.clone();
            let notice = notice.clone();
            let fetch_seq = fetch_seq.clone();

            let seq = {
                let mut counter = fetch_seq.borrow_mut();
                *counter += 1;
                *counter
            };

            spawn_local(async move {
                loading.set(true);

                let result = api_client
                    .get_restaurants(RestaurantListRequest {
                        page,
                        limit: PAGE_LIMIT,
                        name: term,
                    })
                    .await;

                // A newer fetch owns the screen now.
                if *fetch_seq.borrow() != seq {
                    Logger::debug(COMPONENT, "discarding stale restaurant list response");
                    return;
                }

                match result {
                    Ok(data) => {
                        restaurants.set(data.data);
                        total.set(data.total);
                    }
                    Err(e) => {
                        // Prior items stay on screen.
                        report_failure(
                            COMPONENT,
                            "An error occurred while fetching restaurants",
                            &e,
                            &notice,
                        );
                    }
                }

                loading.set(false);
            });
        })
    };

    let refresh = {
        let fetch = fetch.clone();
        let search_term = search_term.clone();
        let page = page.clone();
        use_callback((), move |_, _| {
            fetch.emit(((*search_term).clone(), *page));
        })
    };

    let on_search = {
        let fetch = fetch.clone();
        let search_term = search_term.clone();
        let page = page.clone();
        use_callback((), move |term: String, _| {
            search_term.set(term.clone());
            page.set(1);
            fetch.emit((term, 1));
        })
    };

    let on_page_change = {
        let fetch = fetch.clone();
        let search_term = search_term.clone();
        let page = page.clone();
        use_callback((), move |new_page: u32, _| {
            page.set(new_page);
            fetch.emit(((*search_term).clone(), new_page));
        })
    };

    let open_create = {
        let modal = modal.clone();
        use_callback((), move |_, _| modal.set(RestaurantModal::Create))
    };

    let open_edit = {
        let modal = modal.clone();
        use_callback((), move |record: Restaurant, _| {
            modal.set(RestaurantModal::Edit(record));
        })
    };

    let close_modal = {
        let modal = modal.clone();
        use_callback((), move |_, _| modal.set(RestaurantModal::Closed))
    };

    let submit_form = {
        let api_client = api_client.clone();
        let modal = modal.clone();
        let submitting = submitting.clone();
        let notice = notice.clone();
        let refresh = refresh.clone();

        use_callback((), move |payload: RestaurantPayload, _| {
            let api_client = api_client.clone();
            let modal = modal.clone();
            let submitting = submitting.clone();
            let notice = notice.clone();
            let refresh = refresh.clone();
            let mode = (*modal).clone();

            spawn_local(async move {
                submitting.set(true);

                let (result, success_text, fallback_text, failure_text) = match &mode {
                    RestaurantModal::Edit(record) => (
                        api_client.edit_restaurant(&record.id, payload).await,
                        "Restaurant edited successfully",
                        "Failed to edit restaurant",
                        "An error occurred while editing restaurant",
                    ),
                    _ => (
                        api_client.add_restaurant(payload).await,
                        "Restaurant added successfully",
                        "Failed to add restaurant",
                        "An error occurred while adding restaurant",
                    ),
                };

                match result {
                    Ok(response) if response.success => {
                        flash(&notice, Notice::success(success_text));
                        modal.set(RestaurantModal::Closed);
                        refresh.emit(());
                    }
                    Ok(response) => {
                        // The backend rejected the payload; surface its
                        // message, close the modal and re-fetch anyway.
                        let message = response
                            .message
                            .unwrap_or_else(|| fallback_text.to_string());
                        report_failure(COMPONENT, &message, "success=false", &notice);
                        modal.set(RestaurantModal::Closed);
                        refresh.emit(());
                    }
                    Err(e) => {
                        // Transport failure keeps the modal open for a retry.
                        report_failure(COMPONENT, failure_text, &e, &notice);
                    }
                }

                submitting.set(false);
            });
        })
    };

    let request_delete = {
        let pending_delete = pending_delete.clone();
        use_callback((), move |record: Restaurant, _| {
            pending_delete.set(Some(record));
        })
    };

    let cancel_delete = {
        let pending_delete = pending_delete.clone();
        use_callback((), move |_, _| pending_delete.set(None))
    };

    let confirm_delete = {
        let api_client = api_client.clone();
        let pending_delete = pending_delete.clone();
        let notice = notice.clone();
        let refresh = refresh.clone();

        use_callback((), move |_, _| {
            let Some(record) = (*pending_delete).clone() else {
                return;
            };
            let api_client = api_client.clone();
            let pending_delete = pending_delete.clone();
            let notice = notice.clone();
            let refresh = refresh.clone();

            spawn_local(async move {
                match api_client.delete_restaurant(&record.id).await {
                    Ok(()) => {
                        flash(&notice, Notice::success("Restaurant deleted successfully"));
                        refresh.emit(());
                    }
                    Err(e) => {
                        report_failure(
                            COMPONENT,
                            "An error occurred while deleting restaurant",
                            &e,
                            &notice,
                        );
                    }
                }
                pending_delete.set(None);
            });
        })
    };

    // Initial load.
    use_effect_with((), {
        let fetch = fetch.clone();
        move |_| {
            fetch.emit((String::new(), 1));
            || ()
        }
    });

    let state = RestaurantListState {
        restaurants: (*restaurants).clone(),
        loading: *loading,
        page: *page,
        total: *total,
        search_term: (*search_term).clone(),
        modal: (*modal).clone(),
        submitting: *submitting,
        pending_delete: (*pending_delete).clone(),
        notice: (*notice).clone(),
    };

    let actions = UseRestaurantsActions {
        refresh,
        on_search,
        on_page_change,
        open_create,
        open_edit,
        close_modal,
        submit_form,
        request_delete,
        confirm_delete,
        cancel_delete,
    };

    UseRestaurantsResult { state, actions }
}
