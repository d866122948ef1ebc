use shared::{
    Customer, CustomerListRequest, CustomerPayload, RewardAction, RewardRequest, PAGE_LIMIT,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use crate::services::notify::{flash, report_failure, Notice};

const COMPONENT: &str = "use_customers";

/// Add/edit modal lifecycle for the customer form.
#[derive(Clone, PartialEq)]
pub enum CustomerModal {
    Closed,
    Create,
    Edit(Customer),
}

#[derive(Clone)]
pub struct CustomerListState {
    pub customers: Vec<Customer>,
    pub loading: bool,
    pub page: u32,
    pub total: u64,
    pub search_term: String,
    pub modal: CustomerModal,
    pub submitting: bool,
    pub pending_delete: Option<Customer>,
    /// Detail record shown in the read-only view modal.
    pub detail: Option<Customer>,
    /// Customer and pre-selected direction for the reward modal.
    pub reward_target: Option<(Customer, RewardAction)>,
    pub reward_submitting: bool,
    pub notice: Option<Notice>,
}

#[derive(Clone)]
pub struct UseCustomersActions {
    pub refresh: Callback<()>,
    pub on_search: Callback<String>,
    pub on_page_change: Callback<u32>,
    pub open_create: Callback<()>,
    pub open_edit: Callback<Customer>,
    pub close_modal: Callback<()>,
    pub submit_form: Callback<CustomerPayload>,
    pub request_delete: Callback<Customer>,
    pub confirm_delete: Callback<()>,
    pub cancel_delete: Callback<()>,
    pub view_customer: Callback<String>,
    pub close_detail: Callback<()>,
    pub open_reward: Callback<(Customer, RewardAction)>,
    pub close_reward: Callback<()>,
    pub submit_reward: Callback<(u32, RewardAction)>,
}

pub struct UseCustomersResult {
    pub state: CustomerListState,
    pub actions: UseCustomersActions,
}

/// List controller for the customers screen: paginated fetch scoped to the
/// session's restaurant with a phone filter, add/edit/delete flows, the
/// read-only detail view and the reward sub-flow.
#[hook]
pub fn use_customers(api_client: &ApiClient) -> UseCustomersResult {
    let customers = use_state(Vec::<Customer>::new);
    let loading = use_state(|| true);
    let page = use_state(|| 1u32);
    let total = use_state(|| 0u64);
    let search_term = use_state(String::new);
    let modal = use_state(|| CustomerModal::Closed);
    let submitting = use_state(|| false);
    let pending_delete = use_state(|| Option::<Customer>::None);
    let detail = use_state(|| Option::<Customer>::None);
    let reward_target = use_state(|| Option::<(Customer, RewardAction)>::None);
    let reward_submitting = use_state(|| false);
    let notice = use_state(|| Option::<Notice>::None);

    let fetch_seq = use_mut_ref(|| 0u64);

    let fetch = {
        let api_client = api_client.clone();
        let customers = customers.clone();
        let total = total.clone();
        let loading = loading.clone();
        let notice = notice.clone();
        let fetch_seq = fetch_seq.clone();

        use_callback((), move |(term, page): (String, u32), _| {
            let restaurant_id = match api_client.session().restaurant_id() {
                Some(id) => id.to_string(),
                None => {
                    report_failure(COMPONENT, "Not signed in", "missing restaurant id", &notice);
                    return;
                }
            };
            let api_client = api_client.clone();
            let customers = customers.clone();
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
                    .get_customers(CustomerListRequest {
                        page,
                        limit: PAGE_LIMIT,
                        restaurant_id,
                        phone: term,
                    })
                    .await;

                if *fetch_seq.borrow() != seq {
                    Logger::debug(COMPONENT, "discarding stale customer list response");
                    return;
                }

                match result {
                    Ok(data) => {
                        customers.set(data.data);
                        total.set(data.total);
                    }
                    Err(e) => {
                        report_failure(
                            COMPONENT,
                            "An error occurred while fetching customers",
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
        use_callback((), move |_, _| modal.set(CustomerModal::Create))
    };

    let open_edit = {
        let modal = modal.clone();
        use_callback((), move |record: Customer, _| {
            modal.set(CustomerModal::Edit(record));
        })
    };

    let close_modal = {
        let modal = modal.clone();
        use_callback((), move |_, _| modal.set(CustomerModal::Closed))
    };

    let submit_form = {
        let api_client = api_client.clone();
        let modal = modal.clone();
        let submitting = submitting.clone();
        let notice = notice.clone();
        let refresh = refresh.clone();

        use_callback((), move |payload: CustomerPayload, _| {
            let api_client = api_client.clone();
            let modal = modal.clone();
            let submitting = submitting.clone();
            let notice = notice.clone();
            let refresh = refresh.clone();
            let mode = (*modal).clone();

            spawn_local(async move {
                submitting.set(true);

                let (result, success_text, failure_text) = match &mode {
                    CustomerModal::Edit(record) => (
                        api_client.edit_customer(&record.id, payload).await,
                        "Customer edited successfully",
                        "An error occurred while editing customer",
                    ),
                    _ => {
                        // New customers are registered under the session's
                        // restaurant.
                        let payload = match api_client.session().restaurant_id() {
                            Some(id) => payload.with_restaurant_id(id),
                            None => payload,
                        };
                        (
                            api_client.add_customer(payload).await,
                            "Customer added successfully",
                            "An error occurred while adding customer",
                        )
                    }
                };

                match result {
                    Ok(()) => {
                        flash(&notice, Notice::success(success_text));
                        modal.set(CustomerModal::Closed);
                        refresh.emit(());
                    }
                    Err(e) => {
                        report_failure(COMPONENT, failure_text, &e, &notice);
                    }
                }

                submitting.set(false);
            });
        })
    };

    let request_delete = {
        let pending_delete = pending_delete.clone();
        use_callback((), move |record: Customer, _| {
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
                match api_client.delete_customer(&record.id).await {
                    Ok(()) => {
                        flash(&notice, Notice::success("Customer deleted successfully"));
                        refresh.emit(());
                    }
                    Err(e) => {
                        report_failure(
                            COMPONENT,
                            "An error occurred while deleting customer",
                            &e,
                            &notice,
                        );
                    }
                }
                pending_delete.set(None);
            });
        })
    };

    let view_customer = {
        let api_client = api_client.clone();
        let detail = detail.clone();
        let notice = notice.clone();

        use_callback((), move |id: String, _| {
            let api_client = api_client.clone();
            let detail = detail.clone();
            let notice = notice.clone();

            spawn_local(async move {
                match api_client.get_customer(&id).await {
                    Ok(record) => detail.set(Some(record)),
                    Err(e) => {
                        report_failure(
                            COMPONENT,
                            "An error occurred while fetching customer details",
                            &e,
                            &notice,
                        );
                    }
                }
            });
        })
    };

    let close_detail = {
        let detail = detail.clone();
        use_callback((), move |_, _| detail.set(None))
    };

    let open_reward = {
        let reward_target = reward_target.clone();
        use_callback((), move |target: (Customer, RewardAction), _| {
            reward_target.set(Some(target));
        })
    };

    let close_reward = {
        let reward_target = reward_target.clone();
        use_callback((), move |_, _| reward_target.set(None))
    };

    // The reward sub-flow is fire-and-forget: it neither refreshes the list
    // nor shows the updated balance.
    let submit_reward = {
        let api_client = api_client.clone();
        let reward_target = reward_target.clone();
        let reward_submitting = reward_submitting.clone();
        let notice = notice.clone();

        use_callback((), move |(points, action): (u32, RewardAction), _| {
            let Some((customer, _)) = (*reward_target).clone() else {
                return;
            };
            let restaurant_id = match api_client.session().restaurant_id() {
                Some(id) => id.to_string(),
                None => {
                    report_failure(COMPONENT, "Not signed in", "missing restaurant id", &notice);
                    return;
                }
            };
            let api_client = api_client.clone();
            let reward_target = reward_target.clone();
            let reward_submitting = reward_submitting.clone();
            let notice = notice.clone();

            spawn_local(async move {
                reward_submitting.set(true);

                let request = RewardRequest {
                    customer_id: customer.id.clone(),
                    email: customer.email.clone(),
                    points,
                    restaurant_id,
                    action,
                };

                match api_client.add_reward(request).await {
                    Ok(()) => {
                        flash(&notice, Notice::success("Reward points updated successfully"));
                        reward_target.set(None);
                    }
                    Err(e) => {
                        report_failure(
                            COMPONENT,
                            "An error occurred while adding reward points",
                            &e,
                            &notice,
                        );
                    }
                }

                reward_submitting.set(false);
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

    let state = CustomerListState {
        customers: (*customers).clone(),
        loading: *loading,
        page: *page,
        total: *total,
        search_term: (*search_term).clone(),
        modal: (*modal).clone(),
        submitting: *submitting,
        pending_delete: (*pending_delete).clone(),
        detail: (*detail).clone(),
        reward_target: (*reward_target).clone(),
        reward_submitting: *reward_submitting,
        notice: (*notice).clone(),
    };

    let actions = UseCustomersActions {
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
        view_customer,
        close_detail,
        open_reward,
        close_reward,
        submit_reward,
    };

    UseCustomersResult { state, actions }
}
