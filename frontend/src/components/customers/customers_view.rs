use yew::prelude::*;

use super::customer_details_modal::CustomerDetailsModal;
use super::customer_table::CustomerTable;
use super::reward_modal::RewardModal;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::forms::customer_form::CustomerFormModal;
use crate::components::notice::NoticeBanner;
use crate::components::pager::Pager;
use crate::components::search_bar::SearchBar;
use crate::hooks::use_customers::use_customers;
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct CustomersViewProps {
    pub api_client: ApiClient,
}

/// Customers screen: phone-searchable paginated table with add/edit/delete,
/// the read-only detail view and the reward sub-flow.
#[function_component(CustomersView)]
pub fn customers_view(props: &CustomersViewProps) -> Html {
    let result = use_customers(&props.api_client);
    let state = result.state;
    let actions = result.actions;

    let open_create = {
        let open_create = actions.open_create.clone();
        Callback::from(move |_| open_create.emit(()))
    };

    html! {
        <div class="screen">
            <div class="screen-header">
                <h2>{"Customers Details"}</h2>
                <div class="screen-tools">
                    <SearchBar
                        placeholder="Search by phone"
                        on_search={actions.on_search.clone()}
                    />
                    <button class="btn btn-primary" onclick={open_create}>
                        {"+ Add customer"}
                    </button>
                </div>
            </div>

            <NoticeBanner notice={state.notice.clone()} />

            <div class="card">
                <CustomerTable
                    customers={state.customers.clone()}
                    loading={state.loading}
                    on_edit={actions.open_edit.clone()}
                    on_view={actions.view_customer.clone()}
                    on_delete={actions.request_delete.clone()}
                    on_reward={actions.open_reward.clone()}
                />
                <Pager
                    page={state.page}
                    total={state.total}
                    on_page_change={actions.on_page_change.clone()}
                />
            </div>

            <CustomerFormModal
                modal={state.modal.clone()}
                submitting={state.submitting}
                on_submit={actions.submit_form.clone()}
                on_cancel={actions.close_modal.clone()}
            />

            <CustomerDetailsModal
                details={state.detail.clone()}
                on_close={actions.close_detail.clone()}
            />

            <RewardModal
                target={state.reward_target.clone()}
                submitting={state.reward_submitting}
                on_confirm={actions.submit_reward.clone()}
                on_cancel={actions.close_reward.clone()}
            />

            <ConfirmDialog
                open={state.pending_delete.is_some()}
                title="Are you sure you want to delete this customer?"
                message="This action cannot be undone."
                on_confirm={actions.confirm_delete.clone()}
                on_cancel={actions.cancel_delete.clone()}
            />
        </div>
    }
}
