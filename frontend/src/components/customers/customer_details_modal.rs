use shared::Customer;
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CustomerDetailsModalProps {
    pub details: Option<Customer>,
    pub on_close: Callback<()>,
}

/// Read-only detail view backed by the single-customer endpoint.
#[function_component(CustomerDetailsModal)]
pub fn customer_details_modal(props: &CustomerDetailsModalProps) -> Html {
    let Some(customer) = props.details.as_ref() else {
        return html! {};
    };

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let row = |label: &'static str, value: String| {
        html! {
            <div class="detail-row">
                <span class="detail-label">{label}</span>
                <span class="detail-value">{value}</span>
            </div>
        }
    };

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal modal-wide" onclick={on_modal_click}>
                <h3 class="modal-title">{"Customer Details"}</h3>
                <div class="detail-grid">
                    {row("First Name", customer.first_name.clone())}
                    {row("Last Name", customer.last_name.clone())}
                    {row("Gender", customer.gender.clone())}
                    {row("Email", customer.email.clone())}
                    {row("Phone Number", customer.phone_number.clone())}
                    {row("Address", customer.address.clone())}
                    {row("Reward Points", customer.points.to_string())}
                    {row("Registered On", customer.registered_on())}
                </div>
                <div class="modal-buttons">
                    <button class="btn btn-secondary" onclick={on_close}>
                        {"Close"}
                    </button>
                </div>
            </div>
        </div>
    }
}
