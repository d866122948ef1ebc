use shared::{FormError, RestaurantFormFields, RestaurantPayload};
use web_sys::{HtmlInputElement, MouseEvent};
use yew::prelude::*;

use crate::hooks::use_restaurants::RestaurantModal;

#[derive(Properties, PartialEq)]
pub struct RestaurantFormModalProps {
    pub modal: RestaurantModal,
    pub submitting: bool,
    pub on_submit: Callback<RestaurantPayload>,
    pub on_cancel: Callback<()>,
}

/// Modal form for creating or editing a restaurant. Owns its field state;
/// the parent owns the network call and the modal lifecycle.
#[function_component(RestaurantFormModal)]
pub fn restaurant_form_modal(props: &RestaurantFormModalProps) -> Html {
    let fields = use_state(RestaurantFormFields::empty);
    let terms_error = use_state(|| false);
    let field_error = use_state(|| Option::<String>::None);

    // Re-populate whenever the modal changes mode: flattened record values
    // for edit, empty strings for create.
    use_effect_with(props.modal.clone(), {
        let fields = fields.clone();
        let terms_error = terms_error.clone();
        let field_error = field_error.clone();
        move |modal: &RestaurantModal| {
            match modal {
                RestaurantModal::Create => fields.set(RestaurantFormFields::empty()),
                RestaurantModal::Edit(record) => {
                    fields.set(RestaurantFormFields::from_record(record));
                }
                RestaurantModal::Closed => {}
            }
            terms_error.set(false);
            field_error.set(None);
            || ()
        }
    });

    let text_input = |apply: fn(&mut RestaurantFormFields, String)| {
        let fields = fields.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*fields).clone();
            apply(&mut next, input.value());
            fields.set(next);
        })
    };

    let on_terms_change = {
        let fields = fields.clone();
        let terms_error = terms_error.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let checked = input.checked();
            let mut next = (*fields).clone();
            next.agree_terms = checked;
            fields.set(next);
            // Unchecking surfaces the warning right away; re-checking
            // clears it.
            terms_error.set(!checked);
        })
    };

    let on_submit = {
        let fields = fields.clone();
        let terms_error = terms_error.clone();
        let field_error = field_error.clone();
        let submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match fields.build_payload() {
                Ok(payload) => {
                    terms_error.set(false);
                    field_error.set(None);
                    submit.emit(payload);
                }
                Err(FormError::TermsNotAccepted) => terms_error.set(true),
                Err(err) => field_error.set(Some(err.to_string())),
            }
        })
    };

    let on_backdrop_click = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_cancel.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    let is_edit = matches!(props.modal, RestaurantModal::Edit(_));
    if matches!(props.modal, RestaurantModal::Closed) {
        return html! {};
    }

    let disabled = props.submitting;
    let field = |id: &'static str,
                 label: &'static str,
                 input_type: &'static str,
                 value: String,
                 onchange: Callback<Event>| {
        html! {
            <div class="form-group">
                <label for={id}>{label}</label>
                <input
                    id={id}
                    type={input_type}
                    value={value}
                    onchange={onchange}
                    disabled={disabled}
                />
            </div>
        }
    };

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal modal-form" onclick={on_modal_click}>
                <h3 class="modal-title">
                    {if is_edit { "Edit Restaurant" } else { "Add Restaurant" }}
                </h3>

                {if let Some(error) = (*field_error).clone() {
                    html! { <div class="form-message error">{error}</div> }
                } else {
                    html! {}
                }}

                <form class="entity-form" onsubmit={on_submit}>
                    <div class="form-grid">
                        {field(
                            "restaurant-name",
                            "Restaurant Name",
                            "text",
                            fields.restaurant_name.clone(),
                            text_input(|f, v| f.restaurant_name = v),
                        )}
                        {field(
                            "restaurant-address",
                            "Address",
                            "text",
                            fields.address.clone(),
                            text_input(|f, v| f.address = v),
                        )}
                        {field(
                            "restaurant-llc",
                            "LLC",
                            "text",
                            fields.llc.clone(),
                            text_input(|f, v| f.llc = v),
                        )}
                        {field(
                            "restaurant-phone",
                            "Phone Number",
                            "tel",
                            fields.phone_number.clone(),
                            text_input(|f, v| f.phone_number = v),
                        )}
                        {field(
                            "restaurant-email",
                            "Email",
                            "email",
                            fields.email.clone(),
                            text_input(|f, v| f.email = v),
                        )}
                        {field(
                            "restaurant-owner",
                            "Owner Name",
                            "text",
                            fields.owner_name.clone(),
                            text_input(|f, v| f.owner_name = v),
                        )}
                        {field(
                            "restaurant-password",
                            "Create Password",
                            "password",
                            fields.password.clone(),
                            text_input(|f, v| f.password = v),
                        )}
                        {field(
                            "contact-name",
                            "Primary Contact Name",
                            "text",
                            fields.primary_contact_name.clone(),
                            text_input(|f, v| f.primary_contact_name = v),
                        )}
                        {field(
                            "contact-address",
                            "Primary Contact Address",
                            "text",
                            fields.primary_contact_address.clone(),
                            text_input(|f, v| f.primary_contact_address = v),
                        )}
                        {field(
                            "contact-email",
                            "Primary Contact Email",
                            "email",
                            fields.primary_contact_email.clone(),
                            text_input(|f, v| f.primary_contact_email = v),
                        )}
                    </div>

                    <div class="form-group checkbox-group">
                        <label>
                            <input
                                type="checkbox"
                                checked={fields.agree_terms}
                                onchange={on_terms_change}
                                disabled={disabled}
                            />
                            <span>{"Agree to terms and conditions"}</span>
                        </label>
                    </div>

                    {if *terms_error {
                        html! {
                            <p class="terms-error">
                                {"Please accept terms and condition to proceed."}
                            </p>
                        }
                    } else {
                        html! {}
                    }}

                    <div class="modal-buttons">
                        <button type="submit" class="btn btn-primary" disabled={disabled}>
                            {if disabled {
                                "Saving..."
                            } else if is_edit {
                                "Edit Restaurant"
                            } else {
                                "Add Restaurant"
                            }}
                        </button>
                        <button
                            type="button"
                            class="btn btn-secondary"
                            onclick={on_cancel}
                            disabled={disabled}
                        >
                            {"Cancel"}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
