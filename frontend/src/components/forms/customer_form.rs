use shared::{CustomerFormFields, CustomerPayload, FormError};
use web_sys::{HtmlInputElement, HtmlSelectElement, MouseEvent};
use yew::prelude::*;

use crate::hooks::use_customers::CustomerModal;

const GENDERS: [&str; 3] = ["Male", "Female", "Other"];

#[derive(Properties, PartialEq)]
pub struct CustomerFormModalProps {
    pub modal: CustomerModal,
    pub submitting: bool,
    pub on_submit: Callback<CustomerPayload>,
    pub on_cancel: Callback<()>,
}

/// Modal form for creating or editing a customer.
#[function_component(CustomerFormModal)]
pub fn customer_form_modal(props: &CustomerFormModalProps) -> Html {
    let fields = use_state(CustomerFormFields::empty);
    let terms_error = use_state(|| false);
    let field_error = use_state(|| Option::<String>::None);

    use_effect_with(props.modal.clone(), {
        let fields = fields.clone();
        let terms_error = terms_error.clone();
        let field_error = field_error.clone();
        move |modal: &CustomerModal| {
            match modal {
                CustomerModal::Create => fields.set(CustomerFormFields::empty()),
                CustomerModal::Edit(record) => {
                    fields.set(CustomerFormFields::from_record(record));
                }
                CustomerModal::Closed => {}
            }
            terms_error.set(false);
            field_error.set(None);
            || ()
        }
    });

    let text_input = |apply: fn(&mut CustomerFormFields, String)| {
        let fields = fields.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*fields).clone();
            apply(&mut next, input.value());
            fields.set(next);
        })
    };

    let on_gender_change = {
        let fields = fields.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*fields).clone();
            next.gender = select.value();
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

    let is_edit = matches!(props.modal, CustomerModal::Edit(_));
    if matches!(props.modal, CustomerModal::Closed) {
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
                    {if is_edit { "Edit Customer" } else { "Add Customer" }}
                </h3>

                {if let Some(error) = (*field_error).clone() {
                    html! { <div class="form-message error">{error}</div> }
                } else {
                    html! {}
                }}

                <form class="entity-form" onsubmit={on_submit}>
                    <div class="form-grid">
                        {field(
                            "customer-first-name",
                            "First Name",
                            "text",
                            fields.first_name.clone(),
                            text_input(|f, v| f.first_name = v),
                        )}
                        {field(
                            "customer-last-name",
                            "Last Name",
                            "text",
                            fields.last_name.clone(),
                            text_input(|f, v| f.last_name = v),
                        )}
                        <div class="form-group">
                            <label for="customer-gender">{"Gender"}</label>
                            <select
                                id="customer-gender"
                                onchange={on_gender_change}
                                disabled={disabled}
                            >
                                <option value="" selected={fields.gender.is_empty()}>
                                    {"Select gender"}
                                </option>
                                {for GENDERS.iter().map(|gender| html! {
                                    <option
                                        value={*gender}
                                        selected={fields.gender == *gender}
                                    >
                                        {*gender}
                                    </option>
                                })}
                            </select>
                        </div>
                        {field(
                            "customer-email",
                            "Email",
                            "email",
                            fields.email.clone(),
                            text_input(|f, v| f.email = v),
                        )}
                        {field(
                            "customer-phone",
                            "Phone Number",
                            "tel",
                            fields.phone_number.clone(),
                            text_input(|f, v| f.phone_number = v),
                        )}
                        {field(
                            "customer-address",
                            "Address",
                            "text",
                            fields.address.clone(),
                            text_input(|f, v| f.address = v),
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
                                "Edit Customer"
                            } else {
                                "Add Customer"
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
