use shared::{Customer, RewardAction};
use web_sys::{HtmlInputElement, HtmlSelectElement, MouseEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RewardModalProps {
    /// Customer and pre-selected direction; `None` keeps the modal closed.
    pub target: Option<(Customer, RewardAction)>,
    pub submitting: bool,
    pub on_confirm: Callback<(u32, RewardAction)>,
    pub on_cancel: Callback<()>,
}

/// Secondary modal for adjusting one customer's reward points. Its field
/// state is its own; the main customer form never sees it.
#[function_component(RewardModal)]
pub fn reward_modal(props: &RewardModalProps) -> Html {
    let points = use_state(String::new);
    let action = use_state(|| RewardAction::Add);
    let error = use_state(|| Option::<String>::None);

    // Fresh fields on every open, pre-set to the row's direction.
    use_effect_with(props.target.clone(), {
        let points = points.clone();
        let action = action.clone();
        let error = error.clone();
        move |target: &Option<(Customer, RewardAction)>| {
            if let Some((_, preset)) = target {
                points.set(String::new());
                action.set(*preset);
                error.set(None);
            }
            || ()
        }
    });

    let on_points_change = {
        let points = points.clone();
        let error = error.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            points.set(input.value());
            error.set(None);
        })
    };

    let on_action_change = {
        let action = action.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            action.set(match select.value().as_str() {
                "redeem" => RewardAction::Redeem,
                _ => RewardAction::Add,
            });
        })
    };

    let on_submit = {
        let points = points.clone();
        let action = action.clone();
        let error = error.clone();
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match (*points).trim().parse::<u32>() {
                Ok(value) if value > 0 => on_confirm.emit((value, *action)),
                _ => error.set(Some("Please input points".to_string())),
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

    let Some((customer, _)) = props.target.as_ref() else {
        return html! {};
    };
    let disabled = props.submitting;

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal" onclick={on_modal_click}>
                <h3 class="modal-title">
                    {format!("Add Reward to {}", customer.full_name())}
                </h3>

                {if let Some(error) = (*error).clone() {
                    html! { <div class="form-message error">{error}</div> }
                } else {
                    html! {}
                }}

                <form class="entity-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="reward-points">{"Points"}</label>
                        <input
                            id="reward-points"
                            type="number"
                            min="1"
                            step="1"
                            value={(*points).clone()}
                            onchange={on_points_change}
                            disabled={disabled}
                        />
                    </div>

                    <div class="form-group">
                        <label for="reward-action">{"Action"}</label>
                        <select
                            id="reward-action"
                            onchange={on_action_change}
                            disabled={disabled}
                        >
                            <option
                                value="add"
                                selected={*action == RewardAction::Add}
                            >
                                {"Add points"}
                            </option>
                            <option
                                value="redeem"
                                selected={*action == RewardAction::Redeem}
                            >
                                {"Redeem points"}
                            </option>
                        </select>
                    </div>

                    <div class="modal-buttons">
                        <button type="submit" class="btn btn-primary" disabled={disabled}>
                            {if disabled { "Submitting..." } else { "OK" }}
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
