use shared::{Customer, RewardAction};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CustomerTableProps {
    pub customers: Vec<Customer>,
    pub loading: bool,
    pub on_edit: Callback<Customer>,
    pub on_view: Callback<String>,
    pub on_delete: Callback<Customer>,
    pub on_reward: Callback<(Customer, RewardAction)>,
}

#[function_component(CustomerTable)]
pub fn customer_table(props: &CustomerTableProps) -> Html {
    if props.loading {
        return html! { <div class="loading">{"Loading customers..."}</div> };
    }

    html! {
        <div class="table-container">
            <table class="data-table">
                <thead>
                    <tr>
                        <th>{"First Name"}</th>
                        <th>{"Last Name"}</th>
                        <th>{"Gender"}</th>
                        <th>{"Reg on"}</th>
                        <th>{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>
                    {for props.customers.iter().map(|record| {
                        let on_edit = {
                            let on_edit = props.on_edit.clone();
                            let record = record.clone();
                            Callback::from(move |_| on_edit.emit(record.clone()))
                        };
                        let on_view = {
                            let on_view = props.on_view.clone();
                            let id = record.id.clone();
                            Callback::from(move |_| on_view.emit(id.clone()))
                        };
                        let on_delete = {
                            let on_delete = props.on_delete.clone();
                            let record = record.clone();
                            Callback::from(move |_| on_delete.emit(record.clone()))
                        };
                        let on_redeem = {
                            let on_reward = props.on_reward.clone();
                            let record = record.clone();
                            Callback::from(move |_| {
                                on_reward.emit((record.clone(), RewardAction::Redeem))
                            })
                        };
                        let on_add = {
                            let on_reward = props.on_reward.clone();
                            let record = record.clone();
                            Callback::from(move |_| {
                                on_reward.emit((record.clone(), RewardAction::Add))
                            })
                        };

                        html! {
                            <tr key={record.id.clone()}>
                                <td>{&record.first_name}</td>
                                <td>{&record.last_name}</td>
                                <td>{&record.gender}</td>
                                <td>{record.registered_on()}</td>
                                <td class="actions">
                                    <button class="icon-btn" title="Edit" onclick={on_edit}>
                                        <i class="fas fa-edit"></i>
                                    </button>
                                    <button class="icon-btn" title="View" onclick={on_view}>
                                        <i class="fas fa-eye"></i>
                                    </button>
                                    <button
                                        class="icon-btn danger"
                                        title="Delete"
                                        onclick={on_delete}
                                    >
                                        <i class="fas fa-trash"></i>
                                    </button>
                                    <button
                                        class="icon-btn"
                                        title="Redeem points"
                                        onclick={on_redeem}
                                    >
                                        <i class="fas fa-minus"></i>
                                    </button>
                                    <button
                                        class="icon-btn"
                                        title="Add points"
                                        onclick={on_add}
                                    >
                                        <i class="fas fa-plus"></i>
                                    </button>
                                </td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>
            {if props.customers.is_empty() {
                html! { <div class="empty-state">{"No customers found"}</div> }
            } else {
                html! {}
            }}
        </div>
    }
}
