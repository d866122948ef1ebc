use shared::Restaurant;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RestaurantTableProps {
    pub restaurants: Vec<Restaurant>,
    pub loading: bool,
    pub on_edit: Callback<Restaurant>,
    pub on_delete: Callback<Restaurant>,
}

#[function_component(RestaurantTable)]
pub fn restaurant_table(props: &RestaurantTableProps) -> Html {
    if props.loading {
        return html! { <div class="loading">{"Loading restaurants..."}</div> };
    }

    html! {
        <div class="table-container">
            <table class="data-table">
                <thead>
                    <tr>
                        <th>{"Restaurant Name"}</th>
                        <th>{"LLC"}</th>
                        <th>{"Owner Name"}</th>
                        <th>{"Email"}</th>
                        <th>{"Status"}</th>
                        <th>{"Action"}</th>
                    </tr>
                </thead>
                <tbody>
                    {for props.restaurants.iter().map(|record| {
                        let on_edit = {
                            let on_edit = props.on_edit.clone();
                            let record = record.clone();
                            Callback::from(move |_| on_edit.emit(record.clone()))
                        };
                        let on_delete = {
                            let on_delete = props.on_delete.clone();
                            let record = record.clone();
                            Callback::from(move |_| on_delete.emit(record.clone()))
                        };
                        let (tag_class, tag_text) = if record.is_accepted {
                            ("tag tag-green", "Accepted")
                        } else {
                            ("tag tag-red", "Not Accepted")
                        };

                        html! {
                            <tr key={record.id.clone()}>
                                <td>{&record.restaurant_name}</td>
                                <td>{&record.llc}</td>
                                <td>{&record.owner_name}</td>
                                <td>{&record.email}</td>
                                <td><span class={tag_class}>{tag_text}</span></td>
                                <td class="actions">
                                    <button
                                        class="icon-btn"
                                        title="Edit"
                                        onclick={on_edit}
                                    >
                                        <i class="fas fa-edit"></i>
                                    </button>
                                    <button
                                        class="icon-btn danger"
                                        title="Delete"
                                        onclick={on_delete}
                                    >
                                        <i class="fas fa-trash"></i>
                                    </button>
                                </td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>
            {if props.restaurants.is_empty() {
                html! { <div class="empty-state">{"No restaurants found"}</div> }
            } else {
                html! {}
            }}
        </div>
    }
}
