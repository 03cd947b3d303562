use jumat_berkah_backend::domain::formatting::format_date_id;
use jumat_berkah_backend::{Command, NewDistribution, UiEvent};
use shared::{Collection, Distribution};
use yew::prelude::*;

use super::fields::bind_input;
use crate::services::form_input::{optional_date, whole_number};

#[derive(Properties, PartialEq)]
pub struct DistributionTabProps {
    pub distributions: Vec<Distribution>,
    pub on_event: Callback<UiEvent>,
}

#[function_component(DistributionTab)]
pub fn distribution_tab(props: &DistributionTabProps) -> Html {
    let count = use_state(|| "10".to_string());
    let item_type = use_state(|| "Paket Nasi".to_string());
    let date_input = use_state(String::new);

    let on_submit = {
        let count = count.clone();
        let item_type = item_type.clone();
        let date_input = date_input.clone();
        let on_event = props.on_event.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_event.emit(UiEvent::Admin(Command::AddDistribution(NewDistribution {
                count: whole_number(&count),
                item_type: (*item_type).clone(),
                date: optional_date(&date_input),
            })));
        })
    };

    html! {
        <div class="admin-tab distribution-tab">
            <section class="admin-form-section">
                <h2>{"Input Data Laporan"}</h2>
                <form class="admin-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label>{"Total Paket"}</label>
                        <input type="number" min="1" value={(*count).clone()} oninput={bind_input(&count)} required=true />
                    </div>
                    <div class="form-group">
                        <label>{"Item Disalurkan"}</label>
                        <input type="text" value={(*item_type).clone()} oninput={bind_input(&item_type)} required=true />
                    </div>
                    <div class="form-group">
                        <label>{"Tanggal"}</label>
                        <input type="date" value={(*date_input).clone()} oninput={bind_input(&date_input)} />
                    </div>
                    <button type="submit" class="btn btn-primary">{"Publish Laporan"}</button>
                </form>
            </section>

            <section class="admin-list-section">
                <h2>{"Daftar Riwayat"}</h2>
                <ul class="record-list">
                    {for props.distributions.iter().map(|item| {
                        let on_delete = {
                            let on_event = props.on_event.clone();
                            let id = item.id.clone();
                            Callback::from(move |_: MouseEvent| {
                                on_event.emit(UiEvent::Admin(Command::DeleteItem {
                                    collection: Collection::Distributions,
                                    id: id.clone(),
                                }))
                            })
                        };
                        html! {
                            <li key={item.id.clone()} class="record">
                                <div class="record-main">
                                    <p>{format!("{} {}", item.count, item.item_type)}</p>
                                    <p class="muted">{format_date_id(item.date)}</p>
                                </div>
                                <button class="btn btn-danger" onclick={on_delete}>{"Hapus"}</button>
                            </li>
                        }
                    })}
                </ul>
            </section>
        </div>
    }
}
