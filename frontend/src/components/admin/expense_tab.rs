use jumat_berkah_backend::domain::formatting::{format_date_id, format_rupiah};
use jumat_berkah_backend::{Command, NewExpense, UiEvent};
use shared::{Collection, Expense};
use yew::prelude::*;

use super::fields::bind_input;
use crate::services::form_input::{optional_date, whole_number};

#[derive(Properties, PartialEq)]
pub struct ExpenseTabProps {
    pub expenses: Vec<Expense>,
    pub on_event: Callback<UiEvent>,
}

#[function_component(ExpenseTab)]
pub fn expense_tab(props: &ExpenseTabProps) -> Html {
    let item_name = use_state(String::new);
    let unit_price = use_state(String::new);
    let qty = use_state(|| "1".to_string());
    let date_input = use_state(String::new);

    let on_submit = {
        let item_name = item_name.clone();
        let unit_price = unit_price.clone();
        let qty = qty.clone();
        let date_input = date_input.clone();
        let on_event = props.on_event.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_event.emit(UiEvent::Admin(Command::AddExpense(NewExpense {
                item_name: (*item_name).clone(),
                unit_price: whole_number(&unit_price),
                qty: whole_number(&qty),
                date: optional_date(&date_input),
            })));
            item_name.set(String::new());
            unit_price.set(String::new());
            qty.set("1".to_string());
        })
    };

    html! {
        <div class="admin-tab expense-tab">
            <section class="admin-form-section">
                <h2>{"Input Data Pengeluaran"}</h2>
                <form class="admin-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label>{"Deskripsi Barang"}</label>
                        <input type="text" value={(*item_name).clone()} oninput={bind_input(&item_name)} required=true />
                    </div>
                    <div class="form-row">
                        <div class="form-group">
                            <label>{"Hrg Satuan"}</label>
                            <input type="number" min="0" value={(*unit_price).clone()} oninput={bind_input(&unit_price)} required=true />
                        </div>
                        <div class="form-group">
                            <label>{"Qty"}</label>
                            <input type="number" min="1" value={(*qty).clone()} oninput={bind_input(&qty)} required=true />
                        </div>
                    </div>
                    <div class="form-group">
                        <label>{"Tanggal"}</label>
                        <input type="date" value={(*date_input).clone()} oninput={bind_input(&date_input)} />
                    </div>
                    <button type="submit" class="btn btn-primary">{"Simpan Alokasi"}</button>
                </form>
            </section>

            <section class="admin-list-section">
                <h2>{"Daftar Riwayat"}</h2>
                <ul class="record-list">
                    {for props.expenses.iter().map(|item| {
                        let on_delete = {
                            let on_event = props.on_event.clone();
                            let id = item.id.clone();
                            Callback::from(move |_: MouseEvent| {
                                on_event.emit(UiEvent::Admin(Command::DeleteItem {
                                    collection: Collection::Expenses,
                                    id: id.clone(),
                                }))
                            })
                        };
                        html! {
                            <li key={item.id.clone()} class="record">
                                <div class="record-main">
                                    <p>{&item.item_name}</p>
                                    <p class="muted">
                                        {format!("{} x{} @ {}", format_date_id(item.date), item.qty, format_rupiah(i64::try_from(item.unit_price).unwrap_or(i64::MAX)))}
                                    </p>
                                </div>
                                <span class="record-amount">{format_rupiah(i64::try_from(item.total()).unwrap_or(i64::MAX))}</span>
                                <button class="btn btn-danger" onclick={on_delete}>{"Hapus"}</button>
                            </li>
                        }
                    })}
                </ul>
            </section>
        </div>
    }
}
