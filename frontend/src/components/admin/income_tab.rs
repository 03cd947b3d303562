use jumat_berkah_backend::domain::formatting::{format_date_id, format_rupiah};
use jumat_berkah_backend::{Command, NewIncome, UiEvent};
use shared::{Collection, Income};
use yew::prelude::*;

use super::fields::bind_input;
use crate::services::form_input::{optional_date, whole_number};

#[derive(Properties, PartialEq)]
pub struct IncomeTabProps {
    pub incomes: Vec<Income>,
    pub pending_incomes: Vec<Income>,
    pub on_event: Callback<UiEvent>,
}

fn amount(value: u64) -> String {
    format_rupiah(i64::try_from(value).unwrap_or(i64::MAX))
}

fn admin(on_event: &Callback<UiEvent>, command: Command) -> Callback<MouseEvent> {
    let on_event = on_event.clone();
    Callback::from(move |_: MouseEvent| on_event.emit(UiEvent::Admin(command.clone())))
}

#[function_component(IncomeTab)]
pub fn income_tab(props: &IncomeTabProps) -> Html {
    let donor_name = use_state(String::new);
    let amount_input = use_state(String::new);
    let date_input = use_state(String::new);
    let viewing_proof = use_state(|| Option::<String>::None);

    let on_submit = {
        let donor_name = donor_name.clone();
        let amount_input = amount_input.clone();
        let date_input = date_input.clone();
        let on_event = props.on_event.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_event.emit(UiEvent::Admin(Command::AddIncome(NewIncome {
                donor_name: (*donor_name).clone(),
                amount: whole_number(&amount_input),
                date: optional_date(&date_input),
                proof_image: None,
            })));
            donor_name.set(String::new());
            amount_input.set(String::new());
        })
    };

    let view_proof = |proof: &str| {
        let viewing_proof = viewing_proof.clone();
        let proof = proof.to_string();
        Callback::from(move |_: MouseEvent| viewing_proof.set(Some(proof.clone())))
    };

    let close_proof = {
        let viewing_proof = viewing_proof.clone();
        Callback::from(move |_: MouseEvent| viewing_proof.set(None))
    };

    html! {
        <div class="admin-tab income-tab">
            <section class="admin-form-section">
                <h2>{"Input Data Donasi"}</h2>
                <form class="admin-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label>{"Nama Donatur"}</label>
                        <input type="text" value={(*donor_name).clone()} oninput={bind_input(&donor_name)} />
                    </div>
                    <div class="form-group">
                        <label>{"Nominal (IDR)"}</label>
                        <input type="number" min="0" value={(*amount_input).clone()} oninput={bind_input(&amount_input)} required=true />
                    </div>
                    <div class="form-group">
                        <label>{"Tanggal"}</label>
                        <input type="date" value={(*date_input).clone()} oninput={bind_input(&date_input)} />
                    </div>
                    <button type="submit" class="btn btn-primary">{"Simpan Transaksi"}</button>
                </form>
            </section>

            <section class="admin-list-section">
                <h2>{format!("Menunggu Verifikasi ({})", props.pending_incomes.len())}</h2>
                {if props.pending_incomes.is_empty() {
                    html! { <p class="muted">{"Tidak ada konfirmasi donasi baru."}</p> }
                } else {
                    html! {
                        <ul class="record-list">
                            {for props.pending_incomes.iter().map(|item| html! {
                                <li key={item.id.clone()} class="record pending">
                                    {if let Some(proof) = item.proof_image.as_deref() {
                                        html! {
                                            <button class="proof-thumb" onclick={view_proof(proof)}>
                                                <img src={proof.to_string()} alt="Bukti" />
                                            </button>
                                        }
                                    } else { html! {} }}
                                    <div class="record-main">
                                        <p>{&item.donor_name}</p>
                                        <p class="muted">{format_date_id(item.date)}</p>
                                    </div>
                                    <span class="record-amount">{amount(item.amount)}</span>
                                    <button class="btn btn-primary" onclick={admin(&props.on_event, Command::ApprovePending { id: item.id.clone() })}>
                                        {"Setujui"}
                                    </button>
                                    <button class="btn btn-danger" onclick={admin(&props.on_event, Command::RejectPending { id: item.id.clone() })}>
                                        {"Tolak"}
                                    </button>
                                </li>
                            })}
                        </ul>
                    }
                }}

                <h2>{"Daftar Riwayat"}</h2>
                <ul class="record-list">
                    {for props.incomes.iter().map(|item| html! {
                        <li key={item.id.clone()} class="record">
                            {if let Some(proof) = item.proof_image.as_deref() {
                                html! {
                                    <button class="proof-thumb" onclick={view_proof(proof)}>
                                        <img src={proof.to_string()} alt="Bukti" />
                                    </button>
                                }
                            } else { html! {} }}
                            <div class="record-main">
                                <p>
                                    {&item.donor_name}
                                    {if item.proof_image.is_some() {
                                        html! { <span class="badge">{"Verified"}</span> }
                                    } else { html! {} }}
                                </p>
                                <p class="muted">{format_date_id(item.date)}</p>
                            </div>
                            <span class="record-amount">{amount(item.amount)}</span>
                            <button
                                class="btn btn-danger"
                                onclick={admin(&props.on_event, Command::DeleteItem { collection: Collection::Incomes, id: item.id.clone() })}
                            >
                                {"Hapus"}
                            </button>
                        </li>
                    })}
                </ul>
            </section>

            {if let Some(proof) = (*viewing_proof).clone() {
                html! {
                    <div class="proof-overlay">
                        <button class="modal-close" onclick={close_proof}>{"×"}</button>
                        <img src={proof} alt="Detail Bukti" />
                    </div>
                }
            } else { html! {} }}
        </div>
    }
}
