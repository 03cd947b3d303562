use jumat_berkah_backend::{DonationFlow, DonationPhase, UiEvent};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::file_upload::read_selected_proof;

#[derive(Properties, PartialEq)]
pub struct DonationModalProps {
    pub flow: DonationFlow,
    pub qris_image_url: String,
    pub on_event: Callback<UiEvent>,
}

#[function_component(DonationModal)]
pub fn donation_modal(props: &DonationModalProps) -> Html {
    let flow = &props.flow;
    if !flow.is_modal_open() {
        return html! {};
    }

    let frozen = flow.is_input_frozen();
    let submitting = flow.phase() == DonationPhase::Submitting;

    let on_close = {
        let on_event = props.on_event.clone();
        Callback::from(move |_: MouseEvent| on_event.emit(UiEvent::DonationModalClosed))
    };

    let on_name_input = {
        let on_event = props.on_event.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_event.emit(UiEvent::DonorNameChanged(input.value()));
        })
    };

    let on_amount_input = {
        let on_event = props.on_event.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_event.emit(UiEvent::DonationAmountChanged(input.value()));
        })
    };

    let on_file_change = {
        let on_event = props.on_event.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            read_selected_proof(&input, on_event.clone());
        })
    };

    let on_submit = {
        let on_event = props.on_event.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_event.emit(UiEvent::DonationSubmitted);
        })
    };

    html! {
        <div class="modal-backdrop">
            <div class="modal donation-modal">
                <button class="modal-close" onclick={on_close} disabled={submitting}>{"×"}</button>

                <div class="qris-panel">
                    <h3>{"QRIS Donasi"}</h3>
                    <p class="modal-subtitle">{"Scan via E-Wallet / Mobile Banking"}</p>
                    <img class="qris-image" src={props.qris_image_url.clone()} alt="QRIS" />
                </div>

                <div class="confirmation-panel">
                    <h4>{"Konfirmasi Donasi"}</h4>
                    {if flow.phase() == DonationPhase::Success {
                        html! {
                            <div class="form-message success">
                                <h5>{"Terima Kasih!"}</h5>
                                <p>{"Donasi Anda sangat berarti bagi kelancaran kegiatan kami."}</p>
                            </div>
                        }
                    } else {
                        html! {
                            <form class="donation-form" onsubmit={on_submit}>
                                <div class="form-group">
                                    <label for="donor-name">{"Nama Anda"}</label>
                                    <input
                                        type="text"
                                        id="donor-name"
                                        placeholder="Hamba Allah"
                                        value={flow.donor_name().to_string()}
                                        oninput={on_name_input}
                                        disabled={frozen}
                                    />
                                </div>
                                <div class="form-group">
                                    <label for="donation-amount">{"Nominal Donasi"}</label>
                                    <input
                                        type="text"
                                        id="donation-amount"
                                        inputmode="numeric"
                                        placeholder="Contoh: 50000"
                                        value={flow.amount_input().to_string()}
                                        oninput={on_amount_input}
                                        disabled={frozen}
                                    />
                                </div>
                                <div class="form-group">
                                    <label for="proof-image">{"Bukti Bayar"}</label>
                                    <input
                                        type="file"
                                        id="proof-image"
                                        accept="image/*"
                                        onchange={on_file_change}
                                        disabled={frozen}
                                    />
                                    <span class="upload-status">
                                        {if flow.proof_image().is_some() { "Gambar Terlampir" } else { "Upload Screenshot" }}
                                    </span>
                                </div>
                                {if let Some(error) = flow.error_message() {
                                    html! { <div class="form-message error">{error}</div> }
                                } else { html! {} }}
                                <button type="submit" class="btn btn-primary" disabled={frozen}>
                                    {if submitting { "Mengirim..." } else { "Kirim Laporan Donasi" }}
                                </button>
                            </form>
                        }
                    }}
                </div>
            </div>
        </div>
    }
}
