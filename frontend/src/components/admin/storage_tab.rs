use gloo::dialogs::confirm;
use jumat_berkah_backend::domain::formatting::format_thousands;
use jumat_berkah_backend::{Command, UiEvent};
use shared::StorageUsage;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StorageTabProps {
    pub usage: StorageUsage,
    pub pending_count: usize,
    pub quota_bytes: Option<usize>,
    pub on_event: Callback<UiEvent>,
}

fn kilobytes(bytes: usize) -> String {
    format!("{} KB", format_thousands((bytes as u64).div_ceil(1024)))
}

#[function_component(StorageTab)]
pub fn storage_tab(props: &StorageTabProps) -> Html {
    let usage = props.usage;

    let on_clear_pending = {
        let on_event = props.on_event.clone();
        Callback::from(move |_: MouseEvent| {
            if confirm("Hapus semua konfirmasi donasi yang belum diverifikasi?") {
                on_event.emit(UiEvent::Admin(Command::ClearPendingQueue));
            }
        })
    };

    let on_reset = {
        let on_event = props.on_event.clone();
        Callback::from(move |_: MouseEvent| {
            let confirmed = confirm("Kembalikan SEMUA data ke kondisi awal? Tindakan ini tidak dapat dibatalkan.");
            if confirmed {
                on_event.emit(UiEvent::Admin(Command::ResetAll { confirmed }));
            }
        })
    };

    html! {
        <div class="admin-tab storage-tab">
            <section class="admin-form-section">
                <h3>{"Penggunaan Penyimpanan"}</h3>
                <table class="usage-table">
                    <tbody>
                        <tr><td>{"Total data"}</td><td>{kilobytes(usage.total_bytes)}</td></tr>
                        <tr><td>{"Catatan transaksi & konten"}</td><td>{kilobytes(usage.structured_bytes())}</td></tr>
                        <tr><td>{"Bukti transfer (terverifikasi)"}</td><td>{kilobytes(usage.confirmed_proof_bytes)}</td></tr>
                        <tr>
                            <td>{format!("Bukti transfer ({} menunggu verifikasi)", props.pending_count)}</td>
                            <td>{kilobytes(usage.pending_proof_bytes)}</td>
                        </tr>
                        {if let Some(quota) = props.quota_bytes {
                            html! { <tr><td>{"Batas browser (perkiraan)"}</td><td>{kilobytes(quota)}</td></tr> }
                        } else { html! {} }}
                    </tbody>
                </table>
            </section>

            <section class="admin-form-section">
                <h3>{"Pemeliharaan"}</h3>
                <p class="muted">
                    {"Bukti transfer disimpan sebagai gambar di browser. Jika penyimpanan penuh, kosongkan antrian konfirmasi donasi."}
                </p>
                <button class="btn btn-secondary" onclick={on_clear_pending} disabled={props.pending_count == 0}>
                    {"Kosongkan Antrian Konfirmasi"}
                </button>
                <button class="btn btn-danger" onclick={on_reset}>
                    {"Reset Semua Data"}
                </button>
            </section>
        </div>
    }
}
