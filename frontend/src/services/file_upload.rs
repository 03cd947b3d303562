use gloo::file::futures::read_as_bytes;
use gloo::file::File;
use jumat_berkah_backend::UiEvent;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::Callback;

/// Read the first file chosen in `input` and report it as a proof image event
pub fn read_selected_proof(input: &HtmlInputElement, on_event: Callback<UiEvent>) {
    let Some(raw) = input.files().and_then(|files| files.get(0)) else {
        return;
    };

    let file = File::from(raw);
    let mime_type = file.raw_mime_type();
    spawn_local(async move {
        match read_as_bytes(&file).await {
            Ok(bytes) => on_event.emit(UiEvent::ProofImageSelected { mime_type, bytes }),
            Err(e) => on_event.emit(UiEvent::ProofImageUnreadable(e.to_string())),
        }
    });
}
