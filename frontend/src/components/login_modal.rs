use jumat_berkah_backend::UiEvent;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoginModalProps {
    pub is_open: bool,
    pub error: Option<String>,
    pub on_event: Callback<UiEvent>,
}

#[function_component(LoginModal)]
pub fn login_modal(props: &LoginModalProps) -> Html {
    let username = use_state(String::new);
    let password = use_state(String::new);

    // Start from empty fields every time the prompt opens
    use_effect_with(props.is_open, {
        let username = username.clone();
        let password = password.clone();
        move |is_open| {
            if *is_open {
                username.set(String::new());
                password.set(String::new());
            }
            || ()
        }
    });

    let on_username_input = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            username.set(input.value());
        })
    };

    let on_password_input = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let username = username.clone();
        let password = password.clone();
        let on_event = props.on_event.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_event.emit(UiEvent::LoginSubmitted {
                username: (*username).clone(),
                password: (*password).clone(),
            });
            password.set(String::new());
        })
    };

    let on_cancel = {
        let on_event = props.on_event.clone();
        Callback::from(move |_: MouseEvent| on_event.emit(UiEvent::LoginDismissed))
    };

    if !props.is_open {
        return html! {};
    }

    html! {
        <div class="modal-backdrop">
            <div class="modal login-modal">
                <h2>{"Panel Admin"}</h2>
                <p class="modal-subtitle">{"Kredensial Pengurus"}</p>
                <form class="login-form" onsubmit={on_submit}>
                    <input
                        type="text"
                        placeholder="Username"
                        value={(*username).clone()}
                        oninput={on_username_input}
                        autofocus=true
                    />
                    <input
                        type="password"
                        placeholder="Password"
                        value={(*password).clone()}
                        oninput={on_password_input}
                    />
                    {if let Some(error) = props.error.as_ref() {
                        html! { <p class="form-message error">{error}</p> }
                    } else { html! {} }}
                    <div class="modal-buttons">
                        <button type="button" class="btn btn-secondary" onclick={on_cancel}>
                            {"Batal"}
                        </button>
                        <button type="submit" class="btn btn-primary">
                            {"Masuk"}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
