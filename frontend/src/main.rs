mod components;
mod hooks;
mod services;

use std::rc::Rc;

use jumat_berkah_backend::AppConfig;
use shared::ViewMode;
use yew::prelude::*;

use components::admin::AdminDashboard;
use components::donation_modal::DonationModal;
use components::login_modal::LoginModal;
use components::notice_banner::NoticeBanner;
use components::public_view::PublicView;
use hooks::use_app_controller::{use_app_controller, UseAppControllerResult};

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| AppConfig::default());
    let UseAppControllerResult { state, on_event } = use_app_controller(&config);
    let controller = state.controller();
    let data = controller.shared_data();

    html! {
        <div class="app">
            <NoticeBanner notice={controller.notice().cloned()} on_event={on_event.clone()} />

            {match controller.mode() {
                ViewMode::Admin => html! {
                    <AdminDashboard
                        data={Rc::clone(&data)}
                        usage={controller.usage()}
                        quota_bytes={config.storage_quota_bytes}
                        on_event={on_event.clone()}
                    />
                },
                ViewMode::Public => html! {
                    <>
                        <PublicView
                            data={Rc::clone(&data)}
                            summary={controller.summary()}
                            history_expanded={controller.history_expanded()}
                            secret_field={controller.secret_field().to_string()}
                            on_event={on_event.clone()}
                        />
                        <DonationModal
                            flow={controller.donation().clone()}
                            qris_image_url={data.layout.qris_image_url.clone()}
                            on_event={on_event.clone()}
                        />
                        <LoginModal
                            is_open={controller.auth().is_login_prompt_open()}
                            error={controller.auth().login_error().map(str::to_string)}
                            on_event={on_event.clone()}
                        />
                    </>
                },
            }}
        </div>
    }
}

fn main() {
    services::logging::init(AppConfig::default().debug_logging);
    log::info!("Starting Jum'at Berkah");
    yew::Renderer::<App>::new().render();
}
