use jumat_berkah_backend::UiEvent;
use shared::Notice;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NoticeBannerProps {
    pub notice: Option<Notice>,
    pub on_event: Callback<UiEvent>,
}

#[function_component(NoticeBanner)]
pub fn notice_banner(props: &NoticeBannerProps) -> Html {
    let Some(notice) = &props.notice else {
        return html! {};
    };

    let kind = match notice {
        Notice::Info(_) => "info",
        Notice::StorageFull(_) => "warning",
        Notice::Error(_) => "error",
    };

    let on_dismiss = {
        let on_event = props.on_event.clone();
        Callback::from(move |_: MouseEvent| on_event.emit(UiEvent::NoticeDismissed))
    };

    html! {
        <div class={classes!("notice", kind)} role="alert">
            <span>{notice.message()}</span>
            <button class="notice-dismiss" onclick={on_dismiss}>{"×"}</button>
        </div>
    }
}
