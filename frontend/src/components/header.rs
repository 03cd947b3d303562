use jumat_berkah_backend::domain::formatting::format_date_id;
use shared::{Distribution, HeaderStyle, LayoutConfig};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub layout: LayoutConfig,
    pub latest_distribution: Option<Distribution>,
    pub history_expanded: bool,
    pub on_toggle_history: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let layout = &props.layout;
    let style_class = match layout.header_style {
        HeaderStyle::Gradient => "header-gradient",
        HeaderStyle::Solid => "header-solid",
    };

    let on_toggle = {
        let on_toggle_history = props.on_toggle_history.clone();
        Callback::from(move |_: MouseEvent| on_toggle_history.emit(()))
    };

    html! {
        <header
            class={classes!("header", style_class, layout.border_radius.as_str())}
            data-color={layout.primary_color.as_str()}
        >
            {if !layout.hero_image_url.is_empty() {
                html! { <img class="header-banner" src={layout.hero_image_url.clone()} alt="Banner" /> }
            } else { html! {} }}
            <div class={classes!("container", layout.animation_enabled.then_some("animated"))}>
                <p class="foundation-name">{&layout.foundation_name}</p>
                <h1>
                    {match &props.latest_distribution {
                        Some(latest) => format!("Menyalurkan {} {}", latest.count, latest.item_type),
                        None => "Kegiatan Jum'at Berkah".to_string(),
                    }}
                </h1>
                <p class="header-subtitle">
                    {match &props.latest_distribution {
                        Some(latest) => format_date_id(latest.date),
                        None => "Mari Berbagi Kebahagiaan".to_string(),
                    }}
                </p>
                <button class="btn btn-light" onclick={on_toggle}>
                    {if props.history_expanded { "Tutup Rincian" } else { "Rincian Transparansi" }}
                </button>
            </div>
        </header>
    }
}
