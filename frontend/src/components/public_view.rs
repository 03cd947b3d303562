use std::rc::Rc;

use jumat_berkah_backend::domain::formatting::{format_date_id, format_rupiah, format_short_date};
use jumat_berkah_backend::domain::totals_service::recent_incomes;
use jumat_berkah_backend::UiEvent;
use shared::{AppData, FinancialSummary, MediaType, ThemeMode};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::header::Header;
use super::summary_cards::SummaryCards;

#[derive(Properties, PartialEq)]
pub struct PublicViewProps {
    pub data: Rc<AppData>,
    pub summary: FinancialSummary,
    pub history_expanded: bool,
    pub secret_field: String,
    pub on_event: Callback<UiEvent>,
}

fn amount(value: u64) -> String {
    format_rupiah(i64::try_from(value).unwrap_or(i64::MAX))
}

#[function_component(PublicView)]
pub fn public_view(props: &PublicViewProps) -> Html {
    let layout = &props.data.layout;

    let on_toggle_history = {
        let on_event = props.on_event.clone();
        Callback::from(move |_: ()| on_event.emit(UiEvent::HistoryToggled))
    };

    let on_open_donation = {
        let on_event = props.on_event.clone();
        Callback::from(move |_: MouseEvent| on_event.emit(UiEvent::DonationModalOpened))
    };

    let on_secret_input = {
        let on_event = props.on_event.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_event.emit(UiEvent::SecretCodeTyped(input.value()));
        })
    };

    let theme = match layout.theme_mode {
        ThemeMode::Light => "theme-light",
        ThemeMode::Soft => "theme-soft",
    };

    html! {
        <div class={classes!("public-view", theme)} style={format!("font-family: '{}'", layout.font_family.as_str())}>
            <Header
                layout={layout.clone()}
                latest_distribution={props.summary.latest_distribution.clone()}
                history_expanded={props.history_expanded}
                on_toggle_history={on_toggle_history}
            />

            <main class="container">
                <SummaryCards summary={props.summary.clone()} border_radius={layout.border_radius} />

                {if props.history_expanded {
                    html! {
                        <div class="history">
                            <section class="history-section">
                                <h3>{"Riwayat Masuk"}</h3>
                                <table class="history-table">
                                    <thead>
                                        <tr><th>{"Donatur"}</th><th>{"Tgl"}</th><th>{"Nominal"}</th></tr>
                                    </thead>
                                    <tbody>
                                        {for recent_incomes(&props.data, None).into_iter().map(|income| html! {
                                            <tr key={income.id.clone()}>
                                                <td>{&income.donor_name}</td>
                                                <td>{format_short_date(income.date)}</td>
                                                <td>{amount(income.amount)}</td>
                                            </tr>
                                        })}
                                    </tbody>
                                </table>
                            </section>
                            <section class="history-section">
                                <h3>{"Riwayat Keluar"}</h3>
                                <table class="history-table">
                                    <thead>
                                        <tr><th>{"Barang"}</th><th>{"Qty"}</th><th>{"Total"}</th></tr>
                                    </thead>
                                    <tbody>
                                        {for props.data.expenses.iter().map(|expense| html! {
                                            <tr key={expense.id.clone()}>
                                                <td>
                                                    <div>{&expense.item_name}</div>
                                                    <div class="muted">{format_date_id(expense.date)}</div>
                                                </td>
                                                <td>{format!("x{}", expense.qty)}</td>
                                                <td>{amount(expense.total())}</td>
                                            </tr>
                                        })}
                                    </tbody>
                                </table>
                            </section>
                        </div>
                    }
                } else { html! {} }}

                {if layout.show_donation_section {
                    html! {
                        <section class={classes!("donation-section", layout.border_radius.as_str())}>
                            <h2>{&layout.donation_title}</h2>
                            <p>{&layout.donation_description}</p>
                            <button class="btn btn-primary" onclick={on_open_donation}>
                                {"Scan QRIS Donasi"}
                            </button>
                        </section>
                    }
                } else { html! {} }}

                {if !props.data.articles.is_empty() {
                    html! {
                        <section class="articles">
                            <h3>{"Kabar Kegiatan"}</h3>
                            {for props.data.articles.iter().rev().map(|article| html! {
                                <article key={article.id.clone()} class="article-card">
                                    {if !article.image_url.is_empty() {
                                        html! { <img src={article.image_url.clone()} alt={article.title.clone()} /> }
                                    } else { html! {} }}
                                    <h4>{&article.title}</h4>
                                    <p class="muted">{format_date_id(article.date)}</p>
                                    <p>{&article.content}</p>
                                </article>
                            })}
                        </section>
                    }
                } else { html! {} }}

                {if !props.data.gallery.is_empty() {
                    html! {
                        <section class="gallery">
                            <h3>{"Galeri"}</h3>
                            <div class="gallery-grid">
                                {for props.data.gallery.iter().map(|item| html! {
                                    <figure key={item.id.clone()}>
                                        {match item.media_type {
                                            MediaType::Image => html! { <img src={item.url.clone()} alt={item.caption.clone()} /> },
                                            MediaType::Video => html! { <video src={item.url.clone()} controls=true /> },
                                        }}
                                        <figcaption>{&item.caption}</figcaption>
                                    </figure>
                                })}
                            </div>
                        </section>
                    }
                } else { html! {} }}

                <section class="about">
                    {for [
                        ("Tentang Kami", &layout.about_us),
                        ("Visi", &layout.vision),
                        ("Misi", &layout.mission),
                        ("Tujuan", &layout.goals),
                    ]
                    .into_iter()
                    .filter(|(_, text)| !text.is_empty())
                    .map(|(title, text)| html! {
                        <div class="about-block">
                            <h4>{title}</h4>
                            <p>{text}</p>
                        </div>
                    })}
                    {if !layout.instagram_url.is_empty() {
                        html! { <a class="instagram-link" href={layout.instagram_url.clone()} target="_blank">{"Instagram"}</a> }
                    } else { html! {} }}
                </section>
            </main>

            <footer class="footer">
                <p>{&layout.foundation_description}</p>
                <input
                    type="password"
                    class="secret-input"
                    placeholder="..."
                    value={props.secret_field.clone()}
                    oninput={on_secret_input}
                />
            </footer>
        </div>
    }
}
