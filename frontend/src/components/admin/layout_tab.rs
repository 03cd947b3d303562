use jumat_berkah_backend::{Command, UiEvent};
use shared::{BorderRadius, FontFamily, HeaderStyle, LayoutConfig, PrimaryColor, ThemeMode};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::fields::{pick, select_value};

/// Free-text layout fields editable from the form
#[derive(Debug, Clone, Copy, PartialEq)]
enum TextField {
    FoundationName,
    FoundationDescription,
    HeroImageUrl,
    QrisImageUrl,
    DonationTitle,
    DonationDescription,
    AboutUs,
    Vision,
    Mission,
    Goals,
    InstagramUrl,
}

impl TextField {
    const ALL: [TextField; 11] = [
        TextField::FoundationName,
        TextField::FoundationDescription,
        TextField::HeroImageUrl,
        TextField::QrisImageUrl,
        TextField::DonationTitle,
        TextField::DonationDescription,
        TextField::AboutUs,
        TextField::Vision,
        TextField::Mission,
        TextField::Goals,
        TextField::InstagramUrl,
    ];

    fn label(self) -> &'static str {
        match self {
            TextField::FoundationName => "Nama Yayasan",
            TextField::FoundationDescription => "Deskripsi Yayasan",
            TextField::HeroImageUrl => "URL Gambar Banner",
            TextField::QrisImageUrl => "URL Gambar QRIS",
            TextField::DonationTitle => "Judul Donasi",
            TextField::DonationDescription => "Deskripsi Donasi",
            TextField::AboutUs => "Tentang Kami",
            TextField::Vision => "Visi",
            TextField::Mission => "Misi",
            TextField::Goals => "Tujuan",
            TextField::InstagramUrl => "URL Instagram",
        }
    }

    fn multiline(self) -> bool {
        matches!(
            self,
            TextField::FoundationDescription
                | TextField::DonationDescription
                | TextField::AboutUs
                | TextField::Vision
                | TextField::Mission
                | TextField::Goals
        )
    }

    fn slot(self, layout: &mut LayoutConfig) -> &mut String {
        match self {
            TextField::FoundationName => &mut layout.foundation_name,
            TextField::FoundationDescription => &mut layout.foundation_description,
            TextField::HeroImageUrl => &mut layout.hero_image_url,
            TextField::QrisImageUrl => &mut layout.qris_image_url,
            TextField::DonationTitle => &mut layout.donation_title,
            TextField::DonationDescription => &mut layout.donation_description,
            TextField::AboutUs => &mut layout.about_us,
            TextField::Vision => &mut layout.vision,
            TextField::Mission => &mut layout.mission,
            TextField::Goals => &mut layout.goals,
            TextField::InstagramUrl => &mut layout.instagram_url,
        }
    }

    fn value(self, layout: &LayoutConfig) -> &str {
        match self {
            TextField::FoundationName => &layout.foundation_name,
            TextField::FoundationDescription => &layout.foundation_description,
            TextField::HeroImageUrl => &layout.hero_image_url,
            TextField::QrisImageUrl => &layout.qris_image_url,
            TextField::DonationTitle => &layout.donation_title,
            TextField::DonationDescription => &layout.donation_description,
            TextField::AboutUs => &layout.about_us,
            TextField::Vision => &layout.vision,
            TextField::Mission => &layout.mission,
            TextField::Goals => &layout.goals,
            TextField::InstagramUrl => &layout.instagram_url,
        }
    }
}

fn update(form: &UseStateHandle<LayoutConfig>, change: impl FnOnce(&mut LayoutConfig)) {
    let mut next = (**form).clone();
    change(&mut next);
    form.set(next);
}

#[derive(Properties, PartialEq)]
pub struct LayoutTabProps {
    pub layout: LayoutConfig,
    pub on_event: Callback<UiEvent>,
}

#[function_component(LayoutTab)]
pub fn layout_tab(props: &LayoutTabProps) -> Html {
    let form = use_state(|| props.layout.clone());

    // Pick up saved or reset layouts
    use_effect_with(props.layout.clone(), {
        let form = form.clone();
        move |layout| {
            form.set(layout.clone());
            || ()
        }
    });

    let text_input = |field: TextField| {
        let value = field.value(&form).to_string();
        let form = form.clone();
        if field.multiline() {
            let oninput = Callback::from(move |e: InputEvent| {
                let input: HtmlTextAreaElement = e.target_unchecked_into();
                update(&form, |layout| *field.slot(layout) = input.value());
            });
            html! { <textarea rows="3" {value} {oninput} /> }
        } else {
            let oninput = Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                update(&form, |layout| *field.slot(layout) = input.value());
            });
            html! { <input type="text" {value} {oninput} /> }
        }
    };

    let on_font_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            if let Some(font) = pick(&FontFamily::ALL, &select_value(&e), FontFamily::as_str) {
                update(&form, |layout| layout.font_family = font);
            }
        })
    };

    let on_radius_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            if let Some(radius) = pick(&BorderRadius::ALL, &select_value(&e), BorderRadius::as_str) {
                update(&form, |layout| layout.border_radius = radius);
            }
        })
    };

    let on_header_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            if let Some(style) = pick(&HeaderStyle::ALL, &select_value(&e), HeaderStyle::as_str) {
                update(&form, |layout| layout.header_style = style);
            }
        })
    };

    let on_theme_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            if let Some(mode) = pick(&ThemeMode::ALL, &select_value(&e), ThemeMode::as_str) {
                update(&form, |layout| layout.theme_mode = mode);
            }
        })
    };

    let on_animation_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            update(&form, |layout| layout.animation_enabled = input.checked());
        })
    };

    let on_donation_toggle = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            update(&form, |layout| layout.show_donation_section = input.checked());
        })
    };

    let on_save = {
        let form = form.clone();
        let on_event = props.on_event.clone();
        Callback::from(move |_: MouseEvent| {
            on_event.emit(UiEvent::Admin(Command::UpdateLayout((*form).clone())));
        })
    };

    html! {
        <div class="admin-tab layout-tab">
            <section class="admin-form-section">
                <h3>{"Pengaturan Dasar"}</h3>
                <div class="form-group">
                    <label>{"Palet Warna"}</label>
                    <div class="color-swatches">
                        {for PrimaryColor::ALL.into_iter().map(|color| {
                            let onclick = {
                                let form = form.clone();
                                Callback::from(move |_: MouseEvent| update(&form, |layout| layout.primary_color = color))
                            };
                            html! {
                                <button
                                    class={classes!("swatch", color.as_str(), (form.primary_color == color).then_some("selected"))}
                                    title={color.as_str()}
                                    {onclick}
                                />
                            }
                        })}
                    </div>
                </div>
                <div class="form-group">
                    <label>{"Font"}</label>
                    <select onchange={on_font_change}>
                        {for FontFamily::ALL.into_iter().map(|font| html! {
                            <option value={font.as_str()} selected={form.font_family == font}>{font.as_str()}</option>
                        })}
                    </select>
                </div>
                <div class="form-group">
                    <label>{"Sudut"}</label>
                    <select onchange={on_radius_change}>
                        {for BorderRadius::ALL.into_iter().map(|radius| html! {
                            <option value={radius.as_str()} selected={form.border_radius == radius}>{radius.as_str()}</option>
                        })}
                    </select>
                </div>
                <div class="form-group">
                    <label>{"Gaya Header"}</label>
                    <select onchange={on_header_change}>
                        {for HeaderStyle::ALL.into_iter().map(|style| html! {
                            <option value={style.as_str()} selected={form.header_style == style}>{style.as_str()}</option>
                        })}
                    </select>
                </div>
                <div class="form-group">
                    <label>{"Tema"}</label>
                    <select onchange={on_theme_change}>
                        {for ThemeMode::ALL.into_iter().map(|mode| html! {
                            <option value={mode.as_str()} selected={form.theme_mode == mode}>{mode.as_str()}</option>
                        })}
                    </select>
                </div>
                <label class="checkbox">
                    <input type="checkbox" checked={form.animation_enabled} onchange={on_animation_change} />
                    <span>{"Aktifkan Animasi"}</span>
                </label>
            </section>

            <section class="admin-form-section">
                <h3>{"Modul Donasi & Konten"}</h3>
                <label class="checkbox">
                    <input type="checkbox" checked={form.show_donation_section} onchange={on_donation_toggle} />
                    <span>{"Aktifkan Section QRIS Donasi"}</span>
                </label>
                {for TextField::ALL.into_iter().map(|field| html! {
                    <div class="form-group">
                        <label>{field.label()}</label>
                        {text_input(field)}
                    </div>
                })}
            </section>

            <button class="btn btn-primary" onclick={on_save}>{"Update Visual App"}</button>
        </div>
    }
}
