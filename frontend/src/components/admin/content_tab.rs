use jumat_berkah_backend::domain::formatting::format_date_id;
use jumat_berkah_backend::{Command, NewArticle, NewGalleryItem, UiEvent};
use shared::{Article, Collection, GalleryItem, MediaType};
use yew::prelude::*;

use super::fields::{bind_input, bind_textarea, select_value};

#[derive(Properties, PartialEq)]
pub struct ContentTabProps {
    pub articles: Vec<Article>,
    pub gallery: Vec<GalleryItem>,
    pub on_event: Callback<UiEvent>,
}

fn delete(on_event: &Callback<UiEvent>, collection: Collection, id: &str) -> Callback<MouseEvent> {
    let on_event = on_event.clone();
    let id = id.to_string();
    Callback::from(move |_: MouseEvent| {
        on_event.emit(UiEvent::Admin(Command::DeleteItem {
            collection,
            id: id.clone(),
        }))
    })
}

#[function_component(ContentTab)]
pub fn content_tab(props: &ContentTabProps) -> Html {
    let title = use_state(String::new);
    let content = use_state(String::new);
    let image_url = use_state(String::new);

    let media_url = use_state(String::new);
    let caption = use_state(String::new);
    let media_type = use_state(MediaType::default);

    let on_article_submit = {
        let title = title.clone();
        let content = content.clone();
        let image_url = image_url.clone();
        let on_event = props.on_event.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_event.emit(UiEvent::Admin(Command::AddArticle(NewArticle {
                title: (*title).clone(),
                content: (*content).clone(),
                image_url: (*image_url).clone(),
                date: None,
            })));
            title.set(String::new());
            content.set(String::new());
            image_url.set(String::new());
        })
    };

    let on_gallery_submit = {
        let media_url = media_url.clone();
        let caption = caption.clone();
        let media_type = media_type.clone();
        let on_event = props.on_event.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_event.emit(UiEvent::Admin(Command::AddGalleryItem(NewGalleryItem {
                url: (*media_url).clone(),
                caption: (*caption).clone(),
                media_type: *media_type,
            })));
            media_url.set(String::new());
            caption.set(String::new());
        })
    };

    let on_media_type_change = {
        let media_type = media_type.clone();
        Callback::from(move |e: Event| {
            let value = select_value(&e);
            media_type.set(if value == "video" { MediaType::Video } else { MediaType::Image });
        })
    };

    html! {
        <div class="admin-tab content-tab">
            <section class="admin-form-section">
                <h2>{"Tulis Artikel"}</h2>
                <form class="admin-form" onsubmit={on_article_submit}>
                    <div class="form-group">
                        <label>{"Judul"}</label>
                        <input type="text" value={(*title).clone()} oninput={bind_input(&title)} required=true />
                    </div>
                    <div class="form-group">
                        <label>{"Isi"}</label>
                        <textarea value={(*content).clone()} oninput={bind_textarea(&content)} rows="5" />
                    </div>
                    <div class="form-group">
                        <label>{"URL Gambar"}</label>
                        <input type="url" value={(*image_url).clone()} oninput={bind_input(&image_url)} />
                    </div>
                    <button type="submit" class="btn btn-primary">{"Publish Artikel"}</button>
                </form>

                <h2>{"Tambah Galeri"}</h2>
                <form class="admin-form" onsubmit={on_gallery_submit}>
                    <div class="form-group">
                        <label>{"URL Media"}</label>
                        <input type="url" value={(*media_url).clone()} oninput={bind_input(&media_url)} required=true />
                    </div>
                    <div class="form-group">
                        <label>{"Keterangan"}</label>
                        <input type="text" value={(*caption).clone()} oninput={bind_input(&caption)} />
                    </div>
                    <div class="form-group">
                        <label>{"Jenis"}</label>
                        <select onchange={on_media_type_change}>
                            <option value="image" selected={*media_type == MediaType::Image}>{"Gambar"}</option>
                            <option value="video" selected={*media_type == MediaType::Video}>{"Video"}</option>
                        </select>
                    </div>
                    <button type="submit" class="btn btn-primary">{"Simpan Media"}</button>
                </form>
            </section>

            <section class="admin-list-section">
                <h2>{"Artikel"}</h2>
                <ul class="record-list">
                    {for props.articles.iter().map(|article| html! {
                        <li key={article.id.clone()} class="record">
                            <div class="record-main">
                                <p>{&article.title}</p>
                                <p class="muted">{format_date_id(article.date)}</p>
                            </div>
                            <button class="btn btn-danger" onclick={delete(&props.on_event, Collection::Articles, &article.id)}>
                                {"Hapus"}
                            </button>
                        </li>
                    })}
                </ul>

                <h2>{"Galeri"}</h2>
                <ul class="record-list">
                    {for props.gallery.iter().map(|item| html! {
                        <li key={item.id.clone()} class="record">
                            <div class="record-main">
                                <p>{if item.caption.is_empty() { &item.url } else { &item.caption }}</p>
                                <p class="muted">
                                    {match item.media_type {
                                        MediaType::Image => "Gambar",
                                        MediaType::Video => "Video",
                                    }}
                                </p>
                            </div>
                            <button class="btn btn-danger" onclick={delete(&props.on_event, Collection::Gallery, &item.id)}>
                                {"Hapus"}
                            </button>
                        </li>
                    })}
                </ul>
            </section>
        </div>
    }
}
