// src/main.rs
use gloo_net::http::Request;
use simple_image_viewer::gallery_config::{GalleryConfig, GalleryRegistry};
use simple_image_viewer::utils::asset_url;
use simple_image_viewer::ImageViewer;
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq)]
pub enum ViewerFlag {
    DisableScroll,
    DisableCaption,
    CloseOnClickOutside,
    CloseOnClickInside,
}

impl ViewerFlag {
    const ALL: [ViewerFlag; 4] = [
        ViewerFlag::DisableScroll,
        ViewerFlag::DisableCaption,
        ViewerFlag::CloseOnClickOutside,
        ViewerFlag::CloseOnClickInside,
    ];

    fn label(self) -> &'static str {
        match self {
            ViewerFlag::DisableScroll => "Disable wheel navigation",
            ViewerFlag::DisableCaption => "Hide captions",
            ViewerFlag::CloseOnClickOutside => "Close on backdrop click",
            ViewerFlag::CloseOnClickInside => "Close on image click",
        }
    }
}

pub enum AppMsg {
    ChangeGallery(String),
    OpenViewer(usize),
    CloseViewer,
    SetFlag(ViewerFlag, bool),
    GalleriesLoaded(Vec<GalleryConfig>),
    GalleryLoadFailed(String),
}

pub struct App {
    galleries: Vec<GalleryConfig>,
    current_gallery: String,
    viewer_index: Option<usize>,
    loading: bool,
}

impl App {
    fn current(&self) -> Option<&GalleryConfig> {
        self.galleries.iter().find(|g| g.id == self.current_gallery)
    }

    fn current_mut(&mut self) -> Option<&mut GalleryConfig> {
        let id = self.current_gallery.clone();
        self.galleries.iter_mut().find(|g| g.id == id)
    }

    fn use_galleries(&mut self, galleries: Vec<GalleryConfig>) {
        self.galleries = galleries;
        self.galleries.sort_by(|a, b| a.name.cmp(&b.name));
        self.viewer_index = None;
        self.loading = false;
        if let Some(first) = self.galleries.first() {
            self.current_gallery = first.id.clone();
        }
    }

    fn flag(&self, flag: ViewerFlag) -> bool {
        self.current()
            .map(|g| match flag {
                ViewerFlag::DisableScroll => g.viewer.disable_scroll,
                ViewerFlag::DisableCaption => g.viewer.disable_caption,
                ViewerFlag::CloseOnClickOutside => g.viewer.close_on_click_outside,
                ViewerFlag::CloseOnClickInside => g.viewer.close_on_click_inside,
            })
            .unwrap_or(false)
    }

    fn render_flags(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="viewer-flags">
                { for ViewerFlag::ALL.iter().map(|&flag| {
                    let onchange = ctx.link().batch_callback(move |e: Event| {
                        e.target_dyn_into::<web_sys::HtmlInputElement>()
                            .map(|input| AppMsg::SetFlag(flag, input.checked()))
                    });
                    html! {
                        <label>
                            <input type="checkbox" checked={self.flag(flag)} {onchange} />
                            { flag.label() }
                        </label>
                    }
                }) }
            </div>
        }
    }

    fn render_thumbnails(&self, ctx: &Context<Self>, gallery: &GalleryConfig) -> Html {
        html! {
            <div class="thumbnail-grid">
                { for gallery.images.iter().enumerate().map(|(index, entry)| {
                    let onclick = ctx.link().callback(move |_| AppMsg::OpenViewer(index));
                    html! {
                        <img
                            class="thumbnail"
                            src={asset_url(&entry.src)}
                            alt={entry.alt.clone().unwrap_or_default()}
                            {onclick}
                        />
                    }
                }) }
            </div>
        }
    }
}

impl Component for App {
    type Message = AppMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_future(async {
            match load_all_manifests().await {
                Ok(configs) => AppMsg::GalleriesLoaded(configs),
                Err(e) => AppMsg::GalleryLoadFailed(e),
            }
        });

        Self {
            galleries: Vec::new(),
            current_gallery: String::new(),
            viewer_index: None,
            loading: true,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AppMsg::ChangeGallery(id) => {
                self.current_gallery = id;
                self.viewer_index = None;
                true
            }
            AppMsg::OpenViewer(index) => {
                log::info!("Opening viewer at image {}", index);
                self.viewer_index = Some(index);
                true
            }
            AppMsg::CloseViewer => {
                self.viewer_index = None;
                true
            }
            AppMsg::SetFlag(flag, value) => {
                if let Some(gallery) = self.current_mut() {
                    let options = &mut gallery.viewer;
                    match flag {
                        ViewerFlag::DisableScroll => options.disable_scroll = value,
                        ViewerFlag::DisableCaption => options.disable_caption = value,
                        ViewerFlag::CloseOnClickOutside => options.close_on_click_outside = value,
                        ViewerFlag::CloseOnClickInside => options.close_on_click_inside = value,
                    }
                }
                true
            }
            AppMsg::GalleriesLoaded(configs) => {
                self.use_galleries(configs);
                true
            }
            AppMsg::GalleryLoadFailed(error) => {
                log::warn!("{}; falling back to bundled galleries", error);
                self.use_galleries(GalleryRegistry::get_all_galleries().into_values().collect());
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if self.loading {
            return html! {
                <div class="app-container">
                    <main class="app-main">
                        <div class="loading">{"Loading galleries..."}</div>
                    </main>
                </div>
            };
        }

        let Some(gallery) = self.current() else {
            return html! {
                <div class="app-container">
                    <main class="app-main">
                        <div class="error">{"No galleries available."}</div>
                    </main>
                </div>
            };
        };

        let on_gallery_change = ctx.link().callback(AppMsg::ChangeGallery);
        let viewer = self.viewer_index.map(|index| {
            let props = gallery.viewer_props(asset_url, index, ctx.link().callback(|_| AppMsg::CloseViewer));
            html! { <ImageViewer ..props /> }
        });

        html! {
            <div class="app-container">
                <header class="app-header">
                    <h1>{"Simple Image Viewer"}</h1>
                    <p class="subtitle">
                        { format!("{} ({} images)", gallery.description, gallery.get_image_count()) }
                    </p>
                </header>

                <main class="app-main">
                    <div class="gallery-selector">
                        <label for="gallery-select">{"Gallery: "}</label>
                        <select
                            id="gallery-select"
                            onchange={Callback::from(move |e: Event| {
                                if let Some(select) = e.target_dyn_into::<web_sys::HtmlSelectElement>() {
                                    on_gallery_change.emit(select.value());
                                }
                            })}
                        >
                            { for self.galleries.iter().map(|g| html! {
                                <option value={g.id.clone()} selected={g.id == self.current_gallery}>
                                    { g.name.clone() }
                                </option>
                            }) }
                        </select>
                    </div>

                    { self.render_flags(ctx) }
                    { self.render_thumbnails(ctx, gallery) }
                    { for viewer }
                </main>
            </div>
        }
    }
}

async fn load_all_manifests() -> Result<Vec<GalleryConfig>, String> {
    // Galleries we look for under public/galleries/; anything missing is skipped
    let gallery_ids = vec!["sample", "travel"];
    let cache_bust = js_sys::Date::now() as u64;

    let mut configs = Vec::new();

    for gallery_id in gallery_ids {
        let manifest_url = format!(
            "{}?v={}",
            asset_url(&GalleryConfig::manifest_path(gallery_id)),
            cache_bust
        );

        match Request::get(&manifest_url).send().await {
            Ok(resp) if resp.ok() => match resp.text().await {
                Ok(json) => match GalleryConfig::from_json(&json) {
                    Ok(config) => {
                        log::info!("Loaded manifest for gallery: {}", gallery_id);
                        configs.push(config);
                    }
                    Err(e) => log::warn!("{} ({})", e, gallery_id),
                },
                Err(e) => log::warn!("Failed to read manifest for {}: {:?}", gallery_id, e),
            },
            Ok(_) => log::warn!("Manifest not found for gallery: {}", gallery_id),
            Err(e) => log::warn!("Failed to fetch manifest for {}: {:?}", gallery_id, e),
        }
    }

    if configs.is_empty() {
        Err("No gallery manifests could be loaded".to_string())
    } else {
        Ok(configs)
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
