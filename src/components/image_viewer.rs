// src/components/image_viewer.rs
use crate::markup::*;
use crate::viewer_state::{self, ClickZone, ClosePolicy, KeyCommand, ListenerPlan};
use gloo::events::EventListener;
use gloo::utils::document;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, Node, WheelEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ImageViewerProps {
    pub src: Vec<AttrValue>,
    /// Alt text per image, by position. May be shorter than `src`.
    #[prop_or_default]
    pub alt: Option<Vec<Option<AttrValue>>>,
    /// Index shown at mount. Used as given: an index past the end shows an
    /// empty image until the first navigation wraps it back onto the list.
    #[prop_or_default]
    pub current_index: Option<usize>,
    #[prop_or_default]
    pub background_style: Option<AttrValue>,
    #[prop_or_default]
    pub image_style: Option<AttrValue>,
    #[prop_or_default]
    pub caption_style: Option<AttrValue>,
    #[prop_or_default]
    pub disable_scroll: bool,
    #[prop_or_default]
    pub disable_caption: bool,
    #[prop_or_default]
    pub close_on_click_outside: bool,
    #[prop_or_default]
    pub close_on_click_inside: bool,
    #[prop_or_default]
    pub on_close: Option<Callback<()>>,
    #[prop_or_default]
    pub close_component: Option<Html>,
    #[prop_or_default]
    pub left_arrow_component: Option<Html>,
    #[prop_or_default]
    pub right_arrow_component: Option<Html>,
}

/// The displayed position. Every step is applied to the latest index, so a
/// burst of wheel events between two renders still moves one image per event.
#[derive(Debug, Clone, PartialEq)]
struct ViewerIndex {
    index: usize,
}

#[derive(Debug, Clone, Copy)]
struct Step {
    delta: isize,
    len: usize,
}

impl Reducible for ViewerIndex {
    type Action = Step;

    fn reduce(self: Rc<Self>, step: Step) -> Rc<Self> {
        let index = viewer_state::change_image(self.index, step.delta, step.len);
        log::debug!("image viewer: {} -> {} of {}", self.index, index, step.len);
        Rc::new(Self { index })
    }
}

fn emit_close(on_close: &Option<Callback<()>>) {
    log::debug!("image viewer: close requested");
    if let Some(on_close) = on_close {
        on_close.emit(());
    }
}

fn is_target(node_ref: &NodeRef, target: Option<&Node>) -> bool {
    match (node_ref.get(), target) {
        (Some(node), Some(target)) => node.is_same_node(Some(target)),
        _ => false,
    }
}

#[function_component(ImageViewer)]
pub fn image_viewer(props: &ImageViewerProps) -> Html {
    let len = props.src.len();
    let current = {
        let initial = viewer_state::initial_index(props.current_index);
        use_reducer(move || ViewerIndex { index: initial })
    };

    let backdrop_ref = use_node_ref();
    let slide_ref = use_node_ref();
    let image_ref = use_node_ref();

    // ------ DOCUMENT LISTENERS ------
    {
        let dispatcher = current.dispatcher();
        let on_close = props.on_close.clone();
        let plan = ListenerPlan::new(props.disable_scroll);

        use_effect_with(
            (current.index, props.on_close.clone(), props.disable_scroll, len),
            move |_| {
                let keydown = plan.keydown.then(|| {
                    let dispatcher = dispatcher.clone();
                    EventListener::new(&document(), "keydown", move |event| {
                        if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                            match KeyCommand::from_key(&event.key()) {
                                Some(KeyCommand::Close) => emit_close(&on_close),
                                Some(command) => {
                                    if let Some(delta) = command.delta() {
                                        dispatcher.dispatch(Step { delta, len });
                                    }
                                }
                                None => {}
                            }
                        }
                    })
                });

                let wheel = plan.wheel.then(|| {
                    EventListener::new(&document(), "wheel", move |event| {
                        if let Some(event) = event.dyn_ref::<WheelEvent>() {
                            let delta = viewer_state::wheel_step(event.delta_y());
                            dispatcher.dispatch(Step { delta, len });
                        }
                    })
                });
                log::debug!("image viewer: document listeners attached ({:?})", plan);

                move || {
                    drop(keydown);
                    drop(wheel);
                    log::debug!("image viewer: document listeners detached");
                }
            },
        );
    }

    // ------ CLICK TO CLOSE ------
    // One handler on the backdrop sees every click once; the zone is decided by
    // node identity against our own elements.
    let onclick_backdrop = {
        let policy = ClosePolicy {
            close_on_click_outside: props.close_on_click_outside,
            close_on_click_inside: props.close_on_click_inside,
        };
        let backdrop_ref = backdrop_ref.clone();
        let slide_ref = slide_ref.clone();
        let image_ref = image_ref.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            let target = e.target_dyn_into::<Node>();
            let zone = ClickZone::classify(
                is_target(&backdrop_ref, target.as_ref()),
                is_target(&slide_ref, target.as_ref()),
                is_target(&image_ref, target.as_ref()),
            );
            if policy.closes_on(zone) {
                e.stop_propagation();
                emit_close(&on_close);
            } else {
                log::trace!("image viewer: click on {:?} ignored", zone);
            }
        })
    };

    let onclick_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            emit_close(&on_close);
        })
    };

    // Navigation clicks bubble on to the backdrop, which classifies them as
    // `Elsewhere` and keeps the viewer open.
    let step = |delta: isize| {
        let dispatcher = current.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(Step { delta, len }))
    };

    let index = current.index;
    let src = props
        .src
        .get(index)
        .cloned()
        .unwrap_or_else(|| AttrValue::from(""));
    let alt = props.alt.as_deref();
    let alt_text = viewer_state::alt_text_at(alt, index).to_string();
    let caption = viewer_state::caption_at(alt, index, props.disable_caption).map(str::to_owned);

    html! {
        <div
            id={ROOT_ID}
            ref={backdrop_ref}
            class={classes!("siv-wrapper", MODAL_CLASS)}
            onclick={onclick_backdrop}
            style={props.background_style.clone()}
        >
            <style>{ STYLESHEET }</style>

            <span class={classes!("siv-close", CLOSE_CLASS)} onclick={onclick_close}>
                { props.close_component.clone().unwrap_or_else(|| html! { <>{ CLOSE_GLYPH }</> }) }
            </span>

            if viewer_state::shows_navigation(len) {
                <>
                    <span class={classes!("siv-navigation", "siv-prev", PREVIOUS_CLASS)} onclick={step(-1)}>
                        { props.left_arrow_component.clone().unwrap_or_else(|| html! { <>{ LEFT_ARROW_GLYPH }</> }) }
                    </span>
                    <span class={classes!("siv-navigation", "siv-next", NEXT_CLASS)} onclick={step(1)}>
                        { props.right_arrow_component.clone().unwrap_or_else(|| html! { <>{ RIGHT_ARROW_GLYPH }</> }) }
                    </span>
                </>
            }

            <div class={classes!("siv-content", CONTENT_CLASS)}>
                <div ref={slide_ref} class={classes!("siv-slide", SLIDE_CLASS)}>
                    <img
                        ref={image_ref}
                        class={classes!("siv-image", IMAGE_CLASS)}
                        src={src}
                        alt={alt_text}
                        style={props.image_style.clone()}
                    />
                    if let Some(caption) = caption {
                        <div class={classes!("siv-caption", CAPTION_CLASS)} style={props.caption_style.clone()}>
                            { caption }
                        </div>
                    }
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reducer_steps_from_latest_index() {
        let state = Rc::new(ViewerIndex { index: 0 });
        let state = state.reduce(Step { delta: 1, len: 3 });
        let state = state.reduce(Step { delta: 1, len: 3 });
        assert_eq!(state.index, 2);
        let state = state.reduce(Step { delta: 1, len: 3 });
        assert_eq!(state.index, 0);
        let state = state.reduce(Step { delta: -1, len: 3 });
        assert_eq!(state.index, 2);
    }
}
