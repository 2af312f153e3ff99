use yew::prelude::*;

use crate::components::fallback_image::FallbackImage;
use crate::modal::{counter_label, Direction, ModalAction};

#[derive(Properties, PartialEq)]
pub struct LightboxProps {
    pub screenshots: Vec<String>,
    pub index: usize,
    pub title: AttrValue,
    pub on_action: Callback<ModalAction>,
}

#[function_component(Lightbox)]
pub fn lightbox(props: &LightboxProps) -> Html {
    let count = props.screenshots.len();
    let Some(src) = props.screenshots.get(props.index) else {
        return html! {};
    };

    let emit = |action: ModalAction| {
        let on_action = props.on_action.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_action.emit(action.clone());
        })
    };
    let close = emit(ModalAction::CloseScreenshot);
    let previous = emit(ModalAction::Step(Direction::Previous));
    let next = emit(ModalAction::Step(Direction::Next));
    let swallow = Callback::from(|e: MouseEvent| e.stop_propagation());

    let at_start = props.index == 0;
    let at_end = props.index + 1 >= count;

    html! {
        <div class="lightbox-overlay" onclick={close.clone()}>
            <button class="lightbox-close" onclick={close} aria-label="Close screenshot">
                {"✕"}
            </button>
            <button
                class="lightbox-nav prev"
                onclick={previous}
                disabled={at_start}
                aria-label="Previous screenshot"
            >
                {"‹"}
            </button>
            <div class="lightbox-frame" onclick={swallow}>
                <FallbackImage
                    src={src.clone()}
                    alt={format!("{} screenshot {}", props.title, props.index + 1)}
                    class={classes!("lightbox-image")}
                />
            </div>
            <button
                class="lightbox-nav next"
                onclick={next}
                disabled={at_end}
                aria-label="Next screenshot"
            >
                {"›"}
            </button>
            <div class="lightbox-counter">{counter_label(props.index, count)}</div>
        </div>
    }
}
