use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{KeyboardEvent, Window};
use yew::prelude::*;

use super::controller::{Direction, ModalAction, ModalState};

/// `modified` is true when Alt, Ctrl or Meta is held; those combinations
/// belong to the browser (history navigation and the like).
pub fn lightbox_action_for_key(key: &str, modified: bool) -> Option<ModalAction> {
    if modified {
        return None;
    }
    match key {
        "ArrowLeft" => Some(ModalAction::Step(Direction::Previous)),
        "ArrowRight" => Some(ModalAction::Step(Direction::Next)),
        "Escape" => Some(ModalAction::CloseScreenshot),
        _ => None,
    }
}

/// A `keydown` listener on the window, removed when dropped.
pub struct KeySubscription {
    window: Window,
    callback: Closure<dyn FnMut(KeyboardEvent)>,
}

impl KeySubscription {
    pub fn keydown<F>(handler: F) -> Result<Self, JsValue>
    where
        F: FnMut(KeyboardEvent) + 'static,
    {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(KeyboardEvent)>);
        window.add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref())?;
        Ok(Self { window, callback })
    }
}

impl Drop for KeySubscription {
    fn drop(&mut self) {
        if let Err(err) = self
            .window
            .remove_event_listener_with_callback("keydown", self.callback.as_ref().unchecked_ref())
        {
            warn!("failed to remove keydown listener: {:?}", err);
        }
    }
}

/// Arrow keys and Escape drive the lightbox, but only while a screenshot is
/// being viewed. Leaving the viewing state by any path (closing the
/// lightbox, closing the modal, unmounting) drops the subscription.
#[hook]
pub fn use_lightbox_keys(viewing: bool, dispatcher: UseReducerDispatcher<ModalState>) {
    use_effect_with_deps(
        move |viewing| {
            let subscription = if *viewing {
                let handler = move |event: KeyboardEvent| {
                    let modified = event.alt_key() || event.ctrl_key() || event.meta_key();
                    if let Some(action) = lightbox_action_for_key(&event.key(), modified) {
                        event.prevent_default();
                        dispatcher.dispatch(action);
                    }
                };
                match KeySubscription::keydown(handler) {
                    Ok(subscription) => Some(subscription),
                    Err(err) => {
                        warn!("keyboard navigation disabled: {:?}", err);
                        None
                    }
                }
            } else {
                None
            };
            move || drop(subscription)
        },
        viewing,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_step_and_escape_closes() {
        assert_eq!(
            lightbox_action_for_key("ArrowLeft", false),
            Some(ModalAction::Step(Direction::Previous))
        );
        assert_eq!(
            lightbox_action_for_key("ArrowRight", false),
            Some(ModalAction::Step(Direction::Next))
        );
        assert_eq!(lightbox_action_for_key("Escape", false), Some(ModalAction::CloseScreenshot));
    }

    #[test]
    fn other_keys_are_ignored() {
        for key in ["Enter", " ", "ArrowUp", "a", "Esc", ""] {
            assert_eq!(lightbox_action_for_key(key, false), None, "key {:?}", key);
        }
    }

    #[test]
    fn modified_keys_are_left_to_the_browser() {
        for key in ["ArrowLeft", "ArrowRight", "Escape"] {
            assert_eq!(lightbox_action_for_key(key, true), None, "key {:?}", key);
        }
    }
}
