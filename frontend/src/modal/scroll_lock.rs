use log::warn;
use web_sys::HtmlElement;
use yew::prelude::*;

/// Hides body overflow so the page behind an overlay cannot scroll.
/// Restores the previous value on drop.
pub struct BodyScrollLock {
    body: HtmlElement,
    previous: String,
}

impl BodyScrollLock {
    pub fn acquire() -> Option<Self> {
        let body = web_sys::window()?.document()?.body()?;
        let style = body.style();
        let previous = style.get_property_value("overflow").unwrap_or_default();
        if let Err(err) = style.set_property("overflow", "hidden") {
            warn!("could not lock page scroll: {:?}", err);
            return None;
        }
        Some(Self { body, previous })
    }
}

impl Drop for BodyScrollLock {
    fn drop(&mut self) {
        let style = self.body.style();
        let result = if self.previous.is_empty() {
            style.remove_property("overflow").map(|_| ())
        } else {
            style.set_property("overflow", &self.previous)
        };
        if let Err(err) = result {
            warn!("could not restore page scroll: {:?}", err);
        }
    }
}

#[hook]
pub fn use_body_scroll_lock(active: bool) {
    use_effect_with_deps(
        move |active| {
            let lock = if *active { BodyScrollLock::acquire() } else { None };
            move || drop(lock)
        },
        active,
    );
}
