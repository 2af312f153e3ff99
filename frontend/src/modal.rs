pub mod controller;
pub mod keyboard;
pub mod scroll_lock;

pub use controller::{counter_label, Direction, LightboxState, ModalAction, ModalState};
pub use keyboard::use_lightbox_keys;
pub use scroll_lock::use_body_scroll_lock;
