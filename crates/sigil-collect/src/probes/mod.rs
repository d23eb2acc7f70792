//! Per-category probe drivers.
//!
//! One driver per signal category; every host read passes through the
//! [`probe`](crate::probe) wrapper, so a driver can never fail -- it only
//! degrades fields to their documented defaults.

mod display;
mod environment;
mod graphics;
mod identity;
mod media;
mod permissions;
mod storage;

pub use display::{css_features, display, touch_pointer};
pub use environment::{http_header, network, performance, plugins, time_zone};
pub use graphics::graphics;
pub use identity::{browser, hardware};
pub use media::{
    encrypted_media, media, AUDIO_CODEC_CANDIDATES, KEY_SYSTEM_CANDIDATES, VIDEO_CODEC_CANDIDATES,
};
pub use permissions::permissions;
pub use storage::storage;
