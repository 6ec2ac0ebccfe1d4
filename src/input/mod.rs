mod handler;
pub mod keymap;

pub use keymap::{KeyAction, KeyContext, KeymapPreset, map_key, map_key_with_preset};
