//! UIコンポーネント

pub mod contact_form;
pub mod emote_grid;
pub mod header;
pub mod install_button;
pub mod live_badge;
pub mod music_player;
pub mod order_buttons;
pub mod pagination;
pub mod surprise;
