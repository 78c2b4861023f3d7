//! Emote Gallery Common Library
//!
//! CLI（カタログ生成）とWeb(WASM)（ギャラリー表示）で共有される型とロジック

pub mod catalog;
pub mod contact;
pub mod error;
pub mod gallery;
pub mod install;
pub mod live_status;
pub mod pagination;
pub mod playlist;
pub mod search;

pub use catalog::{parse_catalog, parse_catalog_lenient, CatalogEntry, LenientCatalog};
pub use error::{Error, Result};
pub use gallery::{emote_url, pick_surprise, GalleryState, OrderMode};
pub use install::{install_action, InstallAction};
pub use live_status::{parse_status_payload, LiveState, StatusTracker};
pub use pagination::{items_per_page, PageControls};
pub use playlist::{parse_track_list, track_url, Playlist, TrackLoad};
pub use search::{filter_entries, matches_query};
