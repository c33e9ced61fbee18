//! UIコンポーネント

pub mod author_card;
pub mod confirmation_modal;
pub mod details_card;
pub mod drop_zone;
pub mod header;
pub mod history_panel;
pub mod image_cropper;
pub mod image_preview;
pub mod other_matches;
pub mod related_works_card;
pub mod result_card;
pub mod skeleton;
pub mod sources_card;
