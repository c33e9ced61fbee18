//! MangaScan Common Library
//!
//! ブラウザ（WASM）とホストテストで共有される型とロジック

pub mod error;
pub mod history;
pub mod i18n;
pub mod merge;
pub mod types;
pub mod validate;
pub mod workflow;

pub use error::{Error, Result};
pub use history::{HistoryEntry, HistoryStore, HISTORY_LIMIT};
pub use i18n::{localized_synopsis, Lang, Translations};
pub use merge::apply_details_update;
pub use types::{Author, CandidateMatch, ExternalLink, RelatedManga, RelatedWork, SearchResult};
pub use validate::{FileError, FileMeta, ACCEPTED_MIME_TYPES, MAX_FILE_SIZE_BYTES};
pub use workflow::{Phase, Workflow};
