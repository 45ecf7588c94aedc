//! Browser-free logic behind the portfolio page controller.
//!
//! Everything here is a pure decision or a read/modify/write against an
//! injected [`KeyValueStore`], so the whole page behaviour can be tested
//! natively. The `portfolio-wasm` crate applies these decisions to the DOM.

pub mod config;
pub mod error;
pub mod hover;
pub mod navbar;
pub mod reveal;
pub mod scroll;
pub mod storage;
pub mod submissions;
pub mod theme;
pub mod validate;
pub mod visits;

pub use config::PageConfig;
pub use error::StoreError;
pub use hover::{CardKind, CardStyle, card_hover_style};
pub use navbar::{NavbarState, NavbarStyle, navbar_style};
pub use reveal::RevealState;
pub use scroll::{anchor_scroll_target, scroll_top_visible};
pub use storage::{InMemoryStore, KeyValueStore};
pub use submissions::{Submission, SubmissionLog, SubmitOutcome, submit};
pub use theme::Theme;
pub use validate::{ContactForm, Field, FieldError, FormReport};
pub use visits::{VisitOutcome, record_visit};
