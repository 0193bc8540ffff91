//! Movie watch-list data model, catalog store, and session controller.
//!
//! This crate holds all watch-list state and rules without any terminal or
//! filesystem dependencies. Frontends implement [`Presenter`] and drive a
//! [`Session`] with [`Intent`]s; the session keeps the visible list and the
//! stats in sync after every change.

pub mod catalog;
pub mod error;
pub mod hint;
pub mod pick;
pub mod session;
pub mod title;
pub mod types;

pub use catalog::{Catalog, project};
pub use error::{ParseIdError, ParseStatusFilterError, ValidationError};
pub use hint::{Hint, HintKind};
pub use pick::{PickOutcome, RandomSource, RngSource, pick};
pub use session::{Intent, Presenter, Session};
pub use title::normalize_title;
pub use types::*;
