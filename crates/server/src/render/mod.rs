//! HTML pages rendered with maud. Every dynamic value is escaped by maud;
//! only the static stylesheet is injected pre-escaped.

mod components;
mod detail;
mod error;
mod list;
mod share;

pub use components::{paragraphs, truncate_words};
pub use detail::{render_comment_outcome, render_detail};
pub use error::render_error;
pub use list::render_list;
pub use share::render_share;
