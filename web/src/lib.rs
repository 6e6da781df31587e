//! Question/answer history view, for pages that already have the history
//! in hand. Fetching answers and deciding when something is loading is the
//! embedding page's job.

pub mod config;
pub mod errors;
pub mod seed;
pub mod shared;
pub mod types;

pub use shared::{Answer, AnswerView, CardView, Glyph, Icon};
pub use types::{AnswerSeed, History, HistoryEntry, TrustedHtml};
