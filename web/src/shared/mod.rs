mod answer;
mod icon;

pub use answer::{Answer, AnswerView, CardView};
pub use icon::{Glyph, Icon};
