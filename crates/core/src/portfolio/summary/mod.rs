//! Portfolio summary figures, performer references and the insight cards.

mod summary_model;
mod summary_view;

pub use summary_model::*;
pub use summary_view::*;
