//! Holdings records and the interactive holdings table.

mod holdings_model;
mod holdings_view;

pub use holdings_model::*;
pub use holdings_view::*;
