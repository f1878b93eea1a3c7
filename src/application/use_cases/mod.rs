mod optimize_search;
mod query_form;

pub use optimize_search::*;
pub use query_form::*;
