mod completion_request;
mod optimization_result;
mod prompt_template;
mod query;
mod query_form;

pub use completion_request::*;
pub use optimization_result::*;
pub use prompt_template::*;
pub use query::*;
pub use query_form::*;
