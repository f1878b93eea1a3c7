pub mod form_controller;
pub mod optimize_controller;
pub mod serve_controller;

pub use form_controller::FormController;
pub use optimize_controller::OptimizeController;
pub use serve_controller::ServeController;
