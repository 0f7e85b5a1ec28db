mod app_context;
mod config_warnings;

pub use app_context::{AppContext, resolve_as_of};
pub use config_warnings::warn_misnamed_env;
