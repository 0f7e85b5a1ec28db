pub mod classify;
pub mod dispatch;
pub mod exceptions;
pub mod reconcile;
pub mod run;
pub mod schema;
