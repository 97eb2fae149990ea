pub mod dispatch;
pub mod input;
pub mod reconcile;
pub mod saved;
pub mod schema;
pub mod text;
