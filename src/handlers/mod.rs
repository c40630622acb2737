mod health;
mod not_found;

pub use health::health_handler;
pub use not_found::not_found;
