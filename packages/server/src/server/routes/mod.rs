// HTTP routes
pub mod conditions;
pub mod health;

pub use conditions::*;
pub use health::*;
