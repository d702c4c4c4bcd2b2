pub mod config;
pub mod error;
pub mod quote;
pub mod upload;
pub mod user;

pub use config::*;
pub use error::*;
pub use quote::*;
pub use upload::*;
pub use user::*;
