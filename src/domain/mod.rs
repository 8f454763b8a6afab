mod activity;
mod error;
pub mod seed;

pub use activity::{Activity, ActivityStore};
pub use error::SignupError;

pub use activity::{try_signup, try_unregister};
