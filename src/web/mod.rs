mod communication;
mod server;

pub use communication::{get_activities, signup, signup_many, unregister};
pub use server::{listen, routes, run, ErrorDetail, Message, INDEX_PAGE};
