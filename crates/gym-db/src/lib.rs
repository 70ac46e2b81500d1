
pub mod connection;
pub use connection::Connection;

pub mod results;
pub mod schema;

pub mod slot;
pub use slot::Slot;

mod store;
pub use store::{MemberStore, MEMBERS_SLOT};
