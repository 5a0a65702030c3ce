pub mod permissions;
pub mod review;
pub mod store;

pub use review::{ReviewAction, ReviewError, RESUBMITTED_DETAILS};
pub use store::{ContentStore, InMemoryStore};
