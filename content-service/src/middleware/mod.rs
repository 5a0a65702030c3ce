pub mod identity;

pub use identity::Actor;
