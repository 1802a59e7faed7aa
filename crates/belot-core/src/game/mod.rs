pub mod compose;
pub mod serialization;
pub mod session;
