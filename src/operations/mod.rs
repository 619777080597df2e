pub mod loops;
pub mod modification;
pub mod offset;
pub mod query;
pub mod topology;
