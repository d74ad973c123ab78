pub mod common;
pub mod groups;
pub mod notify;
pub mod settle;
pub mod summary;
pub mod transactions;
