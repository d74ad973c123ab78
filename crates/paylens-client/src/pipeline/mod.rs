pub mod filter;
pub mod group;
pub mod normalize;
pub mod paginate;
pub mod settle;
pub mod summary;
