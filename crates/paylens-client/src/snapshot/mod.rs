mod parse;
mod read;

pub use parse::parse_source;
pub use read::read_source;
