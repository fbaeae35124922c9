pub mod tag_parser;

pub use tag_parser::{ParseError, TagParser, TAG_DELIMITER};
