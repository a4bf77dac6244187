pub mod formatter;
pub mod default_format;
pub mod keyword_list;

pub use default_format::DefaultFormat;
pub use formatter::{FileType, Formatter};
pub use keyword_list::KeywordListFormat;
