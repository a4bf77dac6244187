pub mod provider;
pub mod local_file;

pub use local_file::LocalFileProvider;
pub use provider::{DataProvider, DataSource};
