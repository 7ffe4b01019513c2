pub mod directory;

pub use directory::{DirectoryInfo, Entry};
