//! Asset output infrastructure module

mod fs;

pub use fs::FsAssetWriter;
