pub mod config;
pub mod error;
pub mod logging;

pub mod origin_attributes;
pub mod storage_attributes;
pub mod suffix;

pub use error::SuffixError;
pub use origin_attributes::OriginAttributes;
pub use storage_attributes::{LegacyKey, StorageOriginAttributes};
pub use suffix::{ParseOptions, UnknownKeyPolicy};
