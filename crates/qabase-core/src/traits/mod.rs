mod morph;
mod storage;

pub use morph::IMorphAnalyzer;
pub use storage::IQaStorage;
