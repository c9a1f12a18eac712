pub mod completion;
pub mod fmt;
pub mod info;
