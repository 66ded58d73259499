pub mod error;
pub mod leg;
pub mod swapinfo;
