// Common types shared across the application

pub mod notice;

pub use notice::{Notice, NoticeLevel};
