pub mod download;
pub mod media;
pub mod upload;
