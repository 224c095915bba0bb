pub mod batch;
pub mod config;
pub mod decode;
pub mod encode;
