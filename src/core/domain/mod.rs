pub mod config;
pub mod entity;
pub mod error;
pub mod model;
