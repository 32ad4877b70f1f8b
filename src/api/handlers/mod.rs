pub mod generate;
pub mod service;
