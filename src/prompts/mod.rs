pub mod apis;
pub mod controller;
pub mod dtos;
pub mod errors;
pub mod models;
pub mod service;
pub mod templates;
pub mod util;
