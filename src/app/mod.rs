pub mod controller;
pub mod env;
pub mod models;
pub mod page;
pub mod util;
