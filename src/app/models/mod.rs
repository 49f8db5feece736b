pub mod api_error;
pub mod app_error;
pub mod json_from_request;
