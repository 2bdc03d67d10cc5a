pub mod api_endpoints;
pub mod calendar;
pub mod date_format;
