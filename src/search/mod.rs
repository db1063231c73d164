pub mod geo;
pub mod search_handlers;
pub mod search_service;
