pub mod item_dto;
pub mod item_handlers;
pub mod item_models;
pub mod item_repository;
pub mod item_service;
