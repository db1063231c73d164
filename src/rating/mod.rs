pub mod rating_dto;
pub mod rating_handlers;
pub mod rating_models;
pub mod rating_repository;
pub mod rating_service;
