//! Storage layer - database entities, migrations and repositories

pub mod entity;
pub mod mapper;
pub mod migrations;
pub mod repositories;
