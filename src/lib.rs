pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod metadata;
pub mod quests;
pub mod screens;
pub mod settings;
pub mod stats;
pub mod store;
pub mod terminal;
pub mod theme;
pub mod types;
