// Service module exports

pub mod export;
pub mod layout; // Pure cell layout engine, no egui types
pub mod projects;
pub mod settings;
