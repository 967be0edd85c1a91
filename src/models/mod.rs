// Module exports for models

pub mod palette;
pub mod project;
pub mod selection;
pub mod settings;
