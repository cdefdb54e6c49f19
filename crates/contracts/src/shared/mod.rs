pub mod grid_config;
pub mod pagination;
