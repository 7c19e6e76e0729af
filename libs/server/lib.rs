pub mod commands;
pub mod core;
pub mod entities;
pub mod http;
pub mod repositories;
pub mod services;
