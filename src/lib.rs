// Internsight - Internship feedback collection with sentiment insights
// Library exports

// Core modules
pub mod advice;
pub mod config;
pub mod model;
pub mod server;
pub mod store;
pub mod text;
