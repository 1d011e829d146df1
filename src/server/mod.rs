//! # Módulo Server
//! src/server/mod.rs
//!
//! Loop de aceptación TCP y manejo de conexiones.

pub mod tcp;

pub use tcp::Server;
