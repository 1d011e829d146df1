//! # Handlers
//! src/handlers/mod.rs
//!
//! Colaboradores externos del core del servidor:
//! - `api`: handler stub que responde bajo el prefijo `/api`
//! - `static_files`: sirve archivos desde el document root
//! - `sniff`: detección de Content-Type por los bytes del archivo

pub mod api;
pub mod sniff;
pub mod static_files;
