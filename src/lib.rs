//! # MiniWeb
//! src/lib.rs
//!
//! Servidor HTTP/1.1 minimalista implementado directamente sobre sockets
//! TCP, sin librerías HTTP de alto nivel. Una conexión atiende exactamente
//! un request: leer → despachar → escribir → cerrar.
//!
//! ## Arquitectura
//!
//! El servidor está dividido en módulos especializados:
//! - `http`: Parsing de requests y serialización de responses HTTP/1.1
//! - `server`: Loop de aceptación TCP y manejo de conexiones
//! - `router`: Enrutamiento por prefijo de path hacia handlers
//! - `handlers`: Colaboradores externos (API y archivos estáticos)
//! - `config`: Configuración vía CLI y variables de entorno
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use miniweb::server::Server;
//! use miniweb::config::Config;
//!
//! let config = Config::default();
//! let server = Server::new(config);
//! server.run().expect("Error al iniciar servidor");
//! ```

pub mod config;
pub mod handlers;
pub mod http;
pub mod router;
pub mod server;
