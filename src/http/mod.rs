//! # Módulo HTTP
//!
//! Este módulo implementa el protocolo HTTP/1.1 desde cero, sin usar
//! librerías de alto nivel. Incluye:
//!
//! - Parsing de requests HTTP/1.1 directamente desde el stream
//! - Construcción y serialización de responses HTTP
//! - Manejo de status codes
//!
//! El servidor atiende un request por conexión y cierra al terminar, por
//! lo que no hay keep-alive, chunked encoding ni pipelining.
//!
//! ### Formato de Request
//!
//! ```text
//! POST /api/echo HTTP/1.1\r\n
//! Host: localhost:8080\r\n
//! Content-Length: 5\r\n
//! \r\n
//! hello
//! ```
//!
//! ### Formato de Response
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: text/plain\r\n
//! \r\n
//! Request Path: /api/echo
//! ```

pub mod request;   // Parsing de HTTP requests desde el stream
pub mod response;  // Construcción y serialización de HTTP responses
pub mod status;    // Códigos de estado HTTP

// Re-exportamos los tipos principales para facilitar su uso
// Esto permite usar `http::Request` en vez de `http::request::Request`
pub use request::{ParseError, Request};
pub use response::Response;
pub use status::StatusCode;
