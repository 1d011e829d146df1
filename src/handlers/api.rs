//! # API Handler
//! src/handlers/api.rs
//!
//! Handler stub para el prefijo `/api`: responde 200 con el path del
//! request en texto plano. Es el punto donde se colgaría una API real.

use crate::http::{Request, Response, StatusCode};

/// Handler para requests bajo el prefijo `/api`
///
/// Retorna el path recibido como eco:
///
/// ```text
/// Request Path: /api/foo
/// ```
pub fn handle(req: &Request) -> Response {
    Response::text(StatusCode::Ok, &format!("Request Path: {}", req.path()))
}
