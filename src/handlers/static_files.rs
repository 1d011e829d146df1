//! # Handler de Archivos Estáticos
//! src/handlers/static_files.rs
//!
//! Sirve archivos desde el document root. Solo GET está implementado:
//! cualquier otro método recibe 500 "Not Implemented Yet!". El path del
//! request se resuelve componente por componente y nunca puede escapar
//! del document root (los componentes `..` y absolutos se rechazan).

use std::fs;
use std::path::{Component, Path, PathBuf};

use super::sniff;
use crate::http::{Request, Response, StatusCode};

/// Une el path del request al document root sin permitir escaparse
///
/// Retorna `None` si el path contiene componentes `..`, absolutos o de
/// prefijo (directory traversal).
fn safe_join(root: &Path, req_path: &str) -> Option<PathBuf> {
    let clean = req_path.trim_start_matches('/');
    let mut out = PathBuf::new();
    for comp in Path::new(clean).components() {
        match comp {
            Component::Normal(c) => out.push(c),
            Component::CurDir => {}
            _ => return None, // rechaza .. y absolutos
        }
    }
    Some(root.join(out))
}

/// Handler fallback: sirve `<root>/<path>` para requests GET
///
/// Contrato:
/// - método distinto de GET → 500 "Not Implemented Yet!"
/// - path rechazado o archivo inexistente → 404 "File Doesn't Exist"
/// - falla de lectura → 500 "Error reading file"
/// - éxito → 200 con los bytes del archivo y Content-Type detectado
pub fn handle(req: &Request, root: &Path) -> Response {
    if req.method() != "GET" {
        return Response::text(StatusCode::InternalServerError, "Not Implemented Yet!");
    }

    let file_name = match safe_join(root, req.path()) {
        Some(p) => p,
        None => return Response::text(StatusCode::NotFound, "File Doesn't Exist"),
    };

    if !file_name.is_file() {
        return Response::text(StatusCode::NotFound, "File Doesn't Exist");
    }

    match fs::read(&file_name) {
        Ok(content) => {
            let content_type = sniff::detect(&content);
            Response::new(StatusCode::Ok)
                .with_header("Content-Type", content_type)
                .with_body_bytes(content)
        }
        Err(_) => Response::text(StatusCode::InternalServerError, "Error reading file"),
    }
}
