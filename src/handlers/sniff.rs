//! # Detección de Content-Type
//! src/handlers/sniff.rs
//!
//! Detecta el Content-Type de un archivo a partir de sus primeros bytes
//! (firmas mágicas), no de su extensión. Se consideran a lo sumo los
//! primeros 512 bytes. Si nada matchea, el contenido UTF-8 válido se
//! reporta como texto plano y el resto como binario genérico.

/// Máximo de bytes considerados para la detección
const SNIFF_LEN: usize = 512;

/// Detecta el Content-Type de `data` por sus bytes iniciales
///
/// # Ejemplo
/// ```
/// use miniweb::handlers::sniff;
///
/// assert_eq!(sniff::detect(b"hola mundo"), "text/plain; charset=utf-8");
/// assert_eq!(sniff::detect(b"%PDF-1.7 ..."), "application/pdf");
/// ```
pub fn detect(data: &[u8]) -> &'static str {
    let data = &data[..data.len().min(SNIFF_LEN)];

    if let Some(html) = detect_html(data) {
        return html;
    }
    if let Some(exact) = detect_signature(data) {
        return exact;
    }

    if std::str::from_utf8(data).is_ok() {
        "text/plain; charset=utf-8"
    } else {
        "application/octet-stream"
    }
}

/// Marcas de HTML, comparadas sin distinguir mayúsculas y tras
/// descartar el whitespace inicial
fn detect_html(data: &[u8]) -> Option<&'static str> {
    let start = data
        .iter()
        .position(|b| !b" \t\r\n".contains(b))
        .unwrap_or(data.len());
    let head = data[start..].to_ascii_uppercase();

    const MARKERS: [&[u8]; 5] = [b"<!DOCTYPE HTML", b"<HTML", b"<HEAD", b"<BODY", b"<SCRIPT"];
    if MARKERS.iter().any(|m| head.starts_with(m)) {
        Some("text/html; charset=utf-8")
    } else {
        None
    }
}

/// Firmas mágicas de formatos binarios conocidos
fn detect_signature(data: &[u8]) -> Option<&'static str> {
    const SIGNATURES: [(&[u8], &str); 7] = [
        (b"%PDF-", "application/pdf"),
        (b"\x89PNG\r\n\x1a\n", "image/png"),
        (b"\xff\xd8\xff", "image/jpeg"),
        (b"GIF87a", "image/gif"),
        (b"GIF89a", "image/gif"),
        (b"PK\x03\x04", "application/zip"),
        (b"\x1f\x8b\x08", "application/x-gzip"),
    ];

    SIGNATURES
        .iter()
        .find(|(magic, _)| data.starts_with(magic))
        .map(|(_, mime)| *mime)
}
