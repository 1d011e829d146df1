//! # Parsing de Requests HTTP/1.1
//! src/http/request.rs
//!
//! Este módulo implementa el parser de requests directamente sobre el
//! stream de la conexión: se lee línea por línea en vez de recibir un
//! buffer ya completo, y el body se lee byte a byte acotado por
//! `Content-Length`.
//!
//! ## Formato de un Request
//!
//! ```text
//! POST /api/echo HTTP/1.1\r\n
//! Host: localhost:8080\r\n
//! Content-Length: 5\r\n
//! \r\n
//! hello
//! ```
//!
//! ## Reglas de parseo
//!
//! 1. **Request line**: se separa por whitespace; se exigen al menos dos
//!    tokens (método y path). El token de versión se descarta.
//! 2. **Headers**: se leen líneas hasta encontrar exactamente `"\r\n"`.
//!    Una línea que no contiene el separador `": "` se descarta en
//!    silencio; en particular una línea `"\n"` a secas NO termina el
//!    bloque de headers.
//! 3. **Body**: solo se lee para POST, y solo si `Content-Length` (con
//!    esa capitalización exacta) parsea como entero positivo.
//!
//! El método y el path se conservan tal cual llegan: no hay validación
//! contra un conjunto de verbos conocidos, ni percent-decoding, ni
//! separación de query string.

use std::collections::HashMap;
use std::io::{BufRead, Read};

/// Representa un request HTTP parseado
#[derive(Debug, Clone)]
pub struct Request {
    /// Método HTTP tal como llegó (ej: "GET", "POST")
    method: String,

    /// Path de la petición tal como llegó (ej: "/api/echo")
    path: String,

    /// Headers HTTP con las keys crudas, sin normalizar mayúsculas.
    /// Si un header se repite, gana la última ocurrencia.
    headers: HashMap<String, String>,

    /// Body del request; no vacío solo para POST con Content-Length > 0
    body: Vec<u8>,
}

/// Errores que pueden ocurrir durante el parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// La request line no tiene al menos método y path
    InvalidRequestLine,

    /// El stream terminó antes de completar la request line o el body
    UnexpectedEof,

    /// Falla de lectura del stream subyacente
    Io(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidRequestLine => write!(f, "invalid request line"),
            ParseError::UnexpectedEof => {
                write!(f, "connection closed before the request was complete")
            }
            ParseError::Io(e) => write!(f, "read error: {}", e),
        }
    }
}

impl std::error::Error for ParseError {}

impl Request {
    /// Parsea un request HTTP leyendo directamente del stream
    ///
    /// # Argumentos
    ///
    /// * `reader` - Stream posicionado al inicio de un request
    ///
    /// # Retorna
    ///
    /// * `Ok(Request)` - Request parseado exitosamente
    /// * `Err(ParseError)` - La conexión debe cerrarse sin responder
    ///
    /// # Ejemplo
    ///
    /// ```
    /// use std::io::Cursor;
    /// use miniweb::http::Request;
    ///
    /// let raw = b"GET /index.html HTTP/1.1\r\nHost: localhost\r\n\r\n";
    /// let request = Request::read_from(&mut Cursor::new(&raw[..])).unwrap();
    ///
    /// assert_eq!(request.method(), "GET");
    /// assert_eq!(request.path(), "/index.html");
    /// assert_eq!(request.header("Host"), Some("localhost"));
    /// ```
    pub fn read_from<R: BufRead>(reader: &mut R) -> Result<Self, ParseError> {
        // 1. Request line
        let mut line = String::new();
        let n = reader
            .read_line(&mut line)
            .map_err(|e| ParseError::Io(e.to_string()))?;
        if n == 0 || !line.ends_with('\n') {
            // El stream terminó sin entregar una línea completa
            return Err(ParseError::UnexpectedEof);
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < 2 {
            return Err(ParseError::InvalidRequestLine);
        }
        let method = parts[0].to_string();
        let path = parts[1].to_string();
        // parts[2..] (la versión HTTP) se descarta

        // 2. Headers
        let headers = Self::read_headers(reader);

        // 3. Body (solo para POST con Content-Length positivo)
        let body = Self::read_body(reader, &method, &headers)?;

        Ok(Request {
            method,
            path,
            headers,
            body,
        })
    }

    /// Lee el bloque de headers hasta la línea `"\r\n"` exacta
    ///
    /// Una falla de lectura o el fin del stream también terminan el
    /// bloque sin señalar error. Las líneas sin el separador `": "`
    /// se descartan.
    fn read_headers<R: BufRead>(reader: &mut R) -> HashMap<String, String> {
        let mut headers = HashMap::new();

        loop {
            let mut line = String::new();
            match reader.read_line(&mut line) {
                Ok(0) => break,
                Ok(_) => {
                    if line == "\r\n" {
                        break; // Fin del bloque de headers
                    }
                    if !line.ends_with('\n') {
                        // Línea final truncada por EOF: se descarta
                        break;
                    }
                    if let Some((name, value)) = line.split_once(": ") {
                        // La key queda cruda; el value se recorta
                        headers.insert(name.to_string(), value.trim().to_string());
                    }
                    // Sin ": " la línea se ignora en silencio
                }
                Err(_) => break,
            }
        }

        headers
    }

    /// Lee el body del request cuando corresponde
    ///
    /// Solo POST consume body, y únicamente si `Content-Length` parsea
    /// como entero positivo. Un valor ausente, no numérico o <= 0 deja
    /// el body vacío sin señalar error. Cualquier otro método nunca
    /// intenta leer body, tenga o no `Content-Length`.
    fn read_body<R: BufRead>(
        reader: &mut R,
        method: &str,
        headers: &HashMap<String, String>,
    ) -> Result<Vec<u8>, ParseError> {
        if method != "POST" {
            return Ok(Vec::new());
        }

        let length = headers
            .get("Content-Length")
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(0);
        if length == 0 {
            return Ok(Vec::new());
        }

        let mut body = vec![0u8; length];
        reader.read_exact(&mut body).map_err(|e| match e.kind() {
            std::io::ErrorKind::UnexpectedEof => ParseError::UnexpectedEof,
            _ => ParseError::Io(e.to_string()),
        })?;
        Ok(body)
    }

    // === Métodos públicos para acceder a los campos ===

    /// Obtiene el método HTTP del request
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Obtiene el path del request
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Obtiene todos los headers
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Obtiene un header específico (lookup sensible a mayúsculas)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(|s| s.as_str())
    }

    /// Obtiene el body del request
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Obtiene el body del request como String
    pub fn body_string(&self) -> Option<String> {
        String::from_utf8(self.body.clone()).ok()
    }
}
