//! # Códigos de Estado HTTP
//!
//! Este módulo define los códigos de estado que el servidor produce.
//! Solo existen los tres que los handlers realmente generan:
//!
//! - **200**: request atendido con éxito
//! - **404**: archivo estático inexistente
//! - **500**: método no implementado o falla de lectura
//!
//! El texto de razón no es la tabla de reason phrases del RFC: es "OK"
//! para 200 y "Error" para todo lo demás; el servidor no distingue más.

/// Representa los códigos de estado HTTP que produce el servidor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 - La petición fue exitosa
    Ok = 200,

    /// 404 - Archivo o recurso no encontrado
    NotFound = 404,

    /// 500 - Error interno o funcionalidad no implementada
    InternalServerError = 500,
}

impl StatusCode {
    /// Convierte el código a su valor numérico
    ///
    /// # Ejemplo
    /// ```
    /// use miniweb::http::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// ```
    pub fn as_u16(&self) -> u16 {
        *self as u16
    }

    /// Retorna el texto que acompaña al código en la status line
    ///
    /// No es la reason phrase estándar: el servidor solo distingue
    /// entre "OK" (200) y "Error" (cualquier otro código).
    ///
    /// # Ejemplo
    /// ```
    /// use miniweb::http::StatusCode;
    /// assert_eq!(StatusCode::Ok.reason(), "OK");
    /// assert_eq!(StatusCode::NotFound.reason(), "Error");
    /// ```
    pub fn reason(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            _ => "Error",
        }
    }

    /// Verifica si el código indica éxito (2xx)
    ///
    /// # Ejemplo
    /// ```
    /// use miniweb::http::StatusCode;
    /// assert!(StatusCode::Ok.is_success());
    /// assert!(!StatusCode::NotFound.is_success());
    /// ```
    pub fn is_success(&self) -> bool {
        matches!(self, StatusCode::Ok)
    }
}

impl std::fmt::Display for StatusCode {
    /// Formatea el código tal como aparece en la status line
    ///
    /// Formato: "200 OK", "404 Error"
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.as_u16(), self.reason())
    }
}
