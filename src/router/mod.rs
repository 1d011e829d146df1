//! # Sistema de Routing
//! src/router/mod.rs
//!
//! Este módulo implementa el router que despacha cada request a su
//! handler según el prefijo del path.
//!
//! ## Arquitectura
//!
//! ```text
//! Request → Router → Handler → Response
//! ```
//!
//! El router examina el path del request: si empieza con alguno de los
//! prefijos registrados se ejecuta ese handler; en cualquier otro caso
//! se ejecuta el handler fallback (archivos estáticos). Siempre corre
//! exactamente un handler por request.

use crate::http::{Request, Response};

/// Tipo de función handler
///
/// Un handler recibe un Request y retorna una Response. Se usa un
/// closure boxed para que el fallback pueda capturar el document root.
pub type Handler = Box<dyn Fn(&Request) -> Response + Send + Sync>;

/// Router que mapea prefijos de path a handlers
pub struct Router {
    /// Pares (prefijo, handler); gana el primero que matchee
    routes: Vec<(String, Handler)>,

    /// Handler para todo path que no matchee ningún prefijo
    fallback: Handler,
}

impl Router {
    /// Crea un router con su handler fallback
    pub fn new(fallback: Handler) -> Self {
        Self {
            routes: Vec::new(),
            fallback,
        }
    }

    /// Registra un prefijo con su handler
    ///
    /// # Ejemplo
    /// ```
    /// use miniweb::router::Router;
    /// use miniweb::http::{Request, Response, StatusCode};
    ///
    /// let mut router = Router::new(Box::new(|_req: &Request| {
    ///     Response::text(StatusCode::NotFound, "File Doesn't Exist")
    /// }));
    /// router.register_prefix("/api", Box::new(|req: &Request| {
    ///     Response::text(StatusCode::Ok, req.path())
    /// }));
    /// ```
    pub fn register_prefix(&mut self, prefix: &str, handler: Handler) {
        self.routes.push((prefix.to_string(), handler));
    }

    /// Despacha el request al handler apropiado y retorna su Response
    ///
    /// El match es por prefijo literal (sin normalizar el path). Si
    /// ningún prefijo matchea se ejecuta el fallback.
    pub fn route(&self, request: &Request) -> Response {
        let path = request.path();

        let handler = self
            .routes
            .iter()
            .find(|(prefix, _)| path.starts_with(prefix.as_str()))
            .map(|(_, handler)| handler)
            .unwrap_or(&self.fallback);

        let mut response = handler(request);
        self.add_common_headers(&mut response);
        response
    }

    /// Agrega headers comunes a todas las respuestas
    fn add_common_headers(&self, response: &mut Response) {
        response.add_header("Server", "MiniWeb/0.1");
        // El servidor cierra tras cada response; avisarlo en el wire
        response.add_header("Connection", "close");
    }
}
