//! # Servidor TCP Concurrente
//! src/server/tcp.rs
//!
//! Implementación del servidor TCP que maneja múltiples conexiones
//! simultáneas usando threads: cada conexión se procesa en su propio
//! thread, sin límite de concurrencia ni cola de admisión.
//!
//! ## Ciclo de vida de una conexión
//!
//! ```text
//! Reading → Dispatching → Writing → Closed
//! ```
//!
//! - `Reading`: parsea un request desde el stream. Si falla, se loguea
//!   y la conexión se cierra sin escribir ni un byte de respuesta.
//! - `Dispatching`: el router ejecuta exactamente un handler.
//! - `Writing`: un solo `write_all` envía la respuesta serializada; una
//!   falla se loguea y no se reintenta.
//! - `Closed`: la conexión se cierra exactamente una vez (drop del
//!   stream), sin importar por cuál camino se llegó.

use crate::config::Config;
use crate::handlers::{api, static_files};
use crate::http::Request;
use crate::router::Router;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::io::{BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;
use std::time::Instant;

/// Servidor HTTP/1.1 concurrente
pub struct Server {
    config: Config,
    router: Arc<Router>,
}

impl Server {
    /// Crea el servidor con sus dos colaboradores registrados:
    /// el API handler bajo `/api` y el handler estático como fallback
    pub fn new(config: Config) -> Self {
        let root = PathBuf::from(&config.www_root);
        let mut router = Router::new(Box::new(move |req: &Request| {
            static_files::handle(req, &root)
        }));
        router.register_prefix("/api", Box::new(api::handle));

        Self {
            config,
            router: Arc::new(router),
        }
    }

    /// Hace bind según la configuración y atiende conexiones para siempre
    pub fn run(&self) -> std::io::Result<()> {
        let address = self.config.address();
        println!("[*] Iniciando servidor en {}", address);

        let listener = TcpListener::bind(&address)?;
        println!("[+] Servidor escuchando en {}", address);
        println!("[*] Modo concurrente: un thread por conexión\n");

        self.serve(listener)
    }

    /// Loop de aceptación sobre un listener ya creado
    ///
    /// Cada conexión aceptada se despacha a su propio thread y el loop
    /// sigue aceptando de inmediato. Un error de accept se loguea y el
    /// loop continúa: no hay backoff ni política de crash.
    pub fn serve(&self, listener: TcpListener) -> std::io::Result<()> {
        for stream in listener.incoming() {
            match stream {
                Ok(stream) => {
                    let router = Arc::clone(&self.router);

                    let peer_addr = stream
                        .peer_addr()
                        .map(|addr| addr.to_string())
                        .unwrap_or_else(|_| "unknown".to_string());
                    println!("[*] Nueva conexión desde {} (spawning thread)", peer_addr);

                    thread::spawn(move || {
                        if let Err(e) = Self::handle_connection(stream, router) {
                            eprintln!("[-] Error en la conexión: {}", e);
                        }
                    });
                }
                Err(e) => {
                    eprintln!("[-] Error al aceptar conexión: {}", e);
                }
            }
        }

        Ok(())
    }

    /// Maneja una conexión de principio a fin
    ///
    /// El stream se cierra al salir de esta función por cualquier
    /// camino, incluido el retorno temprano por request inválido.
    fn handle_connection(mut stream: TcpStream, router: Arc<Router>) -> std::io::Result<()> {
        let start = Instant::now();
        let request_id = Self::request_id(&start);

        let mut reader = BufReader::new(stream.try_clone()?);
        let request = match Request::read_from(&mut reader) {
            Ok(request) => request,
            Err(e) => {
                // Request inválido: se cierra sin escribir respuesta
                eprintln!("[-] Request inválido [req_id: {}]: {}", &request_id[..8], e);
                return Ok(());
            }
        };

        println!(
            "[*] {} {} [req_id: {}]",
            request.method(),
            request.path(),
            &request_id[..8]
        );
        if request.method() == "POST" {
            println!("[*] Request body: {}", String::from_utf8_lossy(request.body()));
        }

        let mut response = router.route(&request);
        response.add_header("X-Request-Id", &request_id);

        stream.write_all(&response.to_bytes())?;
        stream.flush()?;

        println!(
            "[+] {} {} ({:.2}ms)\n",
            response.status(),
            request.path(),
            start.elapsed().as_secs_f64() * 1000.0
        );

        Ok(())
    }

    /// Genera un request id único a partir del tiempo y el thread actual
    fn request_id(start: &Instant) -> String {
        let mut hasher = DefaultHasher::new();
        start.elapsed().as_nanos().hash(&mut hasher);
        thread::current().id().hash(&mut hasher);
        format!("{:016x}", hasher.finish())
    }
}

#[cfg(test)]
mod server_tests {
    use super::*;
    use crate::http::{Response, StatusCode};
    use std::io::Read;
    use std::net::Shutdown;

    fn ephemeral_listener() -> TcpListener {
        TcpListener::bind("127.0.0.1:0").expect("bind")
    }

    fn test_router() -> Arc<Router> {
        let mut router = Router::new(Box::new(|_req: &Request| {
            Response::text(StatusCode::NotFound, "File Doesn't Exist")
        }));
        router.register_prefix("/api", Box::new(api::handle));
        Arc::new(router)
    }

    /// Helper: procesa una conexión en un thread y retorna lo que el
    /// cliente recibe al enviar `payload`
    fn exchange(payload: &[u8]) -> Vec<u8> {
        let listener = ephemeral_listener();
        let addr = listener.local_addr().unwrap();
        let router = test_router();

        let t = thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            Server::handle_connection(stream, router).unwrap();
        });

        let mut client = TcpStream::connect(addr).unwrap();
        client.write_all(payload).unwrap();
        client.shutdown(Shutdown::Write).unwrap();

        let mut buf = Vec::new();
        client.read_to_end(&mut buf).unwrap();

        t.join().unwrap();
        buf
    }

    #[test]
    fn test_handle_connection_api_ok() {
        let buf = exchange(b"GET /api/foo HTTP/1.1\r\nHost: localhost\r\n\r\n");
        let text = String::from_utf8_lossy(&buf);

        assert!(text.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(text.contains("X-Request-Id:"));
        assert!(text.contains("Connection: close"));
        assert!(text.ends_with("Request Path: /api/foo"));
    }

    #[test]
    fn test_handle_connection_post_body_reaches_handler() {
        let buf = exchange(b"POST /api/echo HTTP/1.1\r\nContent-Length: 5\r\n\r\nhello");
        let text = String::from_utf8_lossy(&buf);

        assert!(text.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(text.ends_with("Request Path: /api/echo"));
    }

    #[test]
    fn test_handle_connection_malformed_closes_silently() {
        // Sin terminador de línea: el cliente observa el cierre sin
        // recibir ni un byte
        let buf = exchange(b"garbage-without-newline");
        assert!(buf.is_empty());
    }

    #[test]
    fn test_handle_connection_short_request_line_closes_silently() {
        let buf = exchange(b"GET\r\n\r\n");
        assert!(buf.is_empty());
    }

    #[test]
    fn test_handle_connection_peer_closed_immediately() {
        // Cubre la rama de EOF inmediato: también cierra sin responder
        let buf = exchange(b"");
        assert!(buf.is_empty());
    }

    #[test]
    fn test_handle_connection_static_fallback() {
        let buf = exchange(b"GET /missing.txt HTTP/1.1\r\n\r\n");
        let text = String::from_utf8_lossy(&buf);

        assert!(text.starts_with("HTTP/1.1 404 Error\r\n"));
        assert!(text.ends_with("File Doesn't Exist"));
    }

    #[test]
    fn test_serve_spawns_thread_per_connection() {
        let listener = ephemeral_listener();
        let addr = listener.local_addr().unwrap();

        let config = Config {
            port: addr.port(),
            host: addr.ip().to_string(),
            www_root: "./www".to_string(),
        };
        let server = Server::new(config);
        thread::spawn(move || {
            let _ = server.serve(listener);
        });

        // Dos clientes concurrentes, ambos deben ser atendidos
        let mut handles = Vec::new();
        for i in 0..2 {
            handles.push(thread::spawn(move || {
                let mut client = TcpStream::connect(addr).unwrap();
                let req = format!("GET /api/{} HTTP/1.1\r\n\r\n", i);
                client.write_all(req.as_bytes()).unwrap();
                client.shutdown(Shutdown::Write).unwrap();

                let mut buf = Vec::new();
                client.read_to_end(&mut buf).unwrap();
                let text = String::from_utf8_lossy(&buf).into_owned();
                assert!(text.contains(&format!("Request Path: /api/{}", i)));
            }));
        }
        for h in handles {
            h.join().unwrap();
        }
    }
}
