//! # MiniWeb - Entry Point
//! src/main.rs
//!
//! Punto de entrada del servidor HTTP/1.1.

use miniweb::config::Config;
use miniweb::server::Server;

fn main() {
    println!("=================================");
    println!("  MiniWeb HTTP/1.1 Server");
    println!("=================================\n");

    // Crear configuración desde CLI args y variables de entorno
    let config = Config::new();

    if let Err(e) = config.validate() {
        eprintln!("[-] Configuración inválida: {}", e);
        std::process::exit(1);
    }

    config.print_summary();

    // Crear el servidor e iniciarlo (esto bloqueará el thread)
    let server = Server::new(config);
    if let Err(e) = server.run() {
        eprintln!("[-] Error fatal: {}", e);
        std::process::exit(1);
    }
}
