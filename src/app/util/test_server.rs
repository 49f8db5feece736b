use std::net::{SocketAddr, TcpListener};

use axum::Router;

/// Serves `router` on an ephemeral local port and returns its base url.
pub async fn spawn_server(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::Server::from_tcp(listener)
            .unwrap()
            .serve(router.into_make_service())
            .await
            .unwrap();
    });

    format!("http://{}", addr)
}

/// Base url of a local port that was just released, so nothing listens on it.
pub fn unused_address() -> String {
    let addr: SocketAddr = TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();

    format!("http://{}", addr)
}
