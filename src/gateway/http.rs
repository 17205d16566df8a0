pub mod email_client;
pub mod isbn_client;

#[cfg(test)]
pub(crate) mod test_server {
    use std::net::TcpListener;
    use axum::Router;

    // serves the router on an ephemeral local port and returns its base url
    pub(crate) async fn spawn_server(app: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").expect("should bind test server");
        let addr = listener.local_addr().expect("should resolve test server address");
        let server = axum::Server::from_tcp(listener).expect("should build test server");
        tokio::spawn(async move {
            let _ = server.serve(app.into_make_service()).await;
        });
        format!("http://{}", addr)
    }
}
