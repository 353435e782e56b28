#[cfg(test)]
mod integration_tests {
    use crate::schemas::HealthResponse;
    use crate::test_utils::test_utils::{init_test_tracing, setup_test_app, BUNDLE_JS, INDEX_HTML};
    use axum::http::StatusCode;
    use axum_test::TestServer;

    #[tokio::test]
    async fn test_health_check() {
        let _guard = init_test_tracing();
        let (app, _dist) = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server.get("/health").await;

        response.assert_status(StatusCode::OK);
        let body: HealthResponse = response.json();
        assert_eq!(body.status, "healthy");
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_root_serves_index() {
        let _guard = init_test_tracing();
        let (app, _dist) = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server.get("/").await;

        response.assert_status(StatusCode::OK);
        assert_eq!(response.text(), INDEX_HTML);
    }

    #[tokio::test]
    async fn test_static_asset_is_served() {
        let _guard = init_test_tracing();
        let (app, _dist) = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server.get("/frontend.js").await;

        response.assert_status(StatusCode::OK);
        assert_eq!(response.text(), BUNDLE_JS);
    }

    #[tokio::test]
    async fn test_client_routes_fall_back_to_index() {
        let _guard = init_test_tracing();
        let (app, _dist) = setup_test_app();
        let server = TestServer::new(app).unwrap();

        for path in ["/customers", "/sales", "/settings", "/login", "/no/such/page"] {
            let response = server.get(path).await;
            response.assert_status(StatusCode::OK);
            assert_eq!(response.text(), INDEX_HTML, "fallback for {}", path);
        }
    }
}
