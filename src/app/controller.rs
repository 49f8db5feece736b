use axum::response::Html;

use super::page::PAGE_HTML;

pub async fn get_root() -> Html<&'static str> {
    Html(PAGE_HTML)
}

#[cfg(test)]
mod tests {
    use axum::http::{header::CONTENT_TYPE, StatusCode};

    use crate::{
        app::{env::Envy, util::test_server::spawn_server},
        router, AppState,
    };

    #[tokio::test]
    async fn root_serves_the_page() {
        let relay = spawn_server(router(AppState::new(Envy::default()))).await;

        let res = reqwest::get(format!("{}/", relay)).await.unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        let content_type = res.headers()[CONTENT_TYPE].to_str().unwrap().to_string();
        assert!(content_type.starts_with("text/html"));
        let html = res.text().await.unwrap();
        assert!(html.contains("<title>SD Prompt Expander</title>"));
        assert!(html.contains("/api/expand"));
        assert!(html.contains("/api/generate"));
    }

    #[tokio::test]
    async fn cors_preflight_is_allowed() {
        let relay = spawn_server(router(AppState::new(Envy::default()))).await;

        let res = reqwest::Client::new()
            .request(reqwest::Method::OPTIONS, format!("{}/api/expand", relay))
            .header("origin", "http://example.test")
            .header("access-control-request-method", "POST")
            .header("access-control-request-headers", "content-type")
            .send()
            .await
            .unwrap();

        assert!(res.status().is_success());
        assert_eq!(res.headers()["access-control-allow-origin"], "*");
    }
}
