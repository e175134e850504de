use axum::{routing::get, Router};

use crate::features::metadata::handlers;

/// Create routes for the metadata feature
pub fn routes() -> Router {
    Router::new()
        .route("/api/metadata", get(handlers::list_metadata))
        .route("/api/metadata/{entity}", get(handlers::get_entity_metadata))
        .route(
            "/api/metadata/{entity}/fields/{field}",
            get(handlers::get_field_label),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::json;

    #[tokio::test]
    async fn test_category_name_label() {
        let server = TestServer::new(routes()).unwrap();

        let response = server.get("/api/metadata/category").await;

        response.assert_status_ok();
        response.assert_json(&json!({
            "success": true,
            "data": {
                "entity": "category",
                "fields": { "name": { "display_label": "Category Name" } }
            },
            "message": null,
            "meta": null,
            "errors": null
        }));
    }

    #[tokio::test]
    async fn test_product_image_file_label() {
        let server = TestServer::new(routes()).unwrap();

        let body: serde_json::Value = server.get("/api/metadata/product_image").await.json();

        assert_eq!(body["data"]["fields"]["file_name"]["display_label"], "File");
    }

    #[tokio::test]
    async fn test_list_all_entities() {
        let server = TestServer::new(routes()).unwrap();

        let body: serde_json::Value = server.get("/api/metadata").await.json();

        assert_eq!(body["meta"]["total"], 2);
        assert_eq!(body["data"][0]["entity"], "category");
        assert_eq!(body["data"][1]["entity"], "product_image");
    }

    #[tokio::test]
    async fn test_field_label_falls_back_to_field_name() {
        let server = TestServer::new(routes()).unwrap();

        let labeled: serde_json::Value = server
            .get("/api/metadata/category/fields/name")
            .await
            .json();
        assert_eq!(labeled["data"]["display_label"], "Category Name");

        let unlabeled: serde_json::Value = server
            .get("/api/metadata/product_image/fields/id")
            .await
            .json();
        assert_eq!(unlabeled["data"]["display_label"], "id");

        server
            .get("/api/metadata/product/fields/name")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unknown_entity_is_not_found() {
        let server = TestServer::new(routes()).unwrap();

        let response = server.get("/api/metadata/product").await;

        response.assert_status(StatusCode::NOT_FOUND);
        let body: serde_json::Value = response.json();
        assert_eq!(body["message"], "Entity 'product' not found");
    }
}
