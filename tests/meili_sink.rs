use cuillere_indexer::{CategoryLabel, IndexError, MeiliSink, RecipeRecord, RecipeSink};

fn record() -> RecipeRecord {
    RecipeRecord {
        recipe_id: 1,
        category: CategoryLabel::new("Sauces chaudes"),
        name: "Beurre blanc".to_string(),
        page: 45,
    }
}

#[tokio::test]
async fn connect_checks_health_and_reuses_existing_index() {
    let mut server = mockito::Server::new_async().await;

    let health = server
        .mock("GET", "/health")
        .with_status(200)
        .with_body(r#"{"status":"available"}"#)
        .create_async()
        .await;
    let index = server
        .mock("GET", "/indexes/cuillere-argent")
        .with_status(200)
        .with_body(r#"{"uid":"cuillere-argent"}"#)
        .create_async()
        .await;

    let sink = MeiliSink::connect(&server.url(), "cuillere-argent").await;
    assert!(sink.is_ok());
    health.assert_async().await;
    index.assert_async().await;
}

#[tokio::test]
async fn connect_creates_the_index_when_missing() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("GET", "/health")
        .with_status(200)
        .create_async()
        .await;
    server
        .mock("GET", "/indexes/cuillere-argent")
        .with_status(404)
        .create_async()
        .await;
    let create = server
        .mock("POST", "/indexes")
        .match_body(mockito::Matcher::PartialJson(serde_json::json!({
            "uid": "cuillere-argent",
            "primaryKey": "recipe_id",
        })))
        .with_status(202)
        .create_async()
        .await;

    let sink = MeiliSink::connect(&server.url(), "cuillere-argent").await;
    assert!(sink.is_ok());
    create.assert_async().await;
}

#[tokio::test]
async fn unreachable_instance_is_fatal() {
    // Port 1 is never listening
    let result = MeiliSink::connect("http://127.0.0.1:1", "cuillere-argent").await;
    assert!(matches!(result, Err(IndexError::SinkUnavailable(_))));
}

#[tokio::test]
async fn prepare_clears_previous_documents() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/health")
        .with_status(200)
        .create_async()
        .await;
    server
        .mock("GET", "/indexes/cuillere-argent")
        .with_status(200)
        .create_async()
        .await;
    let clear = server
        .mock("DELETE", "/indexes/cuillere-argent/documents")
        .with_status(202)
        .create_async()
        .await;

    let sink = MeiliSink::connect(&server.url(), "cuillere-argent")
        .await
        .unwrap();
    sink.prepare().await.unwrap();
    clear.assert_async().await;
}

#[tokio::test]
async fn submit_posts_the_record_as_a_document() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/health")
        .with_status(200)
        .create_async()
        .await;
    server
        .mock("GET", "/indexes/cuillere-argent")
        .with_status(200)
        .create_async()
        .await;
    let add = server
        .mock("POST", "/indexes/cuillere-argent/documents")
        .match_body(mockito::Matcher::PartialJson(serde_json::json!([{
            "recipe_id": 1,
            "category": "Sauces chaudes",
            "name": "Beurre blanc",
            "page": 45,
        }])))
        .with_status(202)
        .create_async()
        .await;

    let sink = MeiliSink::connect(&server.url(), "cuillere-argent")
        .await
        .unwrap();
    sink.submit(&record()).await.unwrap();
    add.assert_async().await;
}

#[tokio::test]
async fn rejected_request_surfaces_status_and_body() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/health")
        .with_status(200)
        .create_async()
        .await;
    server
        .mock("GET", "/indexes/cuillere-argent")
        .with_status(200)
        .create_async()
        .await;
    server
        .mock("DELETE", "/indexes/cuillere-argent/documents")
        .with_status(403)
        .with_body("missing api key")
        .create_async()
        .await;

    let sink = MeiliSink::connect(&server.url(), "cuillere-argent")
        .await
        .unwrap();
    let result = sink.prepare().await;
    match result {
        Err(IndexError::SinkRejected { status, body }) => {
            assert_eq!(status, 403);
            assert_eq!(body, "missing api key");
        }
        other => panic!("expected SinkRejected, got {other:?}"),
    }
}
