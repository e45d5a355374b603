use recipe_import::persistence::{save_recipe, MemoryStore};
use recipe_import::{import_recipe, ImportConfig, ImportError};

const PAGE: &str = r#"
<html>
<body>
    <h1>Картофельное пюре</h1>
    <img data-src="/images/recipes/pyure/00.jpg">
    <span>PT25M</span>
    <ul>
        <li>Картофель, 1000 гр</li>
        <li>Молоко, 200 мл</li>
        <li>Лук, 1 шт</li>
        <li>Масло сливочное, 50 гр</li>
    </ul>
    <p>Картофель очистить и нарезать крупными кусками.</p>
    <p>Варить в подсоленной воде до мягкости.</p>
    <p>Размять картофель, добавить горячее молоко и масло.</p>
</body>
</html>
"#;

#[tokio::test]
async fn test_import_and_store() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/recipes/garniry/pyure")
        .with_status(200)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body(PAGE)
        .create_async()
        .await;

    let config = ImportConfig {
        site_origin: server.url(),
        ..ImportConfig::default()
    };
    let url = format!("{}/recipes/garniry/pyure", server.url());
    let imported = import_recipe(&url, &config).await.unwrap();

    assert_eq!(imported.record.title, "Картофельное пюре");
    assert_eq!(imported.record.duration_seconds, 1500);
    assert_eq!(
        imported.record.photo,
        format!("{}/images/recipes/pyure/00.jpg", server.url())
    );
    assert_eq!(imported.record.ingredients.len(), 4);
    assert_eq!(imported.ingredients.len(), 4);
    assert_eq!(imported.record.steps.len(), 3);

    let mut store = MemoryStore::new();
    let report = save_recipe(&mut store, &imported.record, &imported.ingredients)
        .await
        .unwrap();

    // "Лук" is too short a name to keep
    assert_eq!(report.ingredients_saved, 3);
    assert_eq!(report.steps_saved, 3);
    assert_eq!(store.recipes[0].duration, 1500);
    assert_eq!(store.ingredients[0].name, "Картофель");
    assert_eq!(store.ingredients[0].unit_id, Some(1));
    assert_eq!(store.recipe_ingredients[0].count, 1000.0);
    let numbers: Vec<u32> = store.step_links.iter().map(|link| link.number).collect();
    assert_eq!(numbers, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_imported_recipe_json_shape() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/recipes/garniry/pyure")
        .with_status(200)
        .with_body(PAGE)
        .create_async()
        .await;

    let url = format!("{}/recipes/garniry/pyure", server.url());
    let imported = import_recipe(&url, &ImportConfig::default()).await.unwrap();
    let json = serde_json::to_value(&imported).unwrap();

    assert_eq!(json["title"], "Картофельное пюре");
    assert_eq!(json["duration"], 1500);
    assert_eq!(json["normalized_ingredients"][1]["name"], "Молоко");
    assert_eq!(json["normalized_ingredients"][1]["unit_id"], 2);
    assert!(json.get("category").is_none());
}

#[tokio::test]
async fn test_missing_page_is_an_error() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/recipes/nowhere")
        .with_status(404)
        .create_async()
        .await;

    let url = format!("{}/recipes/nowhere", server.url());
    let result = import_recipe(&url, &ImportConfig::default()).await;
    assert!(matches!(
        result,
        Err(ImportError::HttpStatus { status: 404, .. })
    ));
}
