use super::*;

/// Tests that the catalog is ordered by category, then name.
///
/// Expected: Ok(Vec) sorted (bottoms before tops, names ascending within a category)
#[tokio::test]
async fn returns_catalog_ordered_by_category_then_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clothing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_clothing_item(db, "T-shirt", "tops").await?;
    factory::create_clothing_item(db, "Shorts", "bottoms").await?;
    factory::create_clothing_item(db, "Hoodie", "tops").await?;
    factory::create_clothing_item(db, "Jeans", "bottoms").await?;

    let repo = ClothingItemRepository::new(db);
    let items = repo.get_all().await?;

    let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Jeans", "Shorts", "Hoodie", "T-shirt"]);

    Ok(())
}

/// Tests an empty catalog.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_catalog() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clothing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClothingItemRepository::new(db);
    let items = repo.get_all().await?;

    assert!(items.is_empty());

    Ok(())
}
