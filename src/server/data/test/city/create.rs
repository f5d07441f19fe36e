use super::*;

/// Tests inserting a catalog city.
///
/// Expected: Ok(City) with a fresh ID
#[tokio::test]
async fn creates_city() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::City)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CityRepository::new(db);
    let city = repo.create("Sapporo".to_string()).await?;

    assert!(city.city_id > 0);
    assert_eq!(city.city_name, "Sapporo");

    Ok(())
}

/// Tests that city names are unique across the catalog.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::City)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_city(db, "Sapporo").await?;

    let repo = CityRepository::new(db);
    let result = repo.create("Sapporo".to_string()).await;

    assert!(result.is_err());

    Ok(())
}
