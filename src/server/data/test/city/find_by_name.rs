use super::*;

/// Tests resolving a catalog city by name.
///
/// Expected: Ok(Some(City)) with the stored ID
#[tokio::test]
async fn finds_city_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::City)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tokyo = factory::create_city(db, "Tokyo").await?;
    factory::create_city(db, "Osaka").await?;

    let repo = CityRepository::new(db);
    let city = repo.find_by_name("Tokyo").await?;

    let city = city.expect("city should exist");
    assert_eq!(city.city_id, tokyo.city_id);
    assert_eq!(city.city_name, "Tokyo");

    Ok(())
}

/// Tests resolving a name that is not in the catalog.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::City)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CityRepository::new(db);
    let city = repo.find_by_name("Nonexistent").await?;

    assert!(city.is_none());

    Ok(())
}
