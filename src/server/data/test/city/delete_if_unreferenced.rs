use super::*;

/// Tests removing a city that no user links to.
///
/// Expected: Ok(true) and the row is gone
#[tokio::test]
async fn deletes_unreferenced_city() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_city_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::create_city(db, "Tokyo").await?;

    let repo = CityRepository::new(db);
    let deleted = repo.delete_if_unreferenced(city.city_id).await?;

    assert!(deleted);
    let remaining = entity::prelude::City::find_by_id(city.city_id).one(db).await?;
    assert!(remaining.is_none());

    Ok(())
}

/// Tests that a city linked by a user stays in the catalog.
///
/// Expected: Ok(false) and the row still exists
#[tokio::test]
async fn keeps_referenced_city() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_city_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, city, _) = factory::helpers::create_user_with_city(db, "Tokyo").await?;

    let repo = CityRepository::new(db);
    let deleted = repo.delete_if_unreferenced(city.city_id).await?;

    assert!(!deleted);
    let remaining = entity::prelude::City::find_by_id(city.city_id).one(db).await?;
    assert!(remaining.is_some());

    Ok(())
}

/// Tests deleting an ID that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_city() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_city_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CityRepository::new(db);
    let deleted = repo.delete_if_unreferenced(999).await?;

    assert!(!deleted);

    Ok(())
}
