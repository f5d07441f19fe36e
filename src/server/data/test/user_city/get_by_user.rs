use super::*;

/// Tests listing a user's cities with their catalog names.
///
/// Expected: Ok(Vec) holding only the requested user's links
#[tokio::test]
async fn returns_cities_of_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_city_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let tokyo = factory::create_city(db, "Tokyo").await?;
    let osaka = factory::create_city(db, "Osaka").await?;

    factory::user_city::UserCityFactory::new(db, user.user_id, tokyo.city_id)
        .display_order(1)
        .is_favorite(1)
        .build()
        .await?;
    factory::create_user_city(db, other.user_id, osaka.city_id).await?;

    let repo = UserCityRepository::new(db);
    let cities = repo.get_by_user(user.user_id).await?;

    assert_eq!(cities.len(), 1);
    assert_eq!(cities[0].city_id, tokyo.city_id);
    assert_eq!(cities[0].city_name, "Tokyo");
    assert_eq!(cities[0].display_order, 1);
    assert_eq!(cities[0].is_favorite, 1);

    Ok(())
}

/// Tests listing cities of a user without any.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_for_user_without_cities() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_city_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserCityRepository::new(db);
    let cities = repo.get_by_user(user.user_id).await?;

    assert!(cities.is_empty());

    Ok(())
}
