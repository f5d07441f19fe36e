use super::*;

/// Tests linking a city to a user.
///
/// Expected: Ok(()) and the link is listed afterwards
#[tokio::test]
async fn creates_link() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_city_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let city = factory::create_city(db, "Kyoto").await?;

    let repo = UserCityRepository::new(db);
    repo.create(CreateUserCityParam {
        user_id: user.user_id,
        city_id: city.city_id,
        display_order: 3,
        is_favorite: 0,
    })
    .await?;

    let cities = repo.get_by_user(user.user_id).await?;
    assert_eq!(cities.len(), 1);
    assert_eq!(cities[0].display_order, 3);

    Ok(())
}

/// Tests linking the same city to the same user twice.
///
/// Expected: Err(DbErr) from the composite primary key
#[tokio::test]
async fn rejects_duplicate_link() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_city_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, city, _) = factory::helpers::create_user_with_city(db, "Kyoto").await?;

    let repo = UserCityRepository::new(db);
    let result = repo
        .create(CreateUserCityParam {
            user_id: user.user_id,
            city_id: city.city_id,
            display_order: 0,
            is_favorite: 0,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
