use super::*;

/// Tests removing a city from one user's list.
///
/// Verifies that only the requested user's link is deleted and the same city on another
/// user's list is untouched.
///
/// Expected: Ok(1)
#[tokio::test]
async fn deletes_only_users_link() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_city_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, city, _) = factory::helpers::create_user_with_city(db, "Nagoya").await?;
    let other = factory::create_user(db).await?;
    factory::create_user_city(db, other.user_id, city.city_id).await?;

    let repo = UserCityRepository::new(db);
    let deleted = repo.delete(user.user_id, city.city_id).await?;

    assert_eq!(deleted, 1);
    assert!(repo.get_by_user(user.user_id).await?.is_empty());
    assert_eq!(repo.get_by_user(other.user_id).await?.len(), 1);

    Ok(())
}

/// Tests deleting a link that does not exist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_for_missing_link() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_city_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let city = factory::create_city(db, "Nagoya").await?;

    let repo = UserCityRepository::new(db);
    let deleted = repo.delete(user.user_id, city.city_id).await?;

    assert_eq!(deleted, 0);

    Ok(())
}
