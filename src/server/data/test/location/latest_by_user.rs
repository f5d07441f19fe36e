use super::*;

/// Tests picking the most recent location.
///
/// Expected: Ok(Some(Location)) with the latest created_at
#[tokio::test]
async fn returns_most_recent_location() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_location_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let now = Utc::now();

    factory::user_location::LocationFactory::new(db, user.user_id)
        .coordinates(1.0, 1.0)
        .created_at(now - Duration::hours(2))
        .build()
        .await?;
    factory::user_location::LocationFactory::new(db, user.user_id)
        .coordinates(3.0, 3.0)
        .created_at(now)
        .build()
        .await?;
    factory::user_location::LocationFactory::new(db, user.user_id)
        .coordinates(2.0, 2.0)
        .created_at(now - Duration::hours(1))
        .build()
        .await?;

    let repo = LocationRepository::new(db);
    let latest = repo.latest_by_user(user.user_id).await?;

    let latest = latest.expect("location should exist");
    assert_eq!(latest.latitude, 3.0);
    assert_eq!(latest.longitude, 3.0);

    Ok(())
}

/// Tests a user without any logged location.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_locations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_location_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    factory::create_location(db, other.user_id).await?;

    let repo = LocationRepository::new(db);
    let latest = repo.latest_by_user(user.user_id).await?;

    assert!(latest.is_none());

    Ok(())
}
