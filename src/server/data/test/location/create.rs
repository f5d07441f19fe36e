use super::*;

/// Tests that a stored location gets the server's timestamp.
///
/// Expected: Ok(Location) with created_at between the instants before and after the call
#[tokio::test]
async fn stores_server_timestamp() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_location_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let before = Utc::now() - Duration::seconds(1);
    let repo = LocationRepository::new(db);
    let location = repo
        .create(CreateLocationParam {
            user_id: user.user_id,
            latitude: 35.0116,
            longitude: 135.7681,
        })
        .await?;
    let after = Utc::now() + Duration::seconds(1);

    assert_eq!(location.user_id, user.user_id);
    assert_eq!(location.latitude, 35.0116);
    assert_eq!(location.longitude, 135.7681);
    assert!(location.created_at >= before && location.created_at <= after);

    Ok(())
}

/// Tests logging a location for a user that does not exist.
///
/// Expected: Err(DbErr) from the foreign key
#[tokio::test]
async fn rejects_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_location_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LocationRepository::new(db);
    let result = repo
        .create(CreateLocationParam {
            user_id: 42,
            latitude: 0.0,
            longitude: 0.0,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
