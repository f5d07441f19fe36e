use super::*;

/// Tests that every row of a batch shares the batch values.
///
/// Expected: Ok(Vec) with one row per clothing ID, all carrying the same date, weather,
/// temperature and flag
#[tokio::test]
async fn inserts_one_row_per_item_with_shared_values() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clothing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let shirt = factory::create_clothing_item(db, "Shirt", "tops").await?;
    let jeans = factory::create_clothing_item(db, "Jeans", "bottoms").await?;

    let repo = ClothingChoiceRepository::new(db);
    let created = repo
        .create_many(&CreateClothingChoicesParam {
            user_id: user.user_id,
            choice_date: date(2025, 5, 27),
            weather: "cloudy".to_string(),
            temperature: 18.5,
            is_recommended: true,
            clothing_ids: vec![shirt.clothing_id, jeans.clothing_id],
        })
        .await?;

    assert_eq!(created.len(), 2);
    assert_eq!(created[0].clothing_id, shirt.clothing_id);
    assert_eq!(created[1].clothing_id, jeans.clothing_id);
    for choice in &created {
        assert_eq!(choice.user_id, user.user_id);
        assert_eq!(choice.choice_date, date(2025, 5, 27));
        assert_eq!(choice.weather, "cloudy");
        assert_eq!(choice.temperature, 18.5);
        assert!(choice.is_recommended);
    }

    Ok(())
}

/// Tests an empty batch.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn empty_batch_inserts_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clothing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = ClothingChoiceRepository::new(db);
    let created = repo
        .create_many(&CreateClothingChoicesParam {
            user_id: user.user_id,
            choice_date: date(2025, 5, 27),
            weather: "sunny".to_string(),
            temperature: 25.0,
            is_recommended: false,
            clothing_ids: Vec::new(),
        })
        .await?;

    assert!(created.is_empty());
    assert!(repo.get_by_user(user.user_id).await?.is_empty());

    Ok(())
}

/// Tests that an unknown clothing ID stops the batch.
///
/// Expected: Err(DbErr) from the foreign key
#[tokio::test]
async fn fails_on_unknown_clothing_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clothing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let shirt = factory::create_clothing_item(db, "Shirt", "tops").await?;

    let repo = ClothingChoiceRepository::new(db);
    let result = repo
        .create_many(&CreateClothingChoicesParam {
            user_id: user.user_id,
            choice_date: date(2025, 5, 27),
            weather: "sunny".to_string(),
            temperature: 25.0,
            is_recommended: false,
            clothing_ids: vec![shirt.clothing_id, 9999],
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
