use super::*;

/// Tests the order of a user's choice history.
///
/// Verifies newest date first and insertion order within a date, and that other users'
/// choices are excluded.
///
/// Expected: Ok(Vec) in that order
#[tokio::test]
async fn returns_newest_date_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clothing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let shirt = factory::create_clothing_item(db, "Shirt", "tops").await?;
    let coat = factory::create_clothing_item(db, "Coat", "outerwear").await?;

    let old = factory::user_clothing_choice::ClothingChoiceFactory::new(
        db,
        user.user_id,
        shirt.clothing_id,
    )
    .choice_date(date(2025, 5, 1))
    .build()
    .await?;
    let new_first = factory::user_clothing_choice::ClothingChoiceFactory::new(
        db,
        user.user_id,
        shirt.clothing_id,
    )
    .choice_date(date(2025, 6, 1))
    .build()
    .await?;
    let new_second = factory::user_clothing_choice::ClothingChoiceFactory::new(
        db,
        user.user_id,
        coat.clothing_id,
    )
    .choice_date(date(2025, 6, 1))
    .build()
    .await?;
    factory::create_clothing_choice(db, other.user_id, coat.clothing_id).await?;

    let repo = ClothingChoiceRepository::new(db);
    let choices = repo.get_by_user(user.user_id).await?;

    let ids: Vec<i32> = choices.iter().map(|c| c.choice_id).collect();
    assert_eq!(
        ids,
        vec![new_first.choice_id, new_second.choice_id, old.choice_id]
    );

    Ok(())
}
