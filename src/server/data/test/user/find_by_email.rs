use super::*;

/// Tests finding an existing user by e-mail.
///
/// Expected: Ok(Some(User)) with the stored hash
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .email("someone@example.com")
        .password_hash("$argon2id$stored")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_email("someone@example.com").await?;

    let user = user.expect("user should exist");
    assert_eq!(user.user_id, created.user_id);
    assert_eq!(user.email, "someone@example.com");
    assert_eq!(user.password_hash, "$argon2id$stored");

    Ok(())
}

/// Tests looking up an e-mail that was never registered.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_email("nobody@example.com").await?;

    assert!(user.is_none());

    Ok(())
}
