use super::*;
use sea_orm::SqlErr;

/// Tests inserting a new user.
///
/// Expected: Ok(User) with an assigned ID that can be found again by e-mail
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            email: "new@example.com".to_string(),
            password_hash: "hash".to_string(),
        })
        .await?;

    assert!(user.user_id > 0);

    let found = repo.find_by_email("new@example.com").await?;
    assert_eq!(found, Some(user));

    Ok(())
}

/// Tests inserting a second user with an e-mail that is already taken.
///
/// Expected: Err(DbErr) reporting a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("taken@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParam {
            email: "taken@example.com".to_string(),
            password_hash: "hash".to_string(),
        })
        .await;

    let err = result.expect_err("duplicate e-mail should fail");
    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
