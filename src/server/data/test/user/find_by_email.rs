use super::*;

/// Tests looking up a user by email with different case and whitespace.
///
/// Expected: Ok(Some) for "  JO@Acme.EDU ", Ok(None) for an unknown address
#[tokio::test]
async fn finds_user_ignoring_case_and_whitespace() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_identity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let organization = factory::create_organization(db).await?;
    let stored = factory::user::UserFactory::new(db, organization.id)
        .email("jo@acme.edu")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    let found = repo.find_by_email("  JO@Acme.EDU ").await?;
    assert_eq!(found.map(|u| u.id), Some(stored.id));

    let missing = repo.find_by_email("someone@acme.edu").await?;
    assert!(missing.is_none());

    Ok(())
}

/// Tests that a stored role outside the known set surfaces as an error.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn fails_on_unknown_stored_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_identity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let organization = factory::create_organization(db).await?;
    factory::user::UserFactory::new(db, organization.id)
        .email("ghost@acme.edu")
        .role("superuser")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo.find_by_email("ghost@acme.edu").await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}
