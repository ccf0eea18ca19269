use super::*;

/// Tests approving a user.
///
/// Verifies that the flag is set and `approved_at` is stamped.
///
/// Expected: Ok(Some) with approved = true and approved_at set
#[tokio::test]
async fn approves_user_and_stamps_time() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_identity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let organization = factory::create_organization(db).await?;
    let organizer = factory::user::UserFactory::new(db, organization.id)
        .role("organizer")
        .approved(false)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let at = Utc::now();
    let user = repo.set_approval(organizer.id, true, at).await?.unwrap();

    assert!(user.approved);
    assert!(user.approved_at.is_some());
    assert!(user.rejected_at.is_none());

    Ok(())
}

/// Tests revoking approval.
///
/// Verifies that the flag is cleared and `rejected_at` is stamped while an earlier
/// `approved_at` is kept.
///
/// Expected: Ok(Some) with approved = false and both timestamps set
#[tokio::test]
async fn rejects_user_and_keeps_earlier_approval_time() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_identity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let organization = factory::create_organization(db).await?;
    let student = factory::create_user(db, organization.id).await?;

    let repo = UserRepository::new(db);
    repo.set_approval(student.id, true, Utc::now()).await?;
    let user = repo
        .set_approval(student.id, false, Utc::now())
        .await?
        .unwrap();

    assert!(!user.approved);
    assert!(user.approved_at.is_some());
    assert!(user.rejected_at.is_some());

    Ok(())
}

/// Tests changing approval of a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_identity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.set_approval(999, true, Utc::now()).await?;

    assert!(result.is_none());

    Ok(())
}
