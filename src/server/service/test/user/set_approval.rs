use super::*;

/// Tests approve, reject and toggle on a user.
///
/// Expected: each call returns the user with the new flag and stamped time
#[tokio::test]
async fn approves_rejects_and_toggles() -> Result<(), AppError> {
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

    let service = UserService::new(db);

    let approved = service.set_approval(organizer.id, true).await?;
    assert!(approved.approved);
    assert!(approved.approved_at.is_some());

    let rejected = service.set_approval(organizer.id, false).await?;
    assert!(!rejected.approved);
    assert!(rejected.rejected_at.is_some());

    let toggled = service.toggle_status(organizer.id).await?;
    assert!(toggled.approved);

    let toggled = service.toggle_status(organizer.id).await?;
    assert!(!toggled.approved);

    Ok(())
}

/// Tests approval changes on an unknown user.
///
/// Expected: Err(AppError::NotFound) for both set and toggle
#[tokio::test]
async fn fails_for_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_identity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);

    assert!(matches!(
        service.set_approval(7, true).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.toggle_status(7).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
