use super::*;

/// Tests creating a registration.
///
/// Expected: Ok with the registration retrievable by its pair
#[tokio::test]
async fn creates_registration() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (organization, _organizer, event) =
        factory::helpers::create_event_with_dependencies(db).await?;
    let student = factory::create_user(db, organization.id).await?;

    let repo = RegistrationRepository::new(db);
    let registration = repo
        .create(event.id, student.id, "token".to_string(), Utc::now())
        .await?;

    assert_eq!(registration.event_id, event.id);
    assert_eq!(registration.user_id, student.id);
    assert_eq!(registration.qr_code, "token");

    let found = repo.find_by_event_and_user(event.id, student.id).await?;
    assert_eq!(found.map(|r| r.id), Some(registration.id));

    Ok(())
}

/// Tests the unique index on the event and user pair.
///
/// Verifies that a duplicate inserted without the service's pre-check is rejected by
/// the store and the pair still has one registration.
///
/// Expected: Err(unique violation), one registration for the pair
#[tokio::test]
async fn rejects_duplicate_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (event, student, _registration) =
        factory::helpers::create_registration_with_dependencies(db).await?;

    let repo = RegistrationRepository::new(db);
    let result = repo
        .create(event.id, student.id, "second".to_string(), Utc::now())
        .await;

    assert!(is_unique_violation(&result.unwrap_err()));
    assert_eq!(repo.get_by_event(event.id).await?.len(), 1);

    Ok(())
}
