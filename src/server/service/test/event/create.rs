use super::*;

/// Tests creating an event.
///
/// Expected: Ok with status pending and no registrations
#[tokio::test]
async fn creates_pending_event() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (organization, organizer) =
        factory::helpers::create_organization_with_organizer(db).await?;

    let event = EventService::new(db)
        .create(career_fair(organizer.id, organization.id))
        .await?;

    assert_eq!(event.status, EventStatus::Pending);
    assert!(event.registrations.is_empty());
    assert_eq!(event.organizer_id, organizer.id);

    Ok(())
}

/// Tests creating an event with references that do not resolve.
///
/// Expected: Err(AppError::BadRequest) for an unknown organizer and organization
#[tokio::test]
async fn rejects_unknown_organizer_or_organization() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (organization, organizer) =
        factory::helpers::create_organization_with_organizer(db).await?;
    let service = EventService::new(db);

    let unknown_organizer = service
        .create(career_fair(organizer.id + 100, organization.id))
        .await;
    assert!(matches!(unknown_organizer, Err(AppError::BadRequest(_))));

    let unknown_organization = service
        .create(career_fair(organizer.id, organization.id + 100))
        .await;
    assert!(matches!(unknown_organization, Err(AppError::BadRequest(_))));

    assert!(service.list(EventFilter::default()).await?.is_empty());

    Ok(())
}
