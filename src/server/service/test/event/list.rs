use super::*;

/// Tests listing by organizer.
///
/// Verifies that exactly the organizer's events are returned in insertion order, each
/// with its derived registrations.
///
/// Expected: Ok with the organizer's events and their registrations
#[tokio::test]
async fn lists_organizer_events_with_registrations() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (organization, organizer) =
        factory::helpers::create_organization_with_organizer(db).await?;
    let other = factory::user::UserFactory::new(db, organization.id)
        .role("organizer")
        .build()
        .await?;
    let student = factory::create_user(db, organization.id).await?;

    let service = EventService::new(db);
    let first = service
        .create(career_fair(organizer.id, organization.id))
        .await?;
    service.create(career_fair(other.id, organization.id)).await?;
    let third = service
        .create(career_fair(organizer.id, organization.id))
        .await?;
    factory::create_registration(db, third.id, student.id).await?;

    let events = service
        .list(EventFilter {
            organizer_id: Some(organizer.id),
            organization_id: None,
        })
        .await?;

    let ids: Vec<i32> = events.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![first.id, third.id]);
    assert!(events[0].registrations.is_empty());
    assert_eq!(events[1].registrations.len(), 1);
    assert_eq!(events[1].registrations[0].user_id, student.id);

    Ok(())
}
