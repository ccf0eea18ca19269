use super::*;

/// Tests filtering events by organizer.
///
/// Verifies that exactly the organizer's events come back, in insertion order.
///
/// Expected: Ok with the organizer's two events
#[tokio::test]
async fn filters_by_organizer_in_insertion_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (organization, organizer) =
        factory::helpers::create_organization_with_organizer(db).await?;
    let other_organizer = factory::user::UserFactory::new(db, organization.id)
        .role("organizer")
        .build()
        .await?;

    let first = factory::create_event(db, organizer.id, organization.id).await?;
    factory::create_event(db, other_organizer.id, organization.id).await?;
    let third = factory::create_event(db, organizer.id, organization.id).await?;

    let repo = EventRepository::new(db);
    let events = repo
        .get_filtered(EventFilter {
            organizer_id: Some(organizer.id),
            organization_id: None,
        })
        .await?;

    let ids: Vec<i32> = events.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![first.id, third.id]);

    Ok(())
}

/// Tests combining organizer and organization filters.
///
/// Verifies that both filters must match, and that an empty filter returns everything.
///
/// Expected: Ok with the intersection, then all events
#[tokio::test]
async fn combines_filters_with_and() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (organization, organizer) =
        factory::helpers::create_organization_with_organizer(db).await?;
    let (other_organization, other_organizer) =
        factory::helpers::create_organization_with_organizer(db).await?;

    let matching = factory::create_event(db, organizer.id, organization.id).await?;
    factory::create_event(db, other_organizer.id, other_organization.id).await?;

    let repo = EventRepository::new(db);

    let events = repo
        .get_filtered(EventFilter {
            organizer_id: Some(organizer.id),
            organization_id: Some(organization.id),
        })
        .await?;
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, matching.id);

    let none = repo
        .get_filtered(EventFilter {
            organizer_id: Some(organizer.id),
            organization_id: Some(other_organization.id),
        })
        .await?;
    assert!(none.is_empty());

    let all = repo.get_filtered(EventFilter::default()).await?;
    assert_eq!(all.len(), 2);

    Ok(())
}
