use super::*;

/// Tests the dashboard counts and lists for one organization.
///
/// Verifies the pending and upcoming approved counts, the pending organizer list, the
/// totals, and that nothing from another organization leaks in.
///
/// Expected: Ok with organization-scoped figures
#[tokio::test]
async fn aggregates_one_organization() -> Result<(), AppError> {
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

    let pending_organizer = factory::user::UserFactory::new(db, organization.id)
        .role("organizer")
        .approved(false)
        .build()
        .await?;
    factory::create_user(db, organization.id).await?;

    for (offset, status) in [
        (0, "approved"),
        (-1, "approved"),
        (2, "pending"),
        (3, "pending"),
        (4, "rejected"),
    ] {
        factory::event::EventFactory::new(db, organizer.id, organization.id)
            .date(today() + Duration::days(offset))
            .status(status)
            .build()
            .await?;
    }
    factory::event::EventFactory::new(db, other_organizer.id, other_organization.id)
        .status("pending")
        .build()
        .await?;

    let stats = EventService::new(db)
        .dashboard_stats(organization.id, today())
        .await?;

    assert_eq!(stats.pending_events, 2);
    assert_eq!(stats.approved_events, 1);
    assert_eq!(stats.total_events, 5);
    assert_eq!(stats.total_users, 3);
    assert_eq!(stats.pending_organizers.len(), 1);
    assert_eq!(stats.pending_organizers[0].id, pending_organizer.id);
    assert_eq!(stats.recent_pending_events.len(), 2);
    assert!(stats
        .recent_pending_events
        .iter()
        .all(|e| e.event.status == EventStatus::Pending && e.organizer_name == organizer.first_name));
    assert_eq!(stats.recent_events.len(), 5);
    assert_eq!(stats.recent_users.len(), 3);

    Ok(())
}

/// Tests that recent lists are capped at five and ordered newest first.
///
/// Expected: Ok with five events and five users, newest first
#[tokio::test]
async fn caps_recent_lists_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (organization, organizer) =
        factory::helpers::create_organization_with_organizer(db).await?;
    let base = Utc::now() - Duration::days(30);

    let mut events = Vec::new();
    let mut users = Vec::new();
    for day in 0..7 {
        let event = factory::event::EventFactory::new(db, organizer.id, organization.id)
            .status("pending")
            .created_at(base + Duration::days(day))
            .build()
            .await?;
        events.push(event.id);

        let user = factory::user::UserFactory::new(db, organization.id)
            .created_at(base + Duration::days(day))
            .build()
            .await?;
        users.push(user.id);
    }

    let stats = EventService::new(db)
        .dashboard_stats(organization.id, today())
        .await?;

    let newest_events: Vec<i32> = events.iter().rev().take(5).copied().collect();
    let recent_pending: Vec<i32> = stats
        .recent_pending_events
        .iter()
        .map(|e| e.event.id)
        .collect();
    let recent_events: Vec<i32> = stats.recent_events.iter().map(|e| e.event.id).collect();
    assert_eq!(recent_pending, newest_events);
    assert_eq!(recent_events, newest_events);

    // The organizer was created now, after every backdated user.
    let recent_users: Vec<i32> = stats.recent_users.iter().map(|u| u.id).collect();
    let mut newest_users = vec![organizer.id];
    newest_users.extend(users.iter().rev().take(4));
    assert_eq!(recent_users, newest_users);

    assert_eq!(stats.pending_events, 7);

    Ok(())
}
