use super::*;

/// Tests the dashboard counts over an organization's events.
///
/// Expected: Ok with per-status counts and the upcoming approved count
#[tokio::test]
async fn counts_events_by_status_and_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (organization, organizer) =
        factory::helpers::create_organization_with_organizer(db).await?;

    for (offset, status) in [
        (0, "approved"),
        (3, "approved"),
        (-2, "approved"),
        (5, "pending"),
        (5, "pending"),
        (1, "rejected"),
    ] {
        factory::event::EventFactory::new(db, organizer.id, organization.id)
            .date(today() + Duration::days(offset))
            .status(status)
            .build()
            .await?;
    }

    let repo = EventRepository::new(db);

    assert_eq!(repo.count_by_organization(organization.id, None).await?, 6);
    assert_eq!(
        repo.count_by_organization(organization.id, Some(EventStatus::Pending))
            .await?,
        2
    );
    assert_eq!(
        repo.count_upcoming_approved(organization.id, today()).await?,
        2
    );
    assert_eq!(repo.count_by_organization(organization.id + 100, None).await?, 0);

    Ok(())
}
