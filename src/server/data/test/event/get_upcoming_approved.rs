use super::*;

/// Tests the upcoming approved events query around the date boundary.
///
/// Verifies that an approved event dated yesterday is excluded while one dated today is
/// included, and that pending events and other organizations are excluded.
///
/// Expected: Ok with today's then tomorrow's approved event
#[tokio::test]
async fn includes_today_and_excludes_yesterday() -> Result<(), DbErr> {
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

    let event = |date: NaiveDate, status: &str| {
        factory::event::EventFactory::new(db, organizer.id, organization.id)
            .date(date)
            .status(status)
    };

    let tomorrow = event(today() + Duration::days(1), "approved").build().await?;
    event(today() - Duration::days(1), "approved").build().await?;
    let on_today = event(today(), "approved").build().await?;
    event(today(), "pending").build().await?;
    event(today(), "rejected").build().await?;
    factory::event::EventFactory::new(db, other_organizer.id, other_organization.id)
        .date(today())
        .status("approved")
        .build()
        .await?;

    let repo = EventRepository::new(db);
    let events = repo
        .get_upcoming_approved(organization.id, today())
        .await?;

    let ids: Vec<i32> = events.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![on_today.id, tomorrow.id]);

    Ok(())
}
