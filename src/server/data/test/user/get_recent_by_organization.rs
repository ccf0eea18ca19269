use super::*;

/// Tests the recent users query.
///
/// Verifies newest-first ordering by creation time, the limit, and organization
/// scoping.
///
/// Expected: Ok with the 5 newest users of the organization, newest first
#[tokio::test]
async fn returns_newest_users_first_with_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_identity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let organization = factory::create_organization(db).await?;
    let other = factory::create_organization(db).await?;
    let base = Utc::now() - Duration::days(30);

    let mut created = Vec::new();
    for day in 0..7 {
        let user = factory::user::UserFactory::new(db, organization.id)
            .created_at(base + Duration::days(day))
            .build()
            .await?;
        created.push(user.id);
    }
    factory::user::UserFactory::new(db, other.id)
        .created_at(Utc::now())
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let recent = repo.get_recent_by_organization(organization.id, 5).await?;

    let ids: Vec<i32> = recent.iter().map(|u| u.id).collect();
    let expected: Vec<i32> = created.iter().rev().take(5).copied().collect();
    assert_eq!(ids, expected);

    assert_eq!(repo.count_by_organization(organization.id).await?, 7);

    Ok(())
}

/// Tests that users created at the same instant are ordered by id descending.
///
/// Expected: Ok with the later insert first
#[tokio::test]
async fn breaks_creation_time_ties_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_identity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let organization = factory::create_organization(db).await?;
    let at = Utc::now();
    let first = factory::user::UserFactory::new(db, organization.id)
        .created_at(at)
        .build()
        .await?;
    let second = factory::user::UserFactory::new(db, organization.id)
        .created_at(at)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let recent = repo.get_recent_by_organization(organization.id, 5).await?;

    assert_eq!(recent[0].id, second.id);
    assert_eq!(recent[1].id, first.id);

    Ok(())
}
