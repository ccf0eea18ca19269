use super::*;

/// Tests listing organizers awaiting approval.
///
/// Verifies that only unapproved organizers of the requested organization are returned;
/// approved organizers, students and other organizations are excluded.
///
/// Expected: Ok with exactly the pending organizer
#[tokio::test]
async fn returns_only_unapproved_organizers_of_organization() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_identity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let organization = factory::create_organization(db).await?;
    let other = factory::create_organization(db).await?;

    let pending = factory::user::UserFactory::new(db, organization.id)
        .role("organizer")
        .approved(false)
        .build()
        .await?;
    factory::user::UserFactory::new(db, organization.id)
        .role("organizer")
        .approved(true)
        .build()
        .await?;
    factory::create_user(db, organization.id).await?;
    factory::user::UserFactory::new(db, other.id)
        .role("organizer")
        .approved(false)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let organizers = repo.get_pending_organizers(organization.id).await?;

    assert_eq!(organizers.len(), 1);
    assert_eq!(organizers[0].id, pending.id);

    Ok(())
}
