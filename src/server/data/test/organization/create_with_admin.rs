use super::*;

/// Tests creating an organization together with its admin.
///
/// Verifies that both rows are written and the admin is an approved admin of the new
/// organization.
///
/// Expected: Ok with organization and admin linked
#[tokio::test]
async fn creates_organization_and_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_identity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OrganizationRepository::new(db);
    let (organization, admin) = repo
        .create_with_admin(acme_param(), admin_param("admin@acmeu.com"))
        .await?;

    assert_eq!(organization.name, "Acme U");
    assert_eq!(organization.org_type, "university");
    assert_eq!(admin.organization_id, organization.id);
    assert_eq!(admin.role, UserRole::Admin);
    assert!(admin.approved);
    assert_eq!(admin.email, "admin@acmeu.com");

    let stored = repo.find_by_id(organization.id).await?.unwrap();
    assert_eq!(stored.name, organization.name);

    Ok(())
}

/// Tests that a failing admin insert leaves no organization behind.
///
/// Verifies that when the admin email is already taken the unique violation surfaces and
/// the organization insert is rolled back.
///
/// Expected: Err(unique violation), organization count unchanged
#[tokio::test]
async fn rolls_back_organization_when_admin_email_taken() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_identity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_organization(db).await?;
    factory::user::UserFactory::new(db, existing.id)
        .email("admin@acmeu.com")
        .build()
        .await?;

    let repo = OrganizationRepository::new(db);
    let result = repo
        .create_with_admin(acme_param(), admin_param("admin@acmeu.com"))
        .await;

    let err = result.unwrap_err();
    assert!(is_unique_violation(&err));

    let count = entity::prelude::Organization::find().count(db).await?;
    assert_eq!(count, 1);
    assert!(repo.find_by_name_ignore_case("Acme U").await?.is_none());

    Ok(())
}
