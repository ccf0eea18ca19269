use super::*;

/// Tests listing organizations.
///
/// Verifies that every organization is returned in insertion order.
///
/// Expected: Ok with organizations ordered by id
#[tokio::test]
async fn returns_organizations_in_insertion_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_identity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::organization::OrganizationFactory::new(db)
        .name("Zeta College")
        .build()
        .await?;
    let second = factory::organization::OrganizationFactory::new(db)
        .name("Alpha Corp")
        .org_type("company")
        .build()
        .await?;

    let repo = OrganizationRepository::new(db);
    let organizations = repo.get_all().await?;

    assert_eq!(organizations.len(), 2);
    assert_eq!(organizations[0].id, first.id);
    assert_eq!(organizations[1].id, second.id);
    assert_eq!(organizations[1].org_type, "company");

    Ok(())
}

/// Tests listing organizations on an empty store.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_organizations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_identity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OrganizationRepository::new(db);
    let organizations = repo.get_all().await?;

    assert!(organizations.is_empty());

    Ok(())
}
