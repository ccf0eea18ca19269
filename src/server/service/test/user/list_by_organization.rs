use super::*;

/// Tests listing an organization's users.
///
/// Expected: Ok with only that organization's users, in insertion order
#[tokio::test]
async fn lists_users_of_organization() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_identity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let organization = factory::create_organization(db).await?;
    let other = factory::create_organization(db).await?;
    let first = factory::create_user(db, organization.id).await?;
    factory::create_user(db, other.id).await?;
    let second = factory::create_user(db, organization.id).await?;

    let ids: Vec<i32> = UserService::new(db)
        .list_by_organization(organization.id)
        .await?
        .iter()
        .map(|u| u.id)
        .collect();

    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}
