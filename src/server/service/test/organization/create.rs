use super::*;

/// Tests creating an organization with its admin.
///
/// Verifies that "Acme U" produces the admin `admin@acmeu.com`, approved, with the
/// default password, and that the admin can log in with the returned credentials.
///
/// Expected: Ok with admin credentials that log in successfully
#[tokio::test]
async fn creates_organization_with_working_admin_login() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_identity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = OrganizationService::new(db);
    let created = service.create(acme()).await?;

    assert_eq!(created.organization.name, "Acme U");
    assert_eq!(created.admin_credentials.email, "admin@acmeu.com");
    assert_eq!(created.admin_credentials.password, DEFAULT_ADMIN_PASSWORD);

    let admin = UserRepository::new(db)
        .find_by_email("admin@acmeu.com")
        .await?
        .unwrap();
    assert_eq!(admin.role, UserRole::Admin);
    assert!(admin.approved);
    assert_eq!(admin.first_name, "Admin");
    assert_eq!(admin.last_name, "Acme U");
    assert_eq!(admin.organization_id, created.organization.id);
    assert_ne!(admin.password_hash, DEFAULT_ADMIN_PASSWORD);

    let logged_in = AuthService::new(db)
        .login(LoginParam {
            email: created.admin_credentials.email,
            password: created.admin_credentials.password,
        })
        .await?;
    assert_eq!(logged_in.id, admin.id);

    Ok(())
}

/// Tests that organization names are unique ignoring case.
///
/// Expected: Err(AppError::Conflict) for "ACME U"
#[tokio::test]
async fn rejects_duplicate_name_ignoring_case() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_identity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = OrganizationService::new(db);
    service.create(acme()).await?;

    let result = service
        .create(CreateOrganizationParam {
            name: "ACME U".to_string(),
            org_type: "company".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(service.list().await?.len(), 1);

    Ok(())
}

/// Tests names that differ but slug to an admin email already in use.
///
/// Verifies that "Acme-U" conflicts on `admin@acmeu.com` and leaves no organization
/// behind.
///
/// Expected: Err(AppError::Conflict), one organization stored
#[tokio::test]
async fn rejects_name_whose_admin_email_is_taken() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_identity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = OrganizationService::new(db);
    service.create(acme()).await?;

    let result = service
        .create(CreateOrganizationParam {
            name: "Acme-U".to_string(),
            org_type: "university".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(service.list().await?.len(), 1);

    Ok(())
}

/// Tests that an existing user holding the admin email blocks creation.
///
/// Expected: Err(AppError::Conflict), no new organization
#[tokio::test]
async fn rejects_when_user_already_holds_admin_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_identity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let other = factory::create_organization(db).await?;
    factory::user::UserFactory::new(db, other.id)
        .email("admin@acmeu.com")
        .build()
        .await?;

    let service = OrganizationService::new(db);
    let result = service.create(acme()).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(service.list().await?.len(), 1);

    Ok(())
}

/// Tests organizations whose names share no ASCII letters.
///
/// Verifies that "東京大学" and "京都大学" get distinct admin emails and that a name
/// without any alphanumerics still gets a usable one.
///
/// Expected: Ok for all three, three distinct admin emails
#[tokio::test]
async fn non_latin_names_get_distinct_admin_emails() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_identity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = OrganizationService::new(db);
    let mut emails = Vec::new();
    for name in ["東京大学", "京都大学", "???"] {
        let created = service
            .create(CreateOrganizationParam {
                name: name.to_string(),
                org_type: "university".to_string(),
            })
            .await?;
        emails.push(created.admin_credentials.email);
    }

    assert_eq!(emails[0], "admin@東京大学.com");
    assert_eq!(emails[1], "admin@京都大学.com");
    assert!(emails[2].starts_with("admin@org"));
    assert_ne!(emails[2], "admin@.com");
    assert_eq!(service.list().await?.len(), 3);

    let admin = UserRepository::new(db)
        .find_by_email(&emails[1])
        .await?
        .unwrap();
    assert_eq!(admin.last_name, "京都大学");

    Ok(())
}
