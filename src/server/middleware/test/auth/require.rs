use super::*;

/// Tests that a logged-in user is resolved from the session.
///
/// Expected: Ok(User) matching the stored id
#[tokio::test]
async fn resolves_logged_in_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_identity_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let organization = factory::create_organization(db).await?;
    let user = factory::user::UserFactory::new(db, organization.id)
        .email("jo@acme.edu")
        .build()
        .await?;

    AuthSession::new(session).set_user_id(user.id).await?;

    let resolved = AuthGuard::new(db, session).require().await?;

    assert_eq!(resolved.id, user.id);
    assert_eq!(resolved.email, "jo@acme.edu");

    Ok(())
}

/// Tests an empty session.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn rejects_empty_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_identity_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests a session whose user no longer exists.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn rejects_session_for_missing_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_identity_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_user_id(42).await?;

    let result = AuthGuard::new(db, session).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(42)))
    ));

    Ok(())
}

/// Tests that clearing the session logs the user out.
///
/// Expected: no user id after clear
#[tokio::test]
async fn clear_removes_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_identity_tables()
        .build()
        .await
        .unwrap();
    let (_db, session) = test.db_and_session().await.unwrap();

    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(7).await?;
    assert_eq!(auth_session.get_user_id().await?, Some(7));

    auth_session.clear().await?;

    assert_eq!(auth_session.get_user_id().await?, None);

    Ok(())
}
