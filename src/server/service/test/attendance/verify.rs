use super::*;

/// Tests the check-in scenario for one registration.
///
/// Verifies that scanning at the wrong event is a mismatch, scanning at the right event
/// checks the attendee in, and scanning again reports the original check-in with the
/// attendee's name.
///
/// Expected: EventMismatch, then Ok, then AlreadyAttended; one attendance record
#[tokio::test]
async fn mismatch_then_check_in_then_repeat() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let qr_tokens = QrTokenService::new(b"test-secret");

    let (organization, organizer, event) =
        factory::helpers::create_event_with_dependencies(db).await?;
    let other_event = factory::create_event(db, organizer.id, organization.id).await?;
    let student = factory::user::UserFactory::new(db, organization.id)
        .first_name("Jo")
        .last_name("Lee")
        .email("jo@acme.edu")
        .build()
        .await?;

    let registration = RegistrationService::new(db, &qr_tokens)
        .register(event.id, student.id)
        .await?;
    let service = AttendanceService::new(db, &qr_tokens);

    let mismatch = service.verify(&registration.qr_code, other_event.id).await;
    assert!(matches!(
        mismatch,
        Err(AppError::AttendanceErr(AttendanceError::EventMismatch { .. }))
    ));

    let check_in = service.verify(&registration.qr_code, event.id).await?;
    assert_eq!(check_in.name, "Jo Lee");
    assert_eq!(check_in.email, "jo@acme.edu");

    let repeat = service.verify(&registration.qr_code, event.id).await;
    match repeat {
        Err(AppError::AttendanceErr(AttendanceError::AlreadyAttended(original))) => {
            assert_eq!(original.name, "Jo Lee");
            assert_eq!(original.email, "jo@acme.edu");
        }
        other => panic!("expected AlreadyAttended, got {:?}", other),
    }

    assert_eq!(
        factory::attendance::count_for_event(db, event.id).await?,
        1
    );

    Ok(())
}

/// Tests scanning a forged or malformed code.
///
/// Expected: Err(InvalidToken), nothing recorded
#[tokio::test]
async fn rejects_invalid_tokens() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let qr_tokens = QrTokenService::new(b"test-secret");

    let (event, student, _registration) =
        factory::helpers::create_registration_with_dependencies(db).await?;

    let forged = QrTokenService::new(b"someone-else").issue(&QrClaims {
        event_id: event.id,
        user_id: student.id,
        issued_at: Utc::now(),
    })?;

    let service = AttendanceService::new(db, &qr_tokens);
    for token in [forged.as_str(), "garbage", ""] {
        assert!(matches!(
            service.verify(token, event.id).await,
            Err(AppError::AttendanceErr(AttendanceError::InvalidToken(_)))
        ));
    }

    assert_eq!(
        factory::attendance::count_for_event(db, event.id).await?,
        0
    );

    Ok(())
}

/// Tests a validly signed token whose user no longer exists.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_token_for_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let qr_tokens = QrTokenService::new(b"test-secret");

    let (_organization, _organizer, event) =
        factory::helpers::create_event_with_dependencies(db).await?;

    let token = qr_tokens.issue(&QrClaims {
        event_id: event.id,
        user_id: 9999,
        issued_at: Utc::now(),
    })?;

    let result = AttendanceService::new(db, &qr_tokens)
        .verify(&token, event.id)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests two simultaneous scans of the same code.
///
/// Whichever scan loses, by the pre-check or by the unique index, reports the winning
/// check-in with the attendee's name.
///
/// Expected: one Ok, one AlreadyAttended naming the attendee; one attendance record
#[tokio::test]
async fn concurrent_scans_record_one_check_in() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let qr_tokens = QrTokenService::new(b"test-secret");

    let (organization, _organizer, event) =
        factory::helpers::create_event_with_dependencies(db).await?;
    let student = factory::user::UserFactory::new(db, organization.id)
        .first_name("Jo")
        .last_name("Lee")
        .build()
        .await?;

    let registration = RegistrationService::new(db, &qr_tokens)
        .register(event.id, student.id)
        .await?;
    let service = AttendanceService::new(db, &qr_tokens);

    let (first, second) = tokio::join!(
        service.verify(&registration.qr_code, event.id),
        service.verify(&registration.qr_code, event.id)
    );

    let (check_in, repeat) = match (first, second) {
        (Ok(check_in), Err(repeat)) | (Err(repeat), Ok(check_in)) => (check_in, repeat),
        (first, second) => panic!("expected one success, got {:?} and {:?}", first, second),
    };

    assert_eq!(check_in.name, "Jo Lee");
    match repeat {
        AppError::AttendanceErr(AttendanceError::AlreadyAttended(original)) => {
            assert_eq!(original.name, "Jo Lee");
            assert_eq!(original.email, check_in.email);
        }
        other => panic!("expected AlreadyAttended, got {:?}", other),
    }

    assert_eq!(
        factory::attendance::count_for_event(db, event.id).await?,
        1
    );

    Ok(())
}
