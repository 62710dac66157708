use super::*;

/// Tests starting a session for a reservation without one.
///
/// Expected: Ok(Some) with ended_at unset
#[tokio::test]
async fn starts_session() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, reservation) = factory::helpers::create_reservation_with_dependencies(db).await?;
    let now = Utc::now();

    let session = SessionRepository::new(db)
        .start(reservation.id, now)
        .await?
        .unwrap();

    assert_eq!(session.reservation_id, reservation.id);
    assert_eq!(session.started_at, now);
    assert!(session.ended_at.is_none());

    Ok(())
}

/// Tests starting a second session for the same reservation.
///
/// Expected: Ok(None), exactly one session row remains
#[tokio::test]
async fn refuses_second_session() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, reservation) = factory::helpers::create_reservation_with_dependencies(db).await?;

    let repo = SessionRepository::new(db);
    assert!(repo.start(reservation.id, Utc::now()).await?.is_some());
    assert!(repo.start(reservation.id, Utc::now()).await?.is_none());

    let sessions = entity::prelude::PlaySession::find().all(db).await?;
    assert_eq!(sessions.len(), 1);

    Ok(())
}

/// Tests that the unique index rejects a duplicate session written behind the check.
///
/// Expected: Err classified as a unique constraint violation
#[tokio::test]
async fn unique_index_rejects_duplicate_session() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, reservation) = factory::helpers::create_reservation_with_dependencies(db).await?;
    factory::create_session(db, reservation.id).await?;

    let result = factory::create_session(db, reservation.id).await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
