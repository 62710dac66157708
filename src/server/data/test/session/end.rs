use super::*;

/// Tests ending an active session.
///
/// Expected: Ok(true) with ended_at stored
#[tokio::test]
async fn ends_active_session() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, session) = factory::helpers::create_session_with_dependencies(db).await?;
    let end = Utc::now() + Duration::minutes(30);

    let repo = SessionRepository::new(db);

    assert!(repo.end(session.id, end).await?);
    let stored = repo.find_by_id(session.id).await?.unwrap();
    assert_eq!(stored.ended_at, Some(end));

    Ok(())
}

/// Tests that ending a closed session leaves the first end time untouched.
///
/// Expected: Ok(false) on the second call, ended_at unchanged
#[tokio::test]
async fn does_not_overwrite_end_time() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, session) = factory::helpers::create_session_with_dependencies(db).await?;
    let first = Utc::now() + Duration::minutes(10);
    let second = first + Duration::minutes(10);

    let repo = SessionRepository::new(db);

    assert!(repo.end(session.id, first).await?);
    assert!(!repo.end(session.id, second).await?);
    let stored = repo.find_by_id(session.id).await?.unwrap();
    assert_eq!(stored.ended_at, Some(first));

    Ok(())
}

/// Tests ending a session that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_session() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!SessionRepository::new(db).end(12, Utc::now()).await?);

    Ok(())
}
