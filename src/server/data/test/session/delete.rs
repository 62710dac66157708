use super::*;

/// Tests deleting a session returns its reservation to the no-session state.
///
/// Expected: Ok(true), then a new session can be started for the reservation
#[tokio::test]
async fn deletes_session_and_allows_restart() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, reservation, session) =
        factory::helpers::create_session_with_dependencies(db).await?;

    let repo = SessionRepository::new(db);

    assert!(repo.delete(session.id).await?);
    assert!(repo.find_by_reservation(reservation.id).await?.is_none());
    assert!(entity::prelude::Reservation::find_by_id(reservation.id)
        .one(db)
        .await?
        .is_some());
    assert!(repo.start(reservation.id, Utc::now()).await?.is_some());
    assert!(!repo.delete(session.id).await?);

    Ok(())
}
