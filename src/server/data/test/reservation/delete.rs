use super::*;

/// Tests deleting a reservation removes its associations and closed session.
///
/// Expected: Ok(Deleted) with no reservation, association or session rows left
#[tokio::test]
async fn deletes_reservation_with_dependents() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, reservation) = factory::helpers::create_reservation_with_dependencies(db).await?;
    factory::play_session::SessionFactory::new(db, reservation.id)
        .started_at(Utc::now() - Duration::hours(1))
        .ended_at(Some(Utc::now()))
        .build()
        .await?;

    let repo = ReservationRepository::new(db);

    assert_eq!(repo.delete(reservation.id).await?, ReservationDeletion::Deleted);
    assert_eq!(entity::prelude::Reservation::find().count(db).await?, 0);
    assert_eq!(entity::prelude::ReservationClient::find().count(db).await?, 0);
    assert_eq!(entity::prelude::PlaySession::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Client::find().count(db).await?, 2);

    Ok(())
}

/// Tests deleting a reservation that does not exist.
///
/// Expected: Ok(NotFound)
#[tokio::test]
async fn returns_not_found_for_missing_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert_eq!(
        ReservationRepository::new(db).delete(7).await?,
        ReservationDeletion::NotFound
    );

    Ok(())
}

/// Tests deleting a reservation whose session is still in progress.
///
/// Verifies the check happens inside the delete itself, so nothing is removed even
/// when the caller never looked at the session first.
///
/// Expected: Ok(SessionActive) with the reservation, associations and session intact
#[tokio::test]
async fn keeps_reservation_with_active_session() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, reservation) = factory::helpers::create_reservation_with_dependencies(db).await?;
    factory::play_session::SessionFactory::new(db, reservation.id)
        .started_at(Utc::now() - Duration::minutes(5))
        .ended_at(None)
        .build()
        .await?;

    let repo = ReservationRepository::new(db);

    assert_eq!(
        repo.delete(reservation.id).await?,
        ReservationDeletion::SessionActive
    );
    assert_eq!(entity::prelude::Reservation::find().count(db).await?, 1);
    assert_eq!(entity::prelude::ReservationClient::find().count(db).await?, 2);
    assert_eq!(entity::prelude::PlaySession::find().count(db).await?, 1);

    Ok(())
}
