use super::*;

/// Tests creating a reservation with several clients.
///
/// Verifies that one association row is written per client and that the returned view
/// carries the station platform and client names.
///
/// Expected: Ok with two association rows
#[tokio::test]
async fn creates_reservation_with_clients() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let station = factory::create_console_station(db).await?;
    let ada = factory::client::ClientFactory::new(db)
        .first_name("Ada")
        .last_name("Lovelace")
        .build()
        .await?;
    let alan = factory::client::ClientFactory::new(db)
        .first_name("Alan")
        .last_name("Turing")
        .build()
        .await?;
    let scheduled_at = Utc::now() + Duration::days(1);

    let repo = ReservationRepository::new(db);
    let reservation = repo
        .create(NewReservation {
            scheduled_at,
            station_id: station.id,
            client_ids: vec![ada.id, alan.id],
        })
        .await?;

    assert_eq!(reservation.station_id, station.id);
    assert_eq!(reservation.platform, "Console");
    assert_eq!(
        reservation.client_names,
        vec!["Ada Lovelace".to_string(), "Alan Turing".to_string()]
    );
    assert!(reservation.session.is_none());

    let links = entity::prelude::ReservationClient::find()
        .filter(entity::reservation_client::Column::ReservationId.eq(reservation.id))
        .count(db)
        .await?;
    assert_eq!(links, 2);

    Ok(())
}

/// Tests that a failing association insert rolls back the reservation.
///
/// An unknown client ID violates the foreign key on `reservation_client` after the
/// reservation row was already written.
///
/// Expected: Err, with no reservation or association rows persisted
#[tokio::test]
async fn rolls_back_when_association_fails() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let station = factory::create_pc_station(db).await?;
    let client = factory::create_client(db).await?;

    let repo = ReservationRepository::new(db);
    let result = repo
        .create(NewReservation {
            scheduled_at: Utc::now(),
            station_id: station.id,
            client_ids: vec![client.id, 9999],
        })
        .await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::Reservation::find().count(db).await?, 0);
    assert_eq!(entity::prelude::ReservationClient::find().count(db).await?, 0);

    Ok(())
}
