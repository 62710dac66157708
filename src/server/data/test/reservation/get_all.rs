use super::*;

/// Tests listing reservations with details, latest scheduled first.
///
/// Expected: Ok with reservations in descending scheduled order, the session of the
/// started one attached
#[tokio::test]
async fn lists_reservations_with_details() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let station = factory::create_pc_station(db).await?;
    let client = factory::create_client(db).await?;
    let earlier = factory::reservation::ReservationFactory::new(db, station.id, &[client.id])
        .scheduled_at(Utc::now() - Duration::hours(3))
        .build()
        .await?;
    let later = factory::reservation::ReservationFactory::new(db, station.id, &[client.id])
        .scheduled_at(Utc::now() + Duration::hours(3))
        .build()
        .await?;
    let session = factory::create_session(db, earlier.id).await?;

    let reservations = ReservationRepository::new(db).get_all().await?;

    assert_eq!(reservations.len(), 2);
    assert_eq!(reservations[0].id, later.id);
    assert!(reservations[0].session.is_none());
    assert_eq!(reservations[1].id, earlier.id);
    assert_eq!(reservations[1].platform, "PC");
    assert_eq!(reservations[1].client_names.len(), 1);
    let attached = reservations[1].session.as_ref().unwrap();
    assert_eq!(attached.id, session.id);
    assert!(attached.ended_at.is_none());

    Ok(())
}

/// Tests fetching a single reservation.
///
/// Expected: Some for an existing ID, None otherwise
#[tokio::test]
async fn gets_reservation_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, clients, reservation) =
        factory::helpers::create_reservation_with_dependencies(db).await?;

    let repo = ReservationRepository::new(db);
    let found = repo.get_by_id(reservation.id).await?.unwrap();

    assert_eq!(found.client_names.len(), clients.len());
    assert!(repo.get_by_id(reservation.id + 100).await?.is_none());

    Ok(())
}
