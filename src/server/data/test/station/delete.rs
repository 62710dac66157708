use super::*;

/// Tests deleting a station removes its satellite.
///
/// Expected: Ok(true) with no base or satellite rows left
#[tokio::test]
async fn deletes_station_and_satellite() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_station_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let station = factory::station::create_pc_station(db).await?;

    let repo = StationRepository::new(db);
    let deleted = repo.delete(station.id).await?;

    assert!(deleted);
    assert!(repo.get_by_id(station.id).await?.is_none());
    assert_eq!(satellite_rows(db, station.id).await?, (0, 0));

    Ok(())
}

/// Tests deleting a station that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_station() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_station_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StationRepository::new(db);

    assert!(!repo.delete(42).await?);

    Ok(())
}

/// Tests that a station referenced by a reservation cannot be deleted.
///
/// The foreign key from `reservation` restricts deletion; the failed transaction must
/// also leave the satellite row in place.
///
/// Expected: Err, with the station and its satellite intact
#[tokio::test]
async fn refuses_to_delete_reserved_station() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (station, _, _) = factory::helpers::create_reservation_with_dependencies(db).await?;

    let repo = StationRepository::new(db);
    let result = repo.delete(station.id).await;

    assert!(result.is_err());
    assert!(repo.get_by_id(station.id).await?.is_some());
    assert_eq!(satellite_rows(db, station.id).await?, (1, 0));

    Ok(())
}
