use super::*;

/// Tests listing stations with satellite data and reservation counts.
///
/// Expected: Ok with stations ordered by ID, counts matching reservations
#[tokio::test]
async fn lists_stations_with_counts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pc = factory::station::create_pc_station_with_config(db, "i5").await?;
    let console = factory::station::create_console_station_with_controllers(db, 3).await?;
    let client = factory::create_client(db).await?;
    factory::create_reservation(db, pc.id, &[client.id]).await?;
    factory::create_reservation(db, pc.id, &[client.id]).await?;

    let repo = StationRepository::new(db);
    let stations = repo.get_all().await?;

    assert_eq!(stations.len(), 2);
    assert_eq!(stations[0].id, pc.id);
    assert_eq!(
        stations[0].kind,
        StationKind::Pc {
            config: "i5".to_string()
        }
    );
    assert_eq!(stations[0].reservation_count, 2);
    assert_eq!(stations[1].id, console.id);
    assert_eq!(stations[1].kind, StationKind::Console { controllers: 3 });
    assert_eq!(stations[1].reservation_count, 0);

    Ok(())
}

/// Tests listing when no stations exist.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stations = StationRepository::new(db).get_all().await?;

    assert!(stations.is_empty());

    Ok(())
}
