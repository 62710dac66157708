use super::*;

/// Tests switching a PC station to a console.
///
/// Verifies that the base row's platform changes, the PC satellite is removed and a
/// console satellite holding the new count replaces it.
///
/// Expected: Ok(Some) with exactly one satellite row, in `station_console`
#[tokio::test]
async fn flips_pc_station_to_console() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_station_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let station = factory::station::create_pc_station_with_config(db, "i7, RTX3070").await?;

    let repo = StationRepository::new(db);
    let updated = repo
        .update(station.id, StationKind::Console { controllers: 4 })
        .await?
        .unwrap();

    assert_eq!(updated.kind, StationKind::Console { controllers: 4 });
    assert_eq!(satellite_rows(db, station.id).await?, (0, 1));

    let base = entity::prelude::Station::find_by_id(station.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(base.platform, "Console");

    Ok(())
}

/// Tests switching a console station back to a PC.
///
/// Expected: Ok(Some) with the console data discarded and one PC satellite row
#[tokio::test]
async fn flips_console_station_to_pc() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_station_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let station = factory::station::create_console_station_with_controllers(db, 6).await?;

    let repo = StationRepository::new(db);
    repo.update(
        station.id,
        StationKind::Pc {
            config: "Ryzen 7".to_string(),
        },
    )
    .await?;

    assert_eq!(satellite_rows(db, station.id).await?, (1, 0));
    let loaded = repo.get_by_id(station.id).await?.unwrap();
    assert_eq!(
        loaded.kind,
        StationKind::Pc {
            config: "Ryzen 7".to_string()
        }
    );

    Ok(())
}

/// Tests updating a station without changing its platform.
///
/// Expected: Ok(Some) with the satellite replaced, still a single row
#[tokio::test]
async fn replaces_satellite_on_same_platform() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_station_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let station = factory::station::create_console_station(db).await?;

    let repo = StationRepository::new(db);
    let updated = repo
        .update(station.id, StationKind::Console { controllers: 8 })
        .await?
        .unwrap();

    assert_eq!(updated.kind, StationKind::Console { controllers: 8 });
    assert_eq!(satellite_rows(db, station.id).await?, (0, 1));

    Ok(())
}

/// Tests updating a station that does not exist.
///
/// Expected: Ok(None) and no satellite rows written
#[tokio::test]
async fn returns_none_for_missing_station() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_station_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StationRepository::new(db);
    let result = repo
        .update(
            999,
            StationKind::Pc {
                config: String::new(),
            },
        )
        .await?;

    assert!(result.is_none());
    assert_eq!(entity::prelude::StationPc::find().count(db).await?, 0);

    Ok(())
}

/// Tests that the reservation count survives an update.
///
/// Expected: Ok(Some) with reservation_count equal to existing reservations
#[tokio::test]
async fn keeps_reservation_count() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (station, _, _) = factory::helpers::create_reservation_with_dependencies(db).await?;

    let repo = StationRepository::new(db);
    let updated: Station = repo
        .update(station.id, StationKind::Console { controllers: 2 })
        .await?
        .unwrap();

    assert_eq!(updated.reservation_count, 1);

    Ok(())
}
