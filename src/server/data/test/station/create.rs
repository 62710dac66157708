use super::*;

/// Tests creating a PC station.
///
/// Verifies that the repository writes the base row with platform "PC" and a single
/// `station_pc` row holding the configuration, and nothing in `station_console`.
///
/// Expected: Ok with one PC satellite row
#[tokio::test]
async fn creates_pc_station_with_satellite() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_station_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StationRepository::new(db);
    let station = repo
        .create(StationKind::Pc {
            config: "i7, RTX3070".to_string(),
        })
        .await?;

    assert_eq!(
        station.kind,
        StationKind::Pc {
            config: "i7, RTX3070".to_string()
        }
    );
    assert_eq!(station.reservation_count, 0);

    let base = entity::prelude::Station::find_by_id(station.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(base.platform, "PC");
    assert_eq!(satellite_rows(db, station.id).await?, (1, 0));

    Ok(())
}

/// Tests creating a console station.
///
/// Verifies that the controller count lands in `station_console` and that reading the
/// station back yields the same variant.
///
/// Expected: Ok with one console satellite row
#[tokio::test]
async fn creates_console_station_with_satellite() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_station_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StationRepository::new(db);
    let station = repo.create(StationKind::Console { controllers: 4 }).await?;

    assert_eq!(satellite_rows(db, station.id).await?, (0, 1));

    let loaded = repo.get_by_id(station.id).await?.unwrap();
    assert_eq!(loaded.kind, StationKind::Console { controllers: 4 });

    Ok(())
}

/// Tests that a failing satellite insert rolls back the base row.
///
/// The schema is built without the `station_pc` table so the second insert of the unit
/// of work fails after the base row was written.
///
/// Expected: Err, and no station row persisted
#[tokio::test]
async fn rolls_back_base_row_when_satellite_insert_fails() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Station)
        .with_table(entity::prelude::StationConsole)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StationRepository::new(db);
    let result = repo
        .create(StationKind::Pc {
            config: String::new(),
        })
        .await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::Station::find().count(db).await?, 0);

    Ok(())
}
