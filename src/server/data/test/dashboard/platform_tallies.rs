use super::*;

/// Tests per-platform tallies, including a platform with no stations.
///
/// Expected: Ok with PC first and Console reported with zero counts
#[tokio::test]
async fn tallies_every_platform() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_pc_station(db).await?;
    factory::create_pc_station(db).await?;
    let client = factory::create_client(db).await?;
    factory::create_reservation(db, first.id, &[client.id]).await?;
    factory::create_reservation(db, first.id, &[client.id]).await?;

    let tallies = DashboardRepository::new(db).platform_tallies().await?;

    assert_eq!(tallies.len(), 2);
    assert_eq!(tallies[0].platform, Platform::Pc);
    assert_eq!(tallies[0].stations, 2);
    assert_eq!(tallies[0].reservations, 2);
    assert_eq!(tallies[1].platform, Platform::Console);
    assert_eq!(tallies[1].stations, 0);
    assert_eq!(tallies[1].reservations, 0);

    Ok(())
}

/// Tests that reservations are attributed to the platform of their station.
///
/// Verifies grouped counts stay separate when both platforms hold stations and bookings.
///
/// Expected: Ok with PC 1 station / 1 reservation and Console 2 stations / 3 reservations
#[tokio::test]
async fn tallies_reservations_by_station_platform() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pc = factory::create_pc_station(db).await?;
    let first_console = factory::create_console_station(db).await?;
    let second_console = factory::create_console_station(db).await?;
    let client = factory::create_client(db).await?;
    factory::create_reservation(db, pc.id, &[client.id]).await?;
    factory::create_reservation(db, first_console.id, &[client.id]).await?;
    factory::create_reservation(db, first_console.id, &[client.id]).await?;
    factory::create_reservation(db, second_console.id, &[client.id]).await?;

    let tallies = DashboardRepository::new(db).platform_tallies().await?;

    assert_eq!(tallies[0].platform, Platform::Pc);
    assert_eq!(tallies[0].stations, 1);
    assert_eq!(tallies[0].reservations, 1);
    assert_eq!(tallies[1].platform, Platform::Console);
    assert_eq!(tallies[1].stations, 2);
    assert_eq!(tallies[1].reservations, 3);

    Ok(())
}
