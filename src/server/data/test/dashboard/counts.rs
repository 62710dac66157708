use super::*;

/// Tests totals and "today" counts.
///
/// Reservations and sessions are placed inside and outside the queried day window.
///
/// Expected: Ok with counts restricted to the window where applicable
#[tokio::test]
async fn counts_rows_and_today_activity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let day_start = Utc::now() - Duration::hours(1);
    let day_end = day_start + Duration::days(1);

    let station = factory::create_pc_station(db).await?;
    factory::create_console_station(db).await?;
    let client = factory::create_client(db).await?;

    let today = factory::reservation::ReservationFactory::new(db, station.id, &[client.id])
        .scheduled_at(day_start + Duration::minutes(30))
        .build()
        .await?;
    let past = factory::reservation::ReservationFactory::new(db, station.id, &[client.id])
        .scheduled_at(day_start - Duration::days(2))
        .build()
        .await?;
    factory::reservation::ReservationFactory::new(db, station.id, &[client.id])
        .scheduled_at(day_end + Duration::hours(1))
        .build()
        .await?;

    factory::play_session::SessionFactory::new(db, today.id)
        .started_at(day_start + Duration::minutes(31))
        .build()
        .await?;
    factory::play_session::SessionFactory::new(db, past.id)
        .started_at(day_start - Duration::days(2))
        .ended_at(Some(day_start - Duration::days(2) + Duration::hours(1)))
        .build()
        .await?;

    let counts = DashboardRepository::new(db)
        .counts(day_start, day_end)
        .await?;

    assert_eq!(counts.total_clients, 1);
    assert_eq!(counts.total_stations, 2);
    assert_eq!(counts.total_reservations, 3);
    assert_eq!(counts.active_sessions, 1);
    assert_eq!(counts.today_reservations, 1);
    assert_eq!(counts.today_sessions, 1);

    Ok(())
}
