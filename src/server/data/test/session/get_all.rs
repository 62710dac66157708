use super::*;

/// Tests listing sessions newest first with reservation details.
///
/// Expected: Ok with sessions ordered by start time descending
#[tokio::test]
async fn lists_sessions_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let station = factory::create_console_station(db).await?;
    let client = factory::client::ClientFactory::new(db)
        .first_name("Grace")
        .last_name("Hopper")
        .build()
        .await?;
    let first = factory::create_reservation(db, station.id, &[client.id]).await?;
    let second = factory::create_reservation(db, station.id, &[client.id]).await?;
    let old = factory::play_session::SessionFactory::new(db, first.id)
        .started_at(Utc::now() - Duration::hours(5))
        .ended_at(Some(Utc::now() - Duration::hours(4)))
        .build()
        .await?;
    let recent = factory::create_session(db, second.id).await?;

    let repo = SessionRepository::new(db);
    let sessions = repo.get_all().await?;

    assert_eq!(sessions.len(), 2);
    assert_eq!(sessions[0].id, recent.id);
    assert_eq!(sessions[0].platform, "Console");
    assert_eq!(sessions[0].station_id, station.id);
    assert_eq!(sessions[0].client_names, vec!["Grace Hopper".to_string()]);
    assert_eq!(sessions[1].id, old.id);
    assert!(sessions[1].ended_at.is_some());

    let limited = repo.get_recent(1).await?;
    assert_eq!(limited.len(), 1);
    assert_eq!(limited[0].id, recent.id);

    Ok(())
}
