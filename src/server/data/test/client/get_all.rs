use super::*;

/// Tests listing clients sorted by name with reservation counts.
///
/// Expected: Ok with clients ordered by last name and correct counts
#[tokio::test]
async fn lists_clients_sorted_with_counts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let turing = factory::client::ClientFactory::new(db)
        .last_name("Turing")
        .first_name("Alan")
        .build()
        .await?;
    let hopper = factory::client::ClientFactory::new(db)
        .last_name("Hopper")
        .first_name("Grace")
        .build()
        .await?;
    let station = factory::create_pc_station(db).await?;
    factory::create_reservation(db, station.id, &[turing.id, hopper.id]).await?;
    factory::create_reservation(db, station.id, &[turing.id]).await?;

    let clients = ClientRepository::new(db).get_all().await?;

    assert_eq!(clients.len(), 2);
    assert_eq!(clients[0].last_name, "Hopper");
    assert_eq!(clients[0].reservation_count, 1);
    assert_eq!(clients[1].last_name, "Turing");
    assert_eq!(clients[1].reservation_count, 2);

    Ok(())
}
