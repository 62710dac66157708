use super::*;

/// Tests deleting an unreferenced client.
///
/// Expected: Ok(true) and the client is gone
#[tokio::test]
async fn deletes_client() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::create_client(db).await?;

    let repo = ClientRepository::new(db);

    assert!(!repo.is_referenced(client.id).await?);
    assert!(repo.delete(client.id).await?);
    assert!(repo.get_by_id(client.id).await?.is_none());
    assert!(!repo.delete(client.id).await?);

    Ok(())
}

/// Tests that a client attached to a reservation is reported as referenced and
/// cannot be deleted.
///
/// Expected: is_referenced true, delete Err
#[tokio::test]
async fn refuses_to_delete_referenced_client() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, clients, _) = factory::helpers::create_reservation_with_dependencies(db).await?;

    let repo = ClientRepository::new(db);

    assert!(repo.is_referenced(clients[0].id).await?);
    assert!(repo.delete(clients[0].id).await.is_err());

    Ok(())
}
