use super::*;

/// Tests creating a client.
///
/// Expected: Ok with all fields persisted and a reservation count of 0
#[tokio::test]
async fn creates_client() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClientRepository::new(db);
    let client = repo.create(params("ada@example.com")).await?;

    assert_eq!(client.last_name, "Lovelace");
    assert_eq!(client.first_name, "Ada");
    assert_eq!(client.phone.as_deref(), Some("0600000000"));
    assert_eq!(client.reservation_count, 0);

    let loaded = repo.get_by_id(client.id).await?.unwrap();
    assert_eq!(loaded.email, "ada@example.com");

    Ok(())
}

/// Tests that the unique index on email rejects duplicates.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClientRepository::new(db);
    repo.create(params("dup@example.com")).await?;
    let result = repo.create(params("dup@example.com")).await;

    assert!(result.is_err());

    Ok(())
}
