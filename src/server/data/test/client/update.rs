use super::*;

/// Tests updating a client's fields.
///
/// Expected: Ok(Some) with the new values
#[tokio::test]
async fn updates_client() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_client(db).await?;

    let repo = ClientRepository::new(db);
    let updated = repo
        .update(existing.id, params("new@example.com"))
        .await?
        .unwrap();

    assert_eq!(updated.id, existing.id);
    assert_eq!(updated.email, "new@example.com");
    assert_eq!(updated.first_name, "Ada");

    Ok(())
}

/// Tests updating a client that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_client() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ClientRepository::new(db)
        .update(404, params("ghost@example.com"))
        .await?;

    assert!(result.is_none());

    Ok(())
}
