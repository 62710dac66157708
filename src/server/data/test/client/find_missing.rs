use super::*;

/// Tests detecting unknown client IDs.
///
/// Expected: only the IDs without a client row, in input order
#[tokio::test]
async fn returns_unknown_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::create_client(db).await?;
    let b = factory::create_client(db).await?;

    let repo = ClientRepository::new(db);

    assert!(repo.find_missing(&[a.id, b.id]).await?.is_empty());
    assert_eq!(repo.find_missing(&[900, a.id, 901]).await?, vec![900, 901]);
    assert!(repo.find_missing(&[]).await?.is_empty());

    Ok(())
}
