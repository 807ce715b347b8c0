use tictactoe::{
    Board, FlatRecord, GameDocument, GameStore, GameUpdate, InMemoryStore, Mark, Players,
    StoreError,
};

fn move_update(board: &str, turn: Mark, base_revision: u64) -> GameUpdate {
    let board: Board = board.parse().unwrap();
    GameUpdate {
        board: FlatRecord::from(&board),
        turn,
        winner: board.winner(),
        base_revision,
    }
}

#[tokio::test]
async fn test_read_before_write_is_empty() -> anyhow::Result<()> {
    let store = InMemoryStore::new();
    assert!(store.read().await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_write_stamps_document() -> anyhow::Result<()> {
    let store = InMemoryStore::new();
    let doc = store.write(GameDocument::new_game(Players::hosted_by("alice"))).await?;
    assert_eq!(doc.revision, 1);
    assert_eq!(doc.created_at, doc.updated_at);
    assert_eq!(doc.players.get(Mark::X), Some("alice"));
    assert_eq!(doc.players.get(Mark::O), None);
    assert_eq!(store.read().await?, Some(doc.clone()));

    let again = store.write(GameDocument::new_game(Players::default())).await?;
    assert_eq!(again.revision, 2);
    Ok(())
}

#[tokio::test]
async fn test_update_changes_only_move_fields() -> anyhow::Result<()> {
    let store = InMemoryStore::new();
    let created = store.write(GameDocument::new_game(Players::hosted_by("alice"))).await?;
    let updated = store.update(move_update("X../.../...", Mark::O, 1)).await?;

    assert_eq!(updated.revision, 2);
    assert_eq!(updated.turn, Mark::O);
    assert_eq!(updated.board()?.get(0, 0)?, Some(Mark::X));
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);
    assert_eq!(updated.players, created.players);
    Ok(())
}

#[tokio::test]
async fn test_update_without_document_fails() {
    let store = InMemoryStore::new();
    let err = store.update(move_update("X../.../...", Mark::O, 0)).await.unwrap_err();
    assert_eq!(err.downcast_ref::<StoreError>(), Some(&StoreError::NotFound));
}

#[tokio::test]
async fn test_stale_update_conflicts() -> anyhow::Result<()> {
    let store = InMemoryStore::new();
    store.write(GameDocument::new_game(Players::default())).await?;
    store.update(move_update("X../.../...", Mark::O, 1)).await?;

    let err = store
        .update(move_update(".X./.../...", Mark::O, 1))
        .await
        .unwrap_err();
    assert_eq!(
        err.downcast_ref::<StoreError>(),
        Some(&StoreError::Conflict { expected: 1, actual: 2 })
    );
    let doc = store.read().await?.unwrap();
    assert_eq!(doc.board()?.get(0, 0)?, Some(Mark::X));
    assert_eq!(doc.board()?.get(0, 1)?, None);
    Ok(())
}

#[tokio::test]
async fn test_subscribers_get_current_and_new_snapshots() -> anyhow::Result<()> {
    let store = InMemoryStore::new();
    let first = store.write(GameDocument::new_game(Players::default())).await?;

    let mut sub = store.subscribe().await?;
    let other = store.clone();
    let mut late = other.subscribe().await?;
    assert_eq!(sub.next().await?, first);
    assert_eq!(late.next().await?, first);

    let second = other.update(move_update("X../.../...", Mark::O, 1)).await?;
    assert_eq!(sub.next().await?, second);
    assert_eq!(late.next().await?, second);
    assert!(sub.try_next().is_none());
    Ok(())
}

#[tokio::test]
async fn test_dropped_subscribers_are_pruned() -> anyhow::Result<()> {
    let store = InMemoryStore::new();
    let sub = store.subscribe().await?;
    assert_eq!(store.subscriber_count().await, 1);
    drop(sub);
    store.write(GameDocument::new_game(Players::default())).await?;
    assert_eq!(store.subscriber_count().await, 0);
    Ok(())
}
