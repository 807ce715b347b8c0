use std::time::Duration;

use tictactoe::{
    Board, FlatRecord, GameDocument, GameSession, GameStore, GameUpdate, JsonFileStore, Mark,
    MoveStatus, Players, StoreError,
};

#[tokio::test]
async fn test_missing_file_reads_as_none() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let store = JsonFileStore::new(dir.path().join("game.json"));
    assert!(store.read().await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_document_shared_between_handles() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("game.json");
    let a = JsonFileStore::new(&path);
    let b = JsonFileStore::new(&path);

    let written = a.write(GameDocument::new_game(Players::hosted_by("alice"))).await?;
    assert_eq!(b.read().await?, Some(written));

    let board: Board = "..X/.../...".parse()?;
    let updated = b
        .update(GameUpdate {
            board: FlatRecord::from(&board),
            turn: Mark::O,
            winner: None,
            base_revision: 1,
        })
        .await?;
    assert_eq!(updated.revision, 2);
    assert_eq!(a.read().await?.unwrap().board()?, board);
    Ok(())
}

#[tokio::test]
async fn test_file_uses_document_field_names() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("game.json");
    let store = JsonFileStore::new(&path);
    store.write(GameDocument::new_game(Players::hosted_by("alice"))).await?;

    let json: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
    for field in ["board", "turn", "winner", "createdAt", "updatedAt", "players", "revision"] {
        assert!(json.get(field).is_some(), "missing {}", field);
    }
    assert_eq!(json["turn"], "X");
    assert!(json["winner"].is_null());
    assert_eq!(json["players"]["X"], "alice");
    assert!(json["players"]["O"].is_null());
    assert_eq!(json["board"].as_object().unwrap().len(), 9);
    Ok(())
}

#[tokio::test]
async fn test_stale_update_conflicts() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let store = JsonFileStore::new(dir.path().join("game.json"));
    store.write(GameDocument::new_game(Players::default())).await?;
    store.write(GameDocument::new_game(Players::default())).await?;

    let err = store
        .update(GameUpdate {
            board: FlatRecord::from(Board::new()),
            turn: Mark::O,
            winner: None,
            base_revision: 1,
        })
        .await
        .unwrap_err();
    assert_eq!(
        err.downcast_ref::<StoreError>(),
        Some(&StoreError::Conflict { expected: 1, actual: 2 })
    );
    Ok(())
}

#[tokio::test]
async fn test_update_without_file_fails() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let store = JsonFileStore::new(dir.path().join("game.json"));
    let err = store
        .update(GameUpdate {
            board: FlatRecord::from(Board::new()),
            turn: Mark::O,
            winner: None,
            base_revision: 0,
        })
        .await
        .unwrap_err();
    assert_eq!(err.downcast_ref::<StoreError>(), Some(&StoreError::NotFound));
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_polling_subscription_sees_changes() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("game.json");
    let writer = JsonFileStore::new(&path);
    let watcher = JsonFileStore::with_poll_interval(&path, Duration::from_millis(10));

    let first = writer.write(GameDocument::new_game(Players::default())).await?;
    let mut sub = watcher.subscribe().await?;
    let seen = tokio::time::timeout(Duration::from_secs(5), sub.next()).await??;
    assert_eq!(seen, first);

    let board: Board = "X../.../...".parse()?;
    let second = writer
        .update(GameUpdate {
            board: FlatRecord::from(&board),
            turn: Mark::O,
            winner: None,
            base_revision: first.revision,
        })
        .await?;
    let seen = tokio::time::timeout(Duration::from_secs(5), sub.next()).await??;
    assert_eq!(seen, second);
    Ok(())
}

async fn session_at(path: &std::path::Path, id: &str) -> anyhow::Result<GameSession<JsonFileStore>> {
    let store = JsonFileStore::with_poll_interval(path, Duration::from_millis(10));
    let mut session = GameSession::new(store, id);
    session.connect().await?;
    Ok(session)
}

#[tokio::test]
async fn test_reset_recovers_after_document_removed() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("game.json");
    let mut host = session_at(&path, "alice").await?;
    let mut guest = session_at(&path, "bob").await?;
    for (r, c) in [(0, 0), (1, 1), (2, 2)] {
        assert_eq!(host.handle_click(r, c).await?, MoveStatus::Applied);
    }
    assert_eq!(host.state().revision, 4);

    std::fs::remove_file(&path)?;
    host.reset().await?;
    let stored = host.store().read().await?.unwrap();
    assert_eq!(stored.revision, 1);
    assert_eq!(host.state().revision, 1);
    assert_eq!(host.state().board, Board::new());
    assert_eq!(host.handle_click(1, 1).await?, MoveStatus::Applied);

    // the other player follows the new game despite its lower revision
    guest.refresh().await?;
    guest.sync()?;
    assert_eq!(guest.state(), host.state());
    assert_eq!(guest.handle_click(0, 1).await?, MoveStatus::Applied);
    Ok(())
}

#[tokio::test]
async fn test_reset_recovers_from_unreadable_document() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("game.json");
    let mut session = session_at(&path, "alice").await?;
    session.handle_click(0, 0).await?;
    session.handle_click(0, 1).await?;

    std::fs::write(&path, "{ not json")?;
    session.reset().await?;
    assert_eq!(session.state().board, Board::new());
    assert_eq!(session.state().turn, Mark::X);
    assert_eq!(session.handle_click(2, 0).await?, MoveStatus::Applied);
    assert_eq!(session.state().board.get(2, 0)?, Some(Mark::X));
    Ok(())
}
