use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;
use tictactoe::{AiPlayer, FlatRecord, GameSession, InMemoryStore, Mark, PlayerNode};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    let mut rng1 = SmallRng::seed_from_u64(seed1);
    let mut rng2 = SmallRng::seed_from_u64(seed2);

    let store = InMemoryStore::new();
    let mut s1 = GameSession::new(store.clone(), "player1");
    let mut s2 = GameSession::new(store, "player2");
    s1.connect().await?;
    s2.connect().await?;

    let f1 = async move {
        let mut node = PlayerNode::new(s1).with_player(Mark::X, Box::new(AiPlayer::new()));
        let winner = node.run(&mut rng1).await?;
        Ok::<_, anyhow::Error>((winner, node.move_count(), node.session().state()))
    };

    let f2 = async move {
        let mut node = PlayerNode::new(s2).with_player(Mark::O, Box::new(AiPlayer::new()));
        node.run(&mut rng2).await?;
        Ok::<_, anyhow::Error>(node.move_count())
    };

    let ((winner, moves1, state), moves2) = tokio::try_join!(f1, f2)?;

    let result = json!({
        "winner": winner.map(|w| w.to_string()),
        "moves": moves1 + moves2,
        "board": FlatRecord::from(&state.board),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
