use std::env;

use log::info;
use rand::prelude::*;

use chess_rules::game::{Game, GameStatus};

const DEFAULT_MAX_PLIES: usize = 300;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = args
        .get(1)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or_else(|| thread_rng().gen());
    let max_plies = args
        .get(2)
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(DEFAULT_MAX_PLIES);

    info!("random game with seed {seed}, at most {max_plies} plies");
    let mut rng = StdRng::seed_from_u64(seed);
    let mut game = Game::new();

    for ply in 1..=max_plies {
        let moves = game.legal_moves();
        let Some(&mv) = moves.choose(&mut rng) else {
            // No legal move and no mate: stalemate, which this engine does not score.
            println!("{ply}. {} has no legal moves", game.current_turn());
            break;
        };
        let text = game.describe(mv);
        match game.play(mv) {
            Ok(played) => println!("{ply}. {}: {text} ({:?})", played.mover, played.check),
            Err(err) => {
                eprintln!("{text}: {err}");
                break;
            }
        }
        if game.game_status() != GameStatus::Incomplete {
            break;
        }
    }

    println!("seed: {seed}");
    println!("result: {}", game.game_status());
}
