use std::env;
use std::process::ExitCode;

use chess_rules::game::Game;

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() <= 1 {
        eprintln!("usage: check_mate_status <move1> <move2> ...");
        return ExitCode::FAILURE;
    }

    let mut game = Game::new();
    for text in args.iter().skip(1) {
        if let Err(err) = game.apply_move(text) {
            eprintln!("{text}: {err}");
            return ExitCode::FAILURE;
        }
    }

    let legal_moves = game.legal_moves();
    println!("side_to_move: {}", game.current_turn());
    println!("legal_moves: {}", legal_moves.len());
    println!("check_status: {:?}", game.check_status());
    println!("game_status: {}", game.game_status());
    for mv in &legal_moves {
        println!("{}", game.describe(*mv));
    }
    ExitCode::SUCCESS
}
