use std::io::{self, BufRead, Write};

use chrono::Local;
use log::info;

use quince_chess::game::Game;
use quince_chess::utils::algebraic::{coords_to_square, square_to_coords};
use quince_chess::utils::render_board::render_board;

fn main() {
    env_logger::init();

    let mut game = Game::new();
    println!(
        "quince_chess session started {}",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    println!("commands: a move like e2e4, moves <square>, san, new, quit");
    print_board(&game);

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush().ok();

        line.clear();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        if input == "quit" {
            break;
        } else if input == "new" {
            game.reset();
            print_board(&game);
        } else if input == "san" {
            match game.san_history() {
                Ok(san) if san.is_empty() => println!("(no moves yet)"),
                Ok(san) => println!("{san}"),
                Err(err) => println!("error: {err}"),
            }
        } else if let Some(coords) = input.strip_prefix("moves ") {
            print_moves(&game, coords.trim());
        } else {
            match game.play_lan(input) {
                Ok(applied) => {
                    info!("applied {input}: {applied:?}");
                    if applied.castling {
                        println!("castled");
                    }
                    if applied.capture {
                        println!("capture");
                    }
                    if applied.promotion {
                        println!("promotion");
                    }
                    print_board(&game);
                }
                Err(err) => println!("error: {err}"),
            }
        }
    }
}

fn print_moves(game: &Game, coords: &str) {
    let square = match coords_to_square(coords) {
        Ok(square) => square,
        Err(err) => {
            println!("error: {err}");
            return;
        }
    };
    match game.board().legal_moves(square) {
        Ok(moves) if moves.is_empty() => println!("(no legal moves)"),
        Ok(moves) => {
            let targets: Vec<String> =
                moves.iter().map(|mv| square_to_coords(mv.to)).collect();
            println!("{}", targets.join(" "));
        }
        Err(err) => println!("error: {err}"),
    }
}

fn print_board(game: &Game) {
    println!("{}", render_board(game.board()));
    println!("{:?} to move", game.next_player());
}
