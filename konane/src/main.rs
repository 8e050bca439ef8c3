use konane_agents::{alpha_beta, choose_move, minimax, Player, PlayerError};
use konane_core::{
    first_moves_o, first_moves_x, is_initial_move, legal_moves, Board, Coord, Move, Side,
};
use std::env;
use std::io::{self, Write};

fn display_board(board: &Board) {
    println!();
    print!("{board}");
    println!();
}

/// Parses a human move: `r c` removes the stone at (r,c) during the
/// opening, `r1 c1 r2 c2` jumps from (r1,c1) to (r2,c2). Commas are
/// accepted as separators.
fn parse_human_move(input: &str) -> Option<Move> {
    let fields: Vec<u8> = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|f| !f.is_empty())
        .map(str::parse)
        .collect::<Result<_, _>>()
        .ok()?;

    match fields[..] {
        [r, c] => Some(Move::removal(Coord::new(r, c))),
        [r1, c1, r2, c2] => Some(Move::new(Coord::new(r1, c1), Coord::new(r2, c2))),
        _ => None,
    }
}

/// The moves currently open to `side`, honoring the opening protocol.
fn available_moves(board: &Board, side: Side) -> Vec<Move> {
    if is_initial_move(board) {
        match side {
            Side::X => first_moves_x(board),
            Side::O => first_moves_o(board),
        }
    } else {
        legal_moves(board, side)
    }
}

/// Reads moves from stdin until one of them is legal for `side`.
/// Returns None if the player quits.
fn read_human_move(board: &Board, side: Side) -> Option<Move> {
    let legal = available_moves(board, side);
    loop {
        if is_initial_move(board) {
            print!("{side} to remove a stone (row col): ");
        } else {
            print!("{side} to move (row col row col): ");
        }
        io::stdout().flush().ok()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            return None;
        }
        let input = input.trim();

        match input {
            "quit" => return None,
            "moves" => {
                for mv in &legal {
                    println!("  {mv}");
                }
                continue;
            }
            _ => {}
        }

        match parse_human_move(input) {
            Some(mv) if legal.contains(&mv) => return Some(mv),
            Some(_) => println!("Illegal move. Enter `moves` to list your options."),
            None => println!("Could not parse that. Example: 2 0 0 0 (or `quit`)."),
        }
    }
}

/// One turn for `player`. Returns the move made, or None when the game
/// is over (no move available) or a human quit.
fn take_turn(board: &Board, player: &Player, interactive: bool) -> Option<Move> {
    match choose_move(player, board) {
        Ok(mv) => mv,
        Err(PlayerError::Unsupported) if interactive => read_human_move(board, player.side()),
        Err(e) => {
            eprintln!("Error: {e}");
            None
        }
    }
}

/// Plays one full game and returns the winner, printing the board and
/// moves as it goes when `interactive`.
fn play_game(x_player: &Player, o_player: &Player, interactive: bool) -> Side {
    let mut board = Board::standard();
    let mut turn = Side::X;

    loop {
        if interactive {
            display_board(&board);
        }

        // A side with no move on its turn loses. The opening removals
        // are always available, so only regular turns can end the game.
        if !is_initial_move(&board) && legal_moves(&board, turn).is_empty() {
            return turn.opponent();
        }

        let player = match turn {
            Side::X => x_player,
            Side::O => o_player,
        };

        let Some(mv) = take_turn(&board, player, interactive) else {
            // No move produced: the side to move forfeits.
            return turn.opponent();
        };

        if interactive {
            println!("{turn} plays {mv}");
        }
        board = board.apply_move(mv);
        turn = turn.opponent();
    }
}

fn make_player(code: &str, side: Side, depth: Option<u8>) -> Option<Player> {
    match Player::from_code(code, side, depth) {
        Ok(player) => Some(player),
        Err(e) => {
            eprintln!("Error: {e}");
            None
        }
    }
}

fn cmd_play(args: &[String]) {
    let x_code = args.first().map(String::as_str).unwrap_or("h");
    let o_code = args.get(1).map(String::as_str).unwrap_or("a");
    let depth = args.get(2).and_then(|d| d.parse().ok());

    let Some(x_player) = make_player(x_code, Side::X, depth) else {
        return;
    };
    let Some(o_player) = make_player(o_code, Side::O, depth) else {
        return;
    };

    println!("Konane: {x_player} (x) vs {o_player} (o)");
    let winner = play_game(&x_player, &o_player, true);
    println!("\n{winner} wins!");
}

fn cmd_match(args: &[String]) {
    let Some(games) = args.first().and_then(|g| g.parse::<u32>().ok()) else {
        println!("Usage: konane match <games> <x-type> <o-type> [depth]");
        return;
    };
    let x_code = args.get(1).map(String::as_str).unwrap_or("r");
    let o_code = args.get(2).map(String::as_str).unwrap_or("a");
    let depth = args.get(3).and_then(|d| d.parse().ok());

    let Some(x_player) = make_player(x_code, Side::X, depth) else {
        return;
    };
    let Some(o_player) = make_player(o_code, Side::O, depth) else {
        return;
    };
    if matches!(x_player, Player::Human { .. }) || matches!(o_player, Player::Human { .. }) {
        eprintln!("Error: human players cannot play in match mode");
        return;
    }

    let mut x_wins = 0u32;
    for game in 1..=games {
        let winner = play_game(&x_player, &o_player, false);
        if winner == Side::X {
            x_wins += 1;
        }
        println!("Game {game}: {winner} wins");
    }

    println!(
        "\n{x_player} (x) {x_wins} - {} {o_player} (o)",
        games - x_wins
    );
}

fn cmd_search(args: &[String]) {
    let Some(depth) = args.first().and_then(|d| d.parse::<u8>().ok()) else {
        println!("Usage: konane search <depth> [side] [board-text]");
        return;
    };
    let side = args
        .get(1)
        .and_then(|s| s.chars().next())
        .and_then(Side::from_char)
        .unwrap_or(Side::X);

    let board = if let Some(text) = args.get(2) {
        match Board::from_text(text) {
            Ok(board) => board,
            Err(e) => {
                eprintln!("Error parsing board: {e}");
                return;
            }
        }
    } else {
        // Standard board after the conventional corner opening.
        let board = Board::standard().apply_move(Move::removal(Coord::new(0, 0)));
        match first_moves_o(&board).first() {
            Some(&answer) => board.apply_move(answer),
            None => board,
        }
    };

    display_board(&board);
    println!("Searching to depth {depth} for {side}...\n");

    for (name, result) in [
        ("minimax   ", minimax(&board, side, depth)),
        ("alpha-beta", alpha_beta(&board, side, depth)),
    ] {
        match result.best_move {
            Some(mv) => println!(
                "{name}  move {mv}  score {}  nodes {}",
                result.score, result.nodes
            ),
            None => println!("{name}  no move available  score {}", result.score),
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("play") => cmd_play(&args[2..]),
        Some("match") => cmd_match(&args[2..]),
        Some("search") => cmd_search(&args[2..]),
        _ => {
            println!("Konane engine");
            println!("Commands:");
            println!("  play [x-type] [o-type] [depth]      - Play a game (default: h vs a)");
            println!("  match <games> <x-type> <o-type> [depth] - Agent-vs-agent series");
            println!("  search <depth> [side] [board-text]  - Compare both searches");
            println!();
            println!("Player types: h(uman), r(andom), m(inimax), a(lpha-beta), d(eterministic)");
            println!("Board text: rows of x/o/. separated by `/`, e.g. x.o/oxo/..x");
        }
    }
}
