//! Play computer-vs-computer games and report per-seat results.
//!
//! Usage: cargo run --bin simulate -- --games 500 --players 4 --random-seats 1,3

use clap::Parser;
use tracing::{info, Level};

use rust_ludo::{
    BoardView, Color, ExtraRollPolicy, GameState, LudoConfig, LudoGame, MovePolicy, PlayerId,
    PlayerMap, RandomPolicy,
};

/// Simulate Ludo games between computer players
#[derive(Parser, Debug)]
#[command(name = "simulate")]
#[command(about = "Play computer-vs-computer Ludo games", long_about = None)]
struct Args {
    /// Number of games to play
    #[arg(long, default_value_t = 100)]
    games: u64,

    /// Seats per game (2-4)
    #[arg(long, default_value_t = 4)]
    players: usize,

    /// Seed of the first game; game i uses seed + i
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Only a six grants another roll (captures do not)
    #[arg(long)]
    six_only: bool,

    /// Seats that move at random instead of using the heuristic
    #[arg(long, value_delimiter = ',')]
    random_seats: Vec<usize>,

    /// Give up on a game after this many rolls
    #[arg(long, default_value_t = 50_000)]
    max_rolls: usize,

    /// Log every move
    #[arg(short, long)]
    verbose: bool,
}

/// Occupied squares as `square:colors`, with `#` marking a block.
fn describe(state: &GameState) -> String {
    let view = BoardView::from_players(state.players());
    view.occupied_squares()
        .into_iter()
        .map(|square| {
            let colors: Vec<&str> = view
                .occupants(square)
                .iter()
                .map(|o| state.player(o.player).color.name())
                .collect();
            let block = if view.is_block(square) { "#" } else { "" };
            format!("{square}:{}{block}", colors.join("+"))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .init();

    let extra_roll = if args.six_only {
        ExtraRollPolicy::SixOnly
    } else {
        ExtraRollPolicy::SixOrCapture
    };

    let base = LudoConfig::offline(args.players)
        .all_computer()
        .with_extra_roll(extra_roll);
    if let Err(err) = base.validate() {
        eprintln!("invalid configuration: {err}");
        std::process::exit(2);
    }

    let mut wins = PlayerMap::new(args.players, |_| 0u64);
    let mut total_rolls = 0usize;
    let mut unfinished = 0u64;

    for i in 0..args.games {
        let config = base.clone().with_seed(args.seed.wrapping_add(i));
        let (game, mut state) = match LudoGame::new(config) {
            Ok(pair) => pair,
            Err(err) => {
                eprintln!("invalid configuration: {err}");
                std::process::exit(2);
            }
        };

        let mut policies = game.seat_policies(&state);
        for &seat in &args.random_seats {
            if seat < args.players {
                policies[PlayerId::new(seat as u8)] = Box::new(RandomPolicy) as Box<dyn MovePolicy>;
            }
        }

        let result = game.play_to_completion(&mut state, &policies, args.max_rolls);
        total_rolls += state.history.len();

        match result {
            Some(result) => {
                wins[result.winner] += 1;
                if args.verbose {
                    info!(game = i, winner = %result.winner, turn = result.turn, "finished");
                }
            }
            None => {
                unfinished += 1;
                let finished: Vec<usize> =
                    state.players().iter().map(|p| p.finished_count()).collect();
                info!(game = i, ?finished, board = %describe(&state), "gave up");
            }
        }
    }

    let labels = PlayerMap::new(args.players, |seat| {
        let color = Color::ALL[seat.index()];
        let policy = if args.random_seats.contains(&seat.index()) { "random" } else { "heuristic" };
        format!("{color} ({policy})")
    });

    println!("games: {}  unfinished: {}", args.games, unfinished);
    println!("average rolls per game: {:.1}", total_rolls as f64 / args.games.max(1) as f64);
    for (seat, label) in labels.iter() {
        let won = wins[seat];
        println!(
            "  {label:<20} {won:>6} wins ({:.1}%)",
            100.0 * won as f64 / args.games.max(1) as f64
        );
    }
}
