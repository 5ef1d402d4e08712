use anyhow::{anyhow, Result};
use clap::Parser;
use indicatif::ProgressBar;
use log::{info, warn};

use std::io::{stderr, stdin, stdout, BufRead, Write};
use std::process;

use connect4_engine::{board::*, ending::*, search::Searcher, DEFAULT_LOOKAHEAD, WIDTH};

mod display;

/// Deepest lookahead that still answers in a few seconds
const SLOW_DEPTH: usize = 8;

#[derive(Parser, Debug)]
#[command(about = "Play Connect 4 against a lookahead engine")]
struct Args {
    /// Don't draw the board or print prompts on stderr
    #[arg(long, short = 'q')]
    quiet: bool,

    /// Number of plies the engine looks ahead
    #[arg(long, short = 'd', default_value_t = DEFAULT_LOOKAHEAD)]
    depth: usize,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: log::Level,
}

/// How a game finished, reported through the exit code
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum Outcome {
    EngineWon,
    HumanWon,
    Tie,
}

impl Outcome {
    fn exit_code(self) -> i32 {
        match self {
            Outcome::EngineWon => 1,
            Outcome::HumanWon => 2,
            Outcome::Tie => 3,
        }
    }
}

/// Exit code for I/O failures
const ERROR_EXIT_CODE: i32 = 4;

/// Prompts and the board go to stderr, unless running quietly
struct Console {
    quiet: bool,
}

impl Console {
    fn say(&self, message: &str) {
        if !self.quiet {
            eprint!("{}", message);
            stderr().flush().expect("failed to flush to stderr!");
        }
    }

    fn draw(&self, board: &Board) -> Result<()> {
        if self.quiet {
            return Ok(());
        }
        display::draw(board)
    }
}

fn main() {
    let args = Args::parse();

    if let Err(err) = simple_logger::init_with_level(args.log_level) {
        eprintln!("Failed to set up logging: {}", err);
    }

    let stdin = stdin();
    match play(&args, &mut stdin.lock(), &mut stdout()) {
        Ok(outcome) => {
            info!("game over: {:?}", outcome);
            process::exit(outcome.exit_code());
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            process::exit(ERROR_EXIT_CODE);
        }
    }
}

/// Runs one game, reading the human's columns from `input` and writing the
/// engine's columns to `output` while the game goes on
fn play<R: BufRead, W: Write>(args: &Args, input: &mut R, output: &mut W) -> Result<Outcome> {
    let console = Console { quiet: args.quiet };
    let mut board = Board::new();

    if args.depth > SLOW_DEPTH {
        warn!("lookahead of {} plies, expect slow engine moves", args.depth);
    }

    let outcome = loop {
        console.draw(&board)?;

        // human move
        loop {
            console.say(&format!("Enter your move column (0..{}): ", WIDTH - 1));
            let column = match read_move(input)? {
                Some(column) => column,
                None => continue,
            };
            if board.place(column, Side::Human) {
                info!("human played column {}", column);
                break;
            }
            console.say(&format!("Couldn't make move at column {}\n", column));
        }
        match ending(&board, Side::Human) {
            Ending::Tie => {
                console.say("Tie after your move\n");
                break Outcome::Tie;
            }
            Ending::Win => {
                console.say("You won!\n");
                break Outcome::HumanWon;
            }
            Ending::Continue => (),
        }

        // engine move
        let spinner = if args.quiet {
            ProgressBar::hidden()
        } else {
            ProgressBar::new_spinner()
        };
        spinner.set_message("thinking...");
        spinner.enable_steady_tick(100);
        let mut searcher = Searcher::new(&mut board);
        let (best_move, value) = searcher.pick_move(Side::Engine, args.depth);
        let node_count = searcher.node_count;
        spinner.finish_and_clear();

        let column = match best_move {
            Some(column) => column,
            None => {
                console.say("No moves left\n");
                break Outcome::Tie;
            }
        };
        if !board.place(column, Side::Engine) {
            return Err(anyhow!("engine picked full column {}", column));
        }
        info!("engine played column {} (value {}, {} nodes)", column, value, node_count);

        // a finishing move is reported through the exit code only
        match ending(&board, Side::Engine) {
            Ending::Tie => {
                console.say(&format!("Tie after my move at column {}\n", column));
                break Outcome::Tie;
            }
            Ending::Win => {
                console.say(&format!("I won at column {}!\n", column));
                break Outcome::EngineWon;
            }
            Ending::Continue => {
                console.say("My move: ");
                writeln!(output, "{}", column)?;
                output.flush()?;
            }
        }
    };

    console.draw(&board)?;
    Ok(outcome)
}

/// Reads a column from a line of input
///
/// Returns `None` for anything that isn't a column number, and an error once
/// input runs out.
fn read_move<R: BufRead>(input: &mut R) -> Result<Option<usize>> {
    let mut buffer = String::new();
    if input.read_line(&mut buffer)? == 0 {
        return Err(anyhow!("standard input closed"));
    }
    match buffer.trim().parse::<usize>() {
        Ok(column) if column < WIDTH => Ok(Some(column)),
        _ => Ok(None),
    }
}
