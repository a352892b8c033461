use std::{
    io::{self, Write},
    process::ExitCode,
};

use anyhow::Result;
use clap::{Parser, Subcommand};
use client_core::{load_settings, parse_server_url, ViewController};
use shared::domain::Coord;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod text;

const HELP: &str = "\
commands:
  move <row> <col>   play a disc (alias: m, or just <row> <col>)
  reset              start a new game (alias: new)
  refresh            fetch the current state again (alias: state)
  help               show this help
  quit               leave (alias: exit, q)";

#[derive(Parser, Debug)]
#[command(about = "Terminal client for an Othello game server")]
struct Args {
    /// Overrides the server url from othello_client.toml and the environment.
    #[arg(long)]
    server_url: Option<String>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive session (the default).
    Play,
    /// Print the current board once.
    State,
    /// Submit one move and print the resulting board.
    Move { row: u8, col: u8 },
    /// Start a new game and print the fresh board.
    NewGame,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PlayCommand {
    Move(Coord),
    Reset,
    Refresh,
    Help,
    Quit,
}

fn parse_coord(row: &str, col: &str) -> Result<Coord, String> {
    let (Ok(row), Ok(col)) = (row.parse::<u8>(), col.parse::<u8>()) else {
        return Err(format!("'{row} {col}' is not a pair of numbers"));
    };
    Coord::new(row, col).map_err(|err| err.to_string())
}

/// Blank input yields `Ok(None)`.
fn parse_command(line: &str) -> Result<Option<PlayCommand>, String> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let command = match words.as_slice() {
        [] => return Ok(None),
        ["move" | "m", row, col] | [row, col] => PlayCommand::Move(parse_coord(row, col)?),
        ["reset" | "new"] => PlayCommand::Reset,
        ["refresh" | "state"] => PlayCommand::Refresh,
        ["help" | "?"] => PlayCommand::Help,
        ["quit" | "exit" | "q"] => PlayCommand::Quit,
        _ => return Err(format!("unknown command '{}', try 'help'", line.trim())),
    };
    Ok(Some(command))
}

async fn print_view(controller: &ViewController) {
    print!("{}", text::render_text(&controller.snapshot().await));
}

async fn play(controller: &ViewController) -> Result<()> {
    controller.fetch_state().await;
    print_view(controller).await;
    println!("{HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match parse_command(&line) {
            Ok(None) => continue,
            Ok(Some(PlayCommand::Move(coord))) => {
                if !controller.activate(coord).await {
                    println!("({}, {}) is not a playable cell", coord.row, coord.col);
                    continue;
                }
            }
            Ok(Some(PlayCommand::Reset)) => controller.reset_game().await,
            Ok(Some(PlayCommand::Refresh)) => controller.fetch_state().await,
            Ok(Some(PlayCommand::Help)) => {
                println!("{HELP}");
                continue;
            }
            Ok(Some(PlayCommand::Quit)) => break,
            Err(err) => {
                println!("{err}");
                continue;
            }
        }

        print_view(controller).await;
    }

    Ok(())
}

/// Prints the result of a one-shot command; an error message becomes a failing exit code.
async fn finish_one_shot(controller: &ViewController) -> ExitCode {
    let snapshot = controller.snapshot().await;
    print!("{}", text::render_text(&snapshot));
    match snapshot.message {
        Some(message) if message.is_error() => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();
    let settings = load_settings();

    let filter =
        EnvFilter::try_new(&settings.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let server_url = parse_server_url(args.server_url.as_deref().unwrap_or(&settings.server_url))?;
    info!(%server_url, "using game server");
    let controller = ViewController::connect(server_url);

    let code = match args.command.unwrap_or(Command::Play) {
        Command::Play => {
            play(&controller).await?;
            ExitCode::SUCCESS
        }
        Command::State => {
            controller.fetch_state().await;
            finish_one_shot(&controller).await
        }
        Command::Move { row, col } => {
            controller.submit_move(row, col).await;
            finish_one_shot(&controller).await
        }
        Command::NewGame => {
            controller.reset_game().await;
            finish_one_shot(&controller).await
        }
    };

    Ok(code)
}
