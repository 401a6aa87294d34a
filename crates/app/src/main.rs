mod commands;
mod config;
mod render;

use clap::Parser;
use env_logger::Env;
use flash_core::time::from_std_saturating;
use log::{debug, warn};
use services::{RoundEvent, RoundLoopService, RoundView};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{Instant, MissedTickBehavior};

use crate::commands::{Command, HELP};
use crate::config::Args;
use crate::render::TerminalObserver;

/// Turns a typed command into a round event, using the top card when no index was given.
fn event_for(command: Command, svc: &RoundLoopService) -> Option<RoundEvent> {
    match command {
        Command::Answer { answer, index } => {
            let index = index.or_else(|| svc.view().current_card().map(|card| card.index))?;
            Some(RoundEvent::CardAnswered { answer, index })
        }
        Command::Pause => Some(RoundEvent::PauseRequested),
        Command::Resume => Some(RoundEvent::ResumeRequested),
        Command::Reset => Some(RoundEvent::ResetRequested),
        Command::Flip | Command::Show | Command::Help | Command::Quit => None,
    }
}

/// The observer has already printed the status line or the summary.
fn print_card_area(view: &RoundView) {
    if let Some(area) = render::card_area(view) {
        println!("{area}");
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or(args.log_level.as_str())).init();

    let settings = args.round_settings()?;
    let deck = args.load_deck()?;
    println!("{} ({} cards)", deck.name(), deck.len());
    println!("{HELP}");

    let mut svc = RoundLoopService::new(settings);
    svc.subscribe(TerminalObserver::default());
    let view = svc.start(deck)?;
    print_card_area(&view);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut ticker = tokio::time::interval(args.tick_interval());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut last_tick = Instant::now();

    loop {
        tokio::select! {
            now = ticker.tick() => {
                let elapsed = from_std_saturating(now.duration_since(last_tick));
                last_tick = now;
                svc.handle(RoundEvent::Tick(elapsed))?;
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    debug!("stdin closed");
                    break;
                };
                let command = match line.parse::<Command>() {
                    Ok(command) => command,
                    Err(err) => {
                        println!("{err}");
                        continue;
                    }
                };

                match command {
                    Command::Quit => break,
                    Command::Help => println!("{HELP}"),
                    Command::Show => println!("{}", render::screen(&svc.view())),
                    Command::Flip => match svc.view().current_card() {
                        Some(card) => println!("{} -> {}", render::card_face(card), card.answer),
                        None => println!("no card to flip"),
                    },
                    _ => {
                        let Some(event) = event_for(command, &svc) else {
                            println!("no card to answer");
                            continue;
                        };
                        match svc.handle(event) {
                            Ok(view) => print_card_area(&view),
                            Err(err) => {
                                warn!("rejected command: {err}");
                                println!("{err}");
                            }
                        }
                    }
                }
            }
        }
    }

    let summary = svc.controller().summary();
    println!(
        "bye: {} correct, {} incorrect, {} unanswered",
        summary.correct, summary.incorrect, summary.unanswered
    );
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
