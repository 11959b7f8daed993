use std::env;
use std::process::ExitCode;

use chrono::Local;

use prayer_board::board::board_snapshot_at;
use prayer_board::config::Config;

fn main() -> ExitCode {
    env_logger::init();

    let config = match env::args().nth(1) {
        Some(path) => match Config::load(&path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("{}", err);
                return ExitCode::FAILURE;
            }
        },
        None => {
            log::warn!("no config file given, using the built-in location");
            Config::default()
        }
    };

    let board = board_snapshot_at(&config, &Local::now());

    println!("=== {} ===", board.location);
    println!("{}   {}   {}", board.date, board.clock, board.hijri);
    println!();
    println!("{:<10}{:>8}{:>8}", "Prayer", "Adhan", "Iqama");
    for row in &board.rows {
        let marker = match board.next {
            Some(next) if next.prayer == row.prayer => " <",
            _ => "",
        };
        println!("{:<10}{:>8}{:>8}{}", row.prayer, row.adhan, row.iqama, marker);
    }
    println!("{:<10}{:>8}", "Sunrise", board.sunrise);
    println!();
    match board.next {
        Some(next) => println!("{} in {}", next.prayer, next.countdown()),
        None => println!("No more prayers today"),
    }
    ExitCode::SUCCESS
}
