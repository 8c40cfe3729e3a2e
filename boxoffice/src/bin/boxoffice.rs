//! Box office terminal
//!
//! Line-oriented front end over a booking session. Reads commands from stdin,
//! prints the seat map and messages to stdout; logs go to stderr.
//!
//! # Usage
//!
//! ```bash
//! BOOKINGS_FILE=bookings.json cargo run --bin boxoffice
//! ```

use anyhow::Context;
use boxoffice::console::{self, Command};
use boxoffice::{BookingSession, Config, SessionUpdate};
use std::io::{self, BufRead, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env().context("Invalid configuration")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log.level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let mut session = BookingSession::open(&config).with_context(|| {
        format!(
            "Could not open bookings at {}",
            config.storage.bookings_file.display()
        )
    })?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    writeln!(out, "Cinema Seat Booking. Type 'help' for commands.\n")?;
    show(&mut out, &session)?;

    loop {
        write!(out, "\n[{}] > ", session.active_showtime())?;
        out.flush()?;

        let Some(line) = read_line(&mut input)? else {
            break;
        };

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(error) => {
                writeln!(out, "{error}")?;
                continue;
            },
        };

        if !run(command, &mut session, &mut input, &mut out)? {
            break;
        }
    }

    Ok(())
}

/// Runs one command. Returns `false` when the user wants to leave.
fn run(
    command: Command,
    session: &mut BookingSession,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> anyhow::Result<bool> {
    let result = match command {
        Command::Empty => return Ok(true),
        Command::Quit => return Ok(false),
        Command::Help => {
            writeln!(out, "{}", console::HELP)?;
            return Ok(true);
        },
        Command::Show => {
            show(out, session)?;
            return Ok(true);
        },
        Command::Showtimes => {
            writeln!(
                out,
                "{}",
                console::render_showtimes(session.showtimes(), &session.active_showtime())
            )?;
            return Ok(true);
        },
        Command::Stats => {
            writeln!(out, "{}", console::render_summary(&session.summary()))?;
            return Ok(true);
        },
        Command::Toggle(seats) => {
            let mut last = None;
            for seat in seats {
                match session.toggle_select(seat.row, seat.col) {
                    Ok(update) => last = Some(update),
                    Err(error) => writeln!(out, "{error}")?,
                }
            }
            match last {
                Some(update) => Ok(update),
                None => return Ok(true),
            }
        },
        Command::Book => session.book_selected(),
        Command::Cancel => session.cancel_selected(),
        Command::Reset => {
            write!(out, "Reset ALL bookings for every showtime? [y/N] ")?;
            out.flush()?;
            let answer = read_line(input)?.unwrap_or_default();
            session.reset_all(console::is_confirmation(&answer))
        },
        Command::Showtime(label) => session.change_showtime(&label),
    };

    match result {
        Ok(update) => report(out, session, &update)?,
        Err(error) => writeln!(out, "Error: {error}")?,
    }
    Ok(true)
}

fn report(out: &mut impl Write, session: &BookingSession, update: &SessionUpdate) -> io::Result<()> {
    for message in update.messages() {
        writeln!(out, "{message}")?;
    }
    writeln!(out)?;
    writeln!(
        out,
        "{}",
        console::render_seat_map(
            &session.active_showtime(),
            &update.seats,
            session.total_booked(),
            session.total_revenue(),
        )
    )
}

fn show(out: &mut impl Write, session: &BookingSession) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        console::render_seat_map(
            &session.active_showtime(),
            &session.seat_map(),
            session.total_booked(),
            session.total_revenue(),
        )
    )
}

fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
