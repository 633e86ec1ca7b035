use anyhow::Result;
use std::env;
use std::io::{self, BufRead, Write};
use taskline::cli::{self, CliAction};
use taskline::config::Config;
use taskline::context::StandardContext;
use taskline::logging;
use taskline::{Outcome, TaskController};

fn main() -> Result<()> {
    let args = cli::parse_args(env::args().skip(1))?;
    match args.action {
        CliAction::Help => {
            cli::print_help("taskline");
            return Ok(());
        }
        CliAction::Version => {
            println!("taskline {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        CliAction::Run => {}
    }

    let ctx = StandardContext::new(args.root);
    let config = Config::load_or_default(&ctx)?;
    if let Err(e) = logging::init_logging(&ctx, &config) {
        eprintln!("Logging disabled: {:#}", e);
    }

    let (mut controller, skipped) = TaskController::open(&ctx, &config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", cli::greeting())?;
    if let Some(notice) = cli::render_skipped(&skipped) {
        writeln!(out, "{}", notice)?;
    }

    let mut input = io::stdin().lock();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = cli::decode_input_line(&buf);
        match controller.handle_line(&line) {
            Ok(Outcome::Exit) => {
                writeln!(out, "{}", cli::farewell())?;
                log::info!("Session ended");
                return Ok(());
            }
            Ok(outcome) => writeln!(out, "{}", cli::render_outcome(&outcome))?,
            Err(e) => writeln!(out, "{}", cli::render_error(&e))?,
        }
        out.flush()?;
    }

    log::info!("Input closed without 'bye'");
    Ok(())
}
