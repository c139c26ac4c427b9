// SPDX-License-Identifier: MPL-2.0
use gallery_lens::app::{paths, App, Message};
use gallery_lens::cli::{args::USAGE, command::HELP, Args, Command, TextPresenter};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::time::Instant;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("gallery_lens=info")),
        )
        .init();

    let args = match Args::from_env() {
        Ok(args) => args,
        Err(err) => {
            eprintln!("{err}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };
    if args.help {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }
    if args.version {
        println!("gallery_lens {}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    paths::init_cli_overrides(args.data_dir.clone(), args.config_dir.clone());

    let mut app = match App::from_flags(args.into_flags(), TextPresenter::default()) {
        Ok(app) => app,
        Err(err) => {
            tracing::error!(%err, "cannot start gallery");
            eprintln!("{err}\n\n{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for warning in app.warnings() {
        eprintln!("warning: {warning}");
    }
    if print_lines(&mut out, app.presenter_mut().take_lines()).is_err() {
        return ExitCode::FAILURE;
    }

    for line in io::stdin().lock().lines() {
        let Ok(line) = line else {
            break;
        };
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                eprintln!("{err}");
                continue;
            }
        };

        let mut extra = Vec::new();
        match command {
            Command::Update(messages) => {
                for message in messages {
                    app.update(message);
                }
                // The shell has no idle loop to deliver ticks
                app.flush_announcements();
            }
            Command::Tick => app.update(Message::Tick(Instant::now())),
            Command::State => extra.push(describe(&app)),
            Command::Help => extra.push(HELP.to_string()),
            Command::Quit => break,
            Command::Nothing => {}
        }
        let mut lines = app.presenter_mut().take_lines();
        lines.extend(extra);
        if print_lines(&mut out, lines).is_err() {
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}

fn print_lines(out: &mut impl Write, lines: Vec<String>) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()
}

fn describe(app: &App<TextPresenter>) -> String {
    let gallery = app.gallery();
    let info = gallery.navigator().navigation_info();
    format!(
        "open={} cursor={} indicator={} visible={}/{} category={} image={} theme={}",
        gallery.is_open(),
        gallery.cursor(),
        info.indicator(),
        info.visible_count,
        info.total_count,
        gallery.navigator().filter().label(),
        gallery.viewer().image_filter(),
        app.theme().name(),
    )
}
