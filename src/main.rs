use log::{debug, info, warn};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::signal;
use workout_tracker::command::{Command, HELP};
use workout_tracker::domain::workout_entry::WorkoutEntry;
use workout_tracker::error::TrackerError;
use workout_tracker::geolocation::{FixedPosition, NoGeolocation};
use workout_tracker::settings::{CONFIG_YAML, Settings};
use workout_tracker::state::app::App;
use workout_tracker::storage::sqlite_storage::SqliteStorage;
use workout_tracker::storage::workout_storage::WorkoutStorage;
use workout_tracker::view::Views;

type InputLines = Lines<BufReader<Stdin>>;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let settings = Settings::load(CONFIG_YAML)?;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{HELP}");
    while run_session(&settings, &mut lines).await? {
        info!("Start a new session");
    }
    info!("Bye");
    Ok(())
}

/// Runs one session until the input ends or a restart is requested.
/// Returns true on restart.
async fn run_session(settings: &Settings, lines: &mut InputLines) -> anyhow::Result<bool> {
    let backend = SqliteStorage::new(&settings.db_path)?;
    let storage = WorkoutStorage::new(Box::new(backend), &settings.storage_key);
    let (views, restart) = Views::console();
    let mut app = App::new(storage, views, settings.zoom, settings.locale);

    match settings.home {
        Some(home) => app.initialize(&FixedPosition(home), settings.geolocation_timeout).await,
        None => app.initialize(&NoGeolocation, settings.geolocation_timeout).await
    }

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    debug!("End of input");
                    return Ok(false);
                };
                if line.trim().is_empty() {
                    continue;
                }
                match Command::parse(&line) {
                    Ok(Command::Quit) => return Ok(false),
                    Ok(command) => execute(&mut app, command),
                    Err(e) => eprintln!("{e}\n{HELP}")
                }
            },
            _ = await_shutdown() => {
                info!("Termination signal received");
                return Ok(false);
            }
        }
        if restart.get() {
            return Ok(true);
        }
    }
}

fn execute(app: &mut App, command: Command) {
    match command {
        Command::Click(coords) => app.on_map_clicked(coords),
        Command::Kind(kind) => app.on_kind_changed(kind),
        Command::Submit { distance, duration, extra } => {
            let kind = app.selected_kind();
            match app.on_form_submitted(kind, &distance, &duration, &extra) {
                Ok(workout) => debug!("Created workout {}", workout.id()),
                Err(TrackerError::MissingPendingLocation) => {
                    // Submitting requires a prior click, so this is a bug in the front end
                    if cfg!(debug_assertions) {
                        panic!("Workout submitted without a map location");
                    }
                }
                Err(e) => warn!("{e}")
            }
        }
        Command::Select(id) => app.on_list_entry_selected(&id),
        Command::List => {
            for workout in app.workouts() {
                println!("{}", WorkoutEntry::from(workout));
            }
        }
        Command::Reset => app.reset_all(),
        Command::Help => println!("{HELP}"),
        Command::Quit => {}
    }
}

// See https://github.com/tokio-rs/axum/blob/main/examples/graceful-shutdown/src/main.rs
async fn await_shutdown() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
