use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use seatplan::designer::{load_seat_table, ActionOutcome};
use seatplan::{
    editor_options_from_config, event_bus, init_logging, EditorSession, EventFilter,
    FileLayoutStore, HeadlessScene, LogDialog, SettingsPersistence, BUILD_DATE, VERSION,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Lay out a theatre seating chart and save it")]
struct Args {
    /// Config file (TOML or JSON); the platform default when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seat table to import (`{section: {row: [numbers]}}` JSON); one default row when omitted
    seat_table: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    init_logging()?;
    tracing::info!("SeatPlan {} (built {})", VERSION, BUILD_DATE);

    let args = Args::parse();
    let settings = match &args.config {
        Some(path) => SettingsPersistence::load(path)?,
        None => SettingsPersistence::load_default()?,
    };
    let config = settings.config();
    let options = editor_options_from_config(config)?;

    let bus = event_bus();
    bus.subscribe(EventFilter::All, |event| {
        tracing::info!(category = %event.category(), "{}", event.description());
    });

    let mut session = EditorSession::new(
        options,
        HeadlessScene::new(),
        LogDialog::new(true),
        FileLayoutStore::new(config.storage.output_directory.clone()),
    )
    .with_event_bus(Arc::clone(&bus));

    match &args.seat_table {
        Some(path) => {
            let table = load_seat_table(path)?;
            if let ActionOutcome::Rejected(err) = session.import_seat_table(&table) {
                anyhow::bail!("import of {} failed: {}", path.display(), err);
            }
        }
        None => {
            if let ActionOutcome::Rejected(err) = session.add_row(None, None) {
                anyhow::bail!("could not add a row: {}", err);
            }
        }
    }

    let seats = session.save_layout()?;
    let path = session.store().path_for(&session.options().layout_key)?;
    println!("{} seats saved to {}", seats, path.display());

    Ok(())
}
