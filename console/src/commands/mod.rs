use anyhow::Result;
use serde::Serialize;

use shared::{Asset, Calculation, Chart, Fee, Ohlc, Pair, TimeRange, Touple, Tuple};

use crate::cli::{Command, EntityKind};
use crate::state::AppState;

pub mod delete;
pub mod detail;
pub mod list;
pub mod options;
pub mod repair;
pub mod update;
pub mod version;

/// Calls the generic handler with the entity type selected on the command line.
macro_rules! for_entity {
    ($kind:expr, $($handler:ident)::+ ( $($arg:expr),* $(,)? )) => {
        match $kind {
            EntityKind::Asset => $($handler)::+::<Asset>($($arg),*).await,
            EntityKind::Pair => $($handler)::+::<Pair>($($arg),*).await,
            EntityKind::Chart => $($handler)::+::<Chart>($($arg),*).await,
            EntityKind::Ohlc => $($handler)::+::<Ohlc>($($arg),*).await,
            EntityKind::Calculation => $($handler)::+::<Calculation>($($arg),*).await,
            EntityKind::Fee => $($handler)::+::<Fee>($($arg),*).await,
            EntityKind::TimeRange => $($handler)::+::<TimeRange>($($arg),*).await,
            EntityKind::Tuple => $($handler)::+::<Tuple>($($arg),*).await,
            EntityKind::Touple => $($handler)::+::<Touple>($($arg),*).await,
        }
    };
}

pub async fn run(state: &AppState, command: Command) -> Result<()> {
    match command {
        Command::List(args) => for_entity!(args.entity, list::handle_list(state, &args)),
        Command::Show { entity, id } => for_entity!(entity, detail::handle_show(state, &id)),
        Command::Create(write) => for_entity!(write.entity, update::handle_create(state, &write.set)),
        Command::Edit { write, id, partial } => {
            for_entity!(write.entity, update::handle_edit(state, &id, &write.set, partial))
        }
        Command::Delete { entity, id } => for_entity!(entity, delete::handle_delete(state, id)),
        Command::Options { entity, id } => for_entity!(entity, options::handle_options(state, id.as_deref())),
        Command::Repair { calculation_id } => repair::handle_repair(state, calculation_id).await,
        Command::Version => {
            version::handle_version();
            Ok(())
        }
    }
}

pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
