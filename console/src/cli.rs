use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "querybug", version, about = "Administer market-data entities through the REST backend")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List one page of records
    List(ListArgs),
    /// Show a single record
    Show { entity: EntityKind, id: String },
    /// Create a record from field values
    Create(WriteArgs),
    /// Change fields of an existing record
    Edit {
        #[command(flatten)]
        write: WriteArgs,
        id: String,
        /// Send only the changed fields as a merge patch
        #[arg(long, default_value_t = false)]
        partial: bool,
    },
    /// Delete a record
    Delete { entity: EntityKind, id: i64 },
    /// Show the relationship choices of a record's edit form
    Options { entity: EntityKind, id: Option<String> },
    /// Find where a calculation has to be recomputed
    Repair { calculation_id: i64 },
    /// Print build information
    Version,
}

#[derive(Args)]
pub struct ListArgs {
    pub entity: EntityKind,
    /// Zero based page
    #[arg(long, default_value_t = 0)]
    pub page: u32,
    /// Page size, `ITEMS_PER_PAGE` when omitted
    #[arg(long)]
    pub size: Option<u32>,
    #[arg(long, default_value = "id,asc")]
    pub sort: String,
}

#[derive(Args)]
pub struct WriteArgs {
    pub entity: EntityKind,
    /// Field value as `field=value`; JSON values are taken as such, anything else as text
    #[arg(long = "set", value_name = "FIELD=VALUE")]
    pub set: Vec<String>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum EntityKind {
    Asset,
    Pair,
    Chart,
    Ohlc,
    Calculation,
    Fee,
    TimeRange,
    Tuple,
    Touple,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_edit_command() {
        let cli = Cli::try_parse_from([
            "querybug", "edit", "chart", "9544", "--set", "name=btc", "--set", "maxCount=5", "--partial",
        ])
        .unwrap();

        match cli.command {
            Command::Edit { id, write, partial } => {
                assert_eq!(id, "9544");
                assert_eq!(write.entity, EntityKind::Chart);
                assert_eq!(write.set, vec!["name=btc", "maxCount=5"]);
                assert!(partial);
            }
            _ => panic!("expected edit"),
        }
    }

    #[test]
    fn test_entity_kind_is_kebab_case() {
        let cli = Cli::try_parse_from(["querybug", "list", "time-range", "--size", "5"]).unwrap();
        match cli.command {
            Command::List(args) => {
                assert_eq!(args.entity, EntityKind::TimeRange);
                assert_eq!(args.size, Some(5));
                assert_eq!(args.sort, "id,asc");
            }
            _ => panic!("expected list"),
        }
    }
}
