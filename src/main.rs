use clap::{Parser, crate_name};
use figment::Figment;
use log::info;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use localnotes::cli::{Cli, Command};
use localnotes::config::app_config::data::AppConfigData;
use localnotes::config::figment::FigmentExt;
use localnotes::config::{AppConfig, default_config_file};
use localnotes::data::{Note, NoteUpdate};
use localnotes::error_exit;
use localnotes::hasher::{ProductionHasher, ProductionHasherConfig};
use localnotes::logging::init_logging;
use localnotes::rng::make_entropy_rng;
use localnotes::store::{ProductionStore, Store, StoreError};

#[tokio::main]
async fn main() {
    init_logging();

    let cli = Cli::parse();
    info!("{} starting up", crate_name!());

    let config_file = cli.config_file
        .clone()
        .unwrap_or_else(default_config_file);
    let config_data: AppConfigData = match
        Figment::new().setup_app_config(&config_file).extract()
    {
        Ok(data) => data,
        Err(e) => error_exit!("invalid configuration: {e}"),
    };
    let config = AppConfig::from(config_data);

    let argon2_params = match
        argon2::Params::try_from(config.hasher_config.clone())
    {
        Ok(params) => params,
        Err(e) => error_exit!("invalid hasher configuration: {e}"),
    };
    let hasher = ProductionHasher::new(
        ProductionHasherConfig::new(argon2_params),
        make_entropy_rng(),
    );

    let store = match ProductionStore::new(&config, hasher).await {
        Ok(store) => store,
        Err(e) => error_exit!("failed to open the note store: {e}"),
    };

    if let Err(e) = run(&store, cli.command).await {
        error_exit!("{e}");
    }
}

async fn run(
    store: &impl Store,
    command: Command,
) -> Result<(), StoreError> {
    match command {
        Command::Register { name, email, password } => {
            let user = store.register(&name, &email, &password).await?;
            println!("registered and logged in as {} <{}>", user.name, user.email);
        },
        Command::Login { email, password } => {
            let user = store.login(&email, &password).await?;
            println!("logged in as {} <{}>", user.name, user.email);
        },
        Command::Logout => {
            store.logout().await?;
            println!("logged out");
        },
        Command::Whoami => {
            match store.current_user().await {
                Some(user) =>
                    println!("{} <{}> (id {})", user.name, user.email, user.id),
                None => println!("not logged in"),
            }
        },
        Command::Add { title, description } => {
            match store.add_note(&title, &description).await? {
                Some(note) => println!("created note {}", note.id),
                None => println!("not logged in"),
            }
        },
        Command::List { search } => {
            let notes = match search {
                Some(query) => store.search_notes(&query).await,
                None => store.notes().await,
            };
            if notes.is_empty() {
                println!("no notes");
            }
            for note in notes {
                println!(
                    "{}  {}  (updated {})",
                    note.id,
                    note.title,
                    format_time(note.updated_at),
                );
            }
        },
        Command::Show { id } => {
            match store.get_note(&id).await {
                Some(note) => print_note(&note),
                None => println!("note {id} not found"),
            }
        },
        Command::Edit { id, title, description } => {
            let update = NoteUpdate { title, description };
            match store.update_note(&id, update).await? {
                Some(note) => println!("updated note {}", note.id),
                None => println!("note {id} not found"),
            }
        },
        Command::Delete { id } => {
            if store.delete_note(&id).await? {
                println!("deleted note {id}");
            } else {
                println!("note {id} not found");
            }
        },
        Command::Stats => {
            let stats = store.stats().await;
            println!("total notes:   {}", stats.total);
            println!("created today: {}", stats.created_today);
            println!("edited:        {}", stats.edited);
        },
    }
    Ok(())
}

fn print_note(note: &Note) {
    println!("{} ({})", note.title, note.id);
    println!(
        "created {}, updated {}",
        format_time(note.created_at),
        format_time(note.updated_at),
    );
    if !note.description.is_empty() {
        println!();
        println!("{}", note.description);
    }
}

fn format_time(t: OffsetDateTime) -> String {
    t.format(&Rfc3339).unwrap_or_else(|_| t.to_string())
}
