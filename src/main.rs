mod cli;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use travelstory::Travelstory;
use ts_core::config::Config;
use ts_core::{LatLng, PhotoId};
use ts_map::SelectionOutcome;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "travelstory=trace,ts_map=trace,ts_db=debug,ts_media=debug,ts_core=debug".to_string()
        } else {
            "travelstory=info,ts_map=info,ts_db=warn,ts_media=warn,ts_core=warn".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    let Cli {
        config: config_path,
        db,
        command,
        ..
    } = cli;
    let open = || open_app(config_path.as_deref(), db.clone());

    match command {
        Commands::Add {
            file,
            lat,
            lng,
            place,
        } => match open()?.add_photo(
            &file,
            LatLng {
                latitude: lat,
                longitude: lng,
            },
            place,
        )? {
            SelectionOutcome::Placed(id) => {
                println!("{id}");
                Ok(())
            }
            SelectionOutcome::Dropped => {
                anyhow::bail!("Photo could not be stored: {}", file.display())
            }
        },
        Commands::List { json } => list_photos(&open()?, json),
        Commands::Delete { id } => {
            let removed = open()?.delete(&PhotoId::new(id))?;
            println!("Deleted {removed} photos");
            Ok(())
        }
        Commands::Clear => {
            let removed = open()?.clear()?;
            println!("Deleted {removed} photos");
            Ok(())
        }
        Commands::Export { out } => {
            for path in open()?.export(&out)? {
                println!("{}", path.display());
            }
            Ok(())
        }
        Commands::Validate { config } => {
            let path = config.or_else(|| config_path.clone());
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("travelstory {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn open_app(config_path: Option<&Path>, db: Option<PathBuf>) -> Result<Travelstory> {
    let mut config = Config::load_or_default(config_path);
    if let Some(db) = db {
        config.database.path = db;
    }
    Travelstory::open(config)
}

fn list_photos(app: &Travelstory, json: bool) -> Result<()> {
    let photos = app.list()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&photos)?);
        return Ok(());
    }

    println!("Found {} photos", photos.len());
    for p in &photos {
        let dims = match (p.width, p.height) {
            (Some(w), Some(h)) => format!("{w}x{h}"),
            _ => "undecodable".to_string(),
        };
        println!(
            "{}\t{:.6}\t{:.6}\t{} bytes\t{}",
            p.id.as_deref().unwrap_or("-"),
            p.latitude,
            p.longitude,
            p.bytes,
            dims
        );
    }
    Ok(())
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    let config = match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            Config::load(p)?
        }
        None => {
            println!("No config file specified, using defaults");
            Config::default()
        }
    };

    let warnings = config.validate();
    if warnings.is_empty() {
        println!("✓ Configuration is valid");
    } else {
        for w in &warnings {
            println!("  warning: {w}");
        }
    }
    println!("  Database: {}", config.database.path.display());
    println!("  Zoom-in level: {}", config.map.zoom_in_level);
    println!("  Cluster size: >= {}", config.map.min_cluster_size);
    println!("  Thumbnail: {}px", config.images.thumbnail_dimension);

    Ok(())
}
