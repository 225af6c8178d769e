// File: src/bin/drape.rs
use anyhow::{Context, Result, bail};
use chrono::{Datelike, Local};
use drape::config::Config;
use drape::model::{ClosetItem, Season};
use drape::outfit::generate_outfit_with_rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs;

const USAGE: &str = "Usage: drape [closet.json] [--season S] [--occasion O] [--seed N]";

#[derive(Debug, Default, PartialEq)]
struct Args {
    closet_path: Option<String>,
    season: Option<String>,
    occasion: Option<String>,
    seed: Option<u64>,
    help: bool,
}

/// What a run actually uses once flags and config are merged.
#[derive(Debug, PartialEq)]
struct Request {
    closet_path: String,
    season: Option<String>,
    occasion: Option<String>,
    seed: Option<u64>,
}

fn parse_args(mut raw: impl Iterator<Item = String>) -> Result<Args> {
    let mut args = Args::default();
    while let Some(arg) = raw.next() {
        match arg.as_str() {
            "--season" => args.season = Some(raw.next().context("--season needs a value")?),
            "--occasion" => args.occasion = Some(raw.next().context("--occasion needs a value")?),
            "--seed" => {
                let v = raw.next().context("--seed needs a value")?;
                args.seed = Some(v.parse().with_context(|| format!("Bad seed: {}", v))?);
            }
            "-h" | "--help" => args.help = true,
            s if s.starts_with("--") => bail!("Unknown flag {}\n{}", s, USAGE),
            _ if args.closet_path.is_none() => args.closet_path = Some(arg),
            _ => bail!("Unexpected argument {}\n{}", arg, USAGE),
        }
    }
    Ok(args)
}

/// Flags win over config. Season falls back to the configured default, then
/// to the season of `month` when date derivation is on.
fn resolve_request(args: Args, config: &Config, month: u32) -> Result<Request> {
    let closet_path = args
        .closet_path
        .or_else(|| config.closet_path.clone())
        .context(USAGE)?;

    let season = args
        .season
        .or_else(|| config.default_season.clone())
        .or_else(|| {
            config.derive_season_from_date.then(|| {
                let season = Season::for_month(month, config.hemisphere);
                log::info!("Using current season {}", season);
                season.to_string()
            })
        });

    Ok(Request {
        closet_path,
        season,
        occasion: args.occasion.or_else(|| config.default_occasion.clone()),
        seed: args.seed.or(config.seed),
    })
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = parse_args(std::env::args().skip(1))?;
    if args.help {
        println!("{}", USAGE);
        return Ok(());
    }
    let config = Config::load().unwrap_or_else(|e| {
        log::warn!("Ignoring config: {:#}", e);
        Config::default()
    });
    let request = resolve_request(args, &config, Local::now().month())?;

    let raw = fs::read_to_string(&request.closet_path)
        .with_context(|| format!("Reading closet {}", request.closet_path))?;
    let items = ClosetItem::list_from_json(&raw)?;

    let mut rng = match request.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let outfit = generate_outfit_with_rng(
        &items,
        request.season.as_deref(),
        request.occasion.as_deref(),
        &mut rng,
    )?;
    if !outfit.is_complete() {
        eprintln!("Couldn't put together an outfit from {} items", items.len());
    }
    println!("{}", outfit.to_json()?);
    Ok(())
}
