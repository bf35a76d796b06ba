mod assets;
mod logging;
mod shell;

use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use blacktooth_atlas::TextureAtlas;
use blacktooth_geom::ScreenPoint;
use blacktooth_model::{Campaign, RoomId};
use blacktooth_render::HintColours;
use clap::Parser;

use shell::Shell;

#[derive(Parser, Debug)]
#[command(name = "blacktooth")]
#[command(about = "Compose isometric rooms from a campaign and follow portal clicks")]
struct Cli {
    /// Campaign JSON; relative names are also looked up under assets/campaigns
    #[arg(long)]
    campaign: PathBuf,
    /// Room to start in (defaults to the campaign's start room)
    #[arg(long)]
    room: Option<String>,
    /// Screen point to click, as X,Y; repeat to click through several rooms
    #[arg(long, value_parser = parse_point)]
    click: Vec<ScreenPoint>,
    /// Hint colour palette (defaults to assets/hint_colours.toml if present)
    #[arg(long)]
    palette: Option<PathBuf>,
    /// Atlas rectangle overrides (defaults to assets/atlas_overrides.toml if present)
    #[arg(long)]
    atlas_overrides: Option<PathBuf>,
    /// Assets root directory
    #[arg(long)]
    assets: Option<PathBuf>,
    /// Also write the log to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Print only the room summary, not every drawn sprite
    #[arg(long)]
    quiet: bool,
}

fn parse_point(s: &str) -> Result<ScreenPoint, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got \"{}\"", s))?;
    let x: f32 = x.trim().parse().map_err(|e| format!("bad x in \"{}\": {}", s, e))?;
    let y: f32 = y.trim().parse().map_err(|e| format!("bad y in \"{}\": {}", s, e))?;
    Ok(ScreenPoint::new(x, y))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = logging::init(cli.log_file.as_deref(), cli.verbose) {
        eprintln!("failed to start logging: {}", e);
        return ExitCode::FAILURE;
    }
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let root = assets::resolve_assets_root(cli.assets.clone());
    log::debug!("assets root {}", root.display());

    let campaign_path = if cli.campaign.exists() || cli.campaign.is_absolute() {
        cli.campaign.clone()
    } else {
        assets::campaigns_dir(&root).join(&cli.campaign)
    };
    let campaign = Campaign::from_path(&campaign_path)
        .map_err(|e| format!("{}: {}", campaign_path.display(), e))?;
    log::info!(
        "campaign {} with {} room(s)",
        campaign_path.display(),
        campaign.len()
    );

    let mut atlas = TextureAtlas::builtin();
    let overrides = cli
        .atlas_overrides
        .clone()
        .or_else(|| Some(assets::atlas_overrides_path(&root)).filter(|p| p.exists()));
    if let Some(path) = overrides {
        atlas = atlas.with_overrides_path(&path)?;
    }

    let hint_colours = match cli
        .palette
        .clone()
        .or_else(|| Some(assets::hint_colours_path(&root)).filter(|p| p.exists()))
    {
        Some(path) => HintColours::from_path(&path)
            .map_err(|e| format!("{}: {}", path.display(), e))?,
        None => HintColours::default(),
    };

    let start = cli.room.as_deref().map(RoomId::from);
    let mut shell = Shell::new(campaign, atlas, hint_colours, start)?;
    print_room(&shell, cli.quiet)?;
    for p in &cli.click {
        match shell.click(*p)? {
            Some(id) => {
                println!("click ({}, {}) -> {}", p.x, p.y, id);
                print_room(&shell, cli.quiet)?;
            }
            None => println!("click ({}, {}) hit no portal", p.x, p.y),
        }
    }
    Ok(())
}

fn print_room(shell: &Shell, quiet: bool) -> Result<(), Box<dyn Error>> {
    let room = shell.room()?;
    let list = shell.scene().draw_list();
    println!(
        "room {} [{} {}x{}] visit {}: {} sprite(s)",
        room.id,
        room.planet,
        room.size.x,
        room.size.y,
        shell.visits(&room.id),
        list.len()
    );
    if quiet {
        return Ok(());
    }
    for e in &list {
        let portal = e
            .portal
            .map(|p| format!(" -> {}", p.target))
            .unwrap_or_default();
        println!(
            "  {:<14} {:<36} {:>7.1} {:>7.1} {:>3}x{:<3}{}",
            e.label,
            e.sprite.texture.to_string(),
            e.bounds.x,
            e.bounds.y,
            e.bounds.w,
            e.bounds.h,
            portal
        );
    }
    Ok(())
}
