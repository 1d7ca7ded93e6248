use anyhow::{bail, Context, Result};
use bracket_planner::{
    load_settings, plan_teams, resolve_odd_roster, validate_roster, Bracket, BracketReport,
    OddRosterPolicy, OutputFormat, RandomSource, RngSource, Roster, Settings, TeamSize,
};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Shuffle a roster of players into teams and first-round matchups.
#[derive(Parser, Debug)]
#[command(version)]
struct Cli {
    /// Roster file (.txt), one player per line. Players that cannot be
    /// teamed with the first name follow `!!` on the same line, like:
    /// `player one !!cant match this player !!or this player`
    #[arg(short, long, value_name = "FILE")]
    file: PathBuf,

    /// Players per team
    #[arg(short = 'p', long, value_enum)]
    players_per_team: Option<TeamSize>,

    /// Seed for a reproducible draw
    #[arg(long)]
    seed: Option<u64>,

    /// How to handle an odd roster when building pairs
    #[arg(long, value_enum, default_value_t = OddArg::Reject)]
    odd: OddArg,

    /// Player appended by `--odd add`
    #[arg(long, value_name = "NAME")]
    add_player: Option<String>,

    /// Output format
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Rejected partner draws allowed before pairing gives up
    #[arg(long)]
    max_pairing_attempts: Option<u32>,

    /// Settings file (defaults to ./bracket.toml when present)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OddArg {
    Reject,
    Drop,
    Add,
}

impl Cli {
    fn odd_policy(&self) -> Result<OddRosterPolicy> {
        Ok(match (self.odd, &self.add_player) {
            (OddArg::Reject, _) => OddRosterPolicy::Reject,
            (OddArg::Drop, _) => OddRosterPolicy::DropRandom,
            (OddArg::Add, Some(name)) => OddRosterPolicy::Add(name.clone()),
            (OddArg::Add, None) => bail!("--odd add requires --add-player <NAME>"),
        })
    }

    fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(v) = self.players_per_team {
            settings.players_per_team = v;
        }
        if let Some(v) = self.seed {
            settings.seed = Some(v);
        }
        if let Some(v) = self.max_pairing_attempts {
            settings.max_pairing_attempts = v;
        }
        if let Some(v) = self.format {
            settings.format = v;
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut settings = load_settings(cli.config.as_deref())?;
    cli.apply_overrides(&mut settings);
    let policy = cli.odd_policy()?;

    let mut source = match settings.seed {
        Some(seed) => RngSource::seeded(seed),
        None => RngSource::from_entropy(),
    };

    let mut roster = Roster::load(&cli.file)?;
    info!(players = roster.len(), file = %cli.file.display(), "loaded roster");

    let bracket = draw_bracket(&mut roster, &settings, &policy, &mut source)
        .with_context(|| format!("could not build a bracket from '{}'", cli.file.display()))?;

    match settings.format {
        OutputFormat::Text => print!("{}", bracket.render_text()),
        OutputFormat::Json => {
            let report = BracketReport::new(bracket, &roster.names(), settings.seed);
            println!("{}", report.to_json()?);
        }
    }

    Ok(())
}

fn draw_bracket(
    roster: &mut Roster,
    settings: &Settings,
    policy: &OddRosterPolicy,
    source: &mut dyn RandomSource,
) -> Result<Bracket> {
    let size = settings.players_per_team;

    resolve_odd_roster(roster, size, policy, source)?;
    validate_roster(roster, size)?;

    let teams = plan_teams(roster, size, source, settings.max_pairing_attempts)?;
    info!(teams = teams.len(), "formed teams");

    Ok(Bracket::draw(teams, size, source))
}
