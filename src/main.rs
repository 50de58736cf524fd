use anyhow::Context;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use screamsheet_lib::modules::document::{DocumentWriter, PdfWriter, TextWriter};
use screamsheet_lib::modules::screamsheet::FeaturedTeam;
use screamsheet_lib::shared::domain::value_objects::LlmChoice;
use screamsheet_lib::shared::utils::init_logger;
use screamsheet_lib::{Screamsheet, ScreamsheetFactory, Settings, SheetKind, SheetRequest};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "screamsheet", version, about = "Print a daily sports or news screamsheet")]
struct Cli {
    /// Date to cover (YYYY-MM-DD); sports default to yesterday, news to today
    #[arg(long, global = true)]
    date: Option<NaiveDate>,

    /// Output file; defaults to {output_dir}/{kind}_{date}.{ext}
    #[arg(long, short, global = true)]
    output: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Format::Pdf, global = true)]
    format: Format,

    /// Replay captured responses from this directory instead of the network
    #[arg(long, global = true, env = "SCREAMSHEET_SNAPSHOT_DIR")]
    snapshot_dir: Option<PathBuf>,

    /// Save every live response to this directory
    #[arg(long, global = true, env = "SCREAMSHEET_DUMP_DIR")]
    dump_dir: Option<PathBuf>,

    /// Model used for summaries (gemini or grok)
    #[arg(long, global = true)]
    llm: Option<LlmChoice>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Pdf,
    Text,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Major League Baseball
    Mlb(SportsArgs),
    /// National Hockey League
    Nhl(SportsArgs),
    /// National Football League
    Nfl(SportsArgs),
    /// National Basketball Association
    Nba(SportsArgs),
    /// News digest from one source
    News(NewsArgs),
}

#[derive(Debug, Args)]
struct SportsArgs {
    /// League id of the team to feature with a box score
    #[arg(long, requires = "team_name")]
    team_id: Option<u32>,

    /// Display name of the featured team
    #[arg(long, requires = "team_id")]
    team_name: Option<String>,

    /// Add a model-written recap of the featured team's game
    #[arg(long, requires = "team_id")]
    summary: bool,
}

#[derive(Debug, Args)]
struct NewsArgs {
    /// mlb-trade-rumors, players-tribune, fangraphs or mlb-news
    source: SheetKind,

    /// Team to reserve a slot for; repeat in priority order
    #[arg(long = "favorite")]
    favorites: Vec<String>,

    #[arg(long)]
    max_articles: Option<usize>,

    /// Leave out the weather strip
    #[arg(long)]
    no_weather: bool,
}

impl Cli {
    fn apply(&self, settings: &mut Settings) {
        if let Some(dir) = &self.snapshot_dir {
            settings.snapshot_dir = Some(dir.clone());
        }
        if let Some(dir) = &self.dump_dir {
            settings.dump_dir = Some(dir.clone());
        }
        if let Some(llm) = self.llm {
            settings.llm = llm;
        }
    }

    fn request(&self) -> anyhow::Result<(SheetKind, SheetRequest)> {
        let mut request = SheetRequest {
            date: self.date,
            output: self.output.clone(),
            ..SheetRequest::default()
        };

        let kind = match &self.command {
            Command::Mlb(args) | Command::Nhl(args) | Command::Nfl(args) | Command::Nba(args) => {
                request.team = match (args.team_id, &args.team_name) {
                    (Some(id), Some(name)) => Some(FeaturedTeam {
                        id,
                        name: name.clone(),
                    }),
                    _ => None,
                };
                request.include_summary = args.summary;
                match &self.command {
                    Command::Mlb(_) => SheetKind::Mlb,
                    Command::Nhl(_) => SheetKind::Nhl,
                    Command::Nfl(_) => SheetKind::Nfl,
                    _ => SheetKind::Nba,
                }
            }
            Command::News(args) => {
                anyhow::ensure!(
                    !args.source.is_sports(),
                    "'{}' is a sports sheet, use the `{}` subcommand",
                    args.source,
                    args.source
                );
                request.favorite_teams = args.favorites.clone();
                request.max_articles = args.max_articles;
                request.include_weather = !args.no_weather;
                args.source
            }
        };

        Ok((kind, request))
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_logger();
    let cli = Cli::parse();

    let mut settings = Settings::from_env().context("Failed to load settings")?;
    cli.apply(&mut settings);

    let writer: Box<dyn DocumentWriter> = match cli.format {
        Format::Pdf => Box::new(PdfWriter::from_settings(&settings)),
        Format::Text => Box::new(TextWriter::new()),
    };

    let (kind, request) = cli.request()?;
    let factory = ScreamsheetFactory::new(settings)
        .context("Failed to set up providers")?
        .with_extension(writer.extension());

    let sheet = factory.create(kind, request);
    log::info!("Generating '{}'", sheet.title());
    let path = sheet
        .generate(writer.as_ref())
        .await
        .with_context(|| format!("Failed to generate {} screamsheet", kind))?;

    println!("{}", path.display());
    Ok(())
}
