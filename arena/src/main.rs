mod match_runner;

use clap::Parser;
use tictactoe_engine::config::{ConfigManager, Validate};
use tictactoe_engine::{Difficulty, MatchSettings, Opponent, log, logger};

#[derive(Parser)]
#[command(name = "tictactoe_arena")]
struct Args {
    #[arg(long, default_value = "tictactoe_arena_config.yaml")]
    config: String,

    #[arg(long)]
    games: Option<u32>,

    #[arg(long)]
    difficulty: Option<Difficulty>,

    #[arg(long)]
    opponent: Option<Opponent>,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Arena".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let manager: ConfigManager<MatchSettings> = ConfigManager::from_yaml_file(&args.config);
    let mut settings = manager.get_config()?;

    if let Some(games) = args.games {
        settings.games = games;
    }
    if let Some(difficulty) = args.difficulty {
        settings.bot_difficulty = difficulty;
    }
    if let Some(opponent) = args.opponent {
        settings.opponent = opponent;
    }
    if let Some(seed) = args.seed {
        settings.seed = Some(seed);
    }
    settings.validate()?;

    let summary = match_runner::run_matches(&settings)?;

    log!(
        "Finished {} games: bot O at {:?} vs X playing {:?}",
        summary.games,
        settings.bot_difficulty,
        settings.opponent
    );
    log!(
        "Bot wins: {}, opponent wins: {}, draws: {}",
        summary.bot_wins,
        summary.opponent_wins,
        summary.draws
    );
    log!("Average game length: {:.1} moves", summary.average_moves());

    Ok(())
}
