use tictactoe_engine::{
    Difficulty, EngineError, GameState, Mark, MatchSettings, Opponent, Outcome, SessionRng, log,
    select_move,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchSummary {
    pub games: u32,
    pub bot_wins: u32,
    pub opponent_wins: u32,
    pub draws: u32,
    pub total_moves: u64,
}

impl MatchSummary {
    pub fn average_moves(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.total_moves as f64 / self.games as f64
    }
}

pub fn run_matches(settings: &MatchSettings) -> Result<MatchSummary, EngineError> {
    let mut rng = match settings.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };

    log!("Starting {} games with seed {}", settings.games, rng.seed());

    let mut summary = MatchSummary {
        games: settings.games,
        bot_wins: 0,
        opponent_wins: 0,
        draws: 0,
        total_moves: 0,
    };

    for _ in 0..settings.games {
        let (outcome, moves) = play_game(settings.bot_difficulty, settings.opponent, &mut rng)?;
        summary.total_moves += u64::from(moves);
        match outcome {
            Outcome::Win(Mark::O) => summary.bot_wins += 1,
            Outcome::Win(_) => summary.opponent_wins += 1,
            Outcome::Draw => summary.draws += 1,
            Outcome::InProgress => unreachable!(),
        }
    }

    Ok(summary)
}

fn play_game(
    difficulty: Difficulty,
    opponent: Opponent,
    rng: &mut SessionRng,
) -> Result<(Outcome, u32), EngineError> {
    let mut state = GameState::new();
    let mut moves = 0u32;

    while state.status == Outcome::InProgress {
        let index = if state.is_bot_turn() {
            select_move(&state.board, difficulty, rng)?
        } else {
            opponent_move(opponent, &state, rng)
        };
        state.place_mark(index)?;
        moves += 1;
    }

    Ok((state.status, moves))
}

fn opponent_move(opponent: Opponent, state: &GameState, rng: &mut SessionRng) -> usize {
    let available_moves = state.board.available_moves();
    match opponent {
        Opponent::Random => available_moves[rng.random_range(0..available_moves.len())],
        Opponent::FirstEmpty => available_moves[0],
    }
}
