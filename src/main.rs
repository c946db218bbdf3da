//! Flappy Pipes entry point
//!
//! Native: headless driver that plays autopilot runs and prints a leaderboard.
//! Web: the library's `platform::web` module is the entry point; this binary
//! is empty there.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use anyhow::{Context, Result, bail};
    use clap::Parser;

    use flappy_pipes::sim::{GamePhase, SimulationState, TickInput, tick};
    use flappy_pipes::{GameConfig, HighScores, Preset, RunOutcome, RunRecord};

    /// Play headless autopilot runs and report the scores
    #[derive(Debug, Parser)]
    #[command(name = "flappy-pipes", version)]
    struct Args {
        /// Variant preset: classic, walls or quota
        #[arg(long, default_value = "classic")]
        preset: String,
        /// JSON config file (overrides --preset)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Seed for the pipe layout
        #[arg(long, default_value_t = 12345)]
        seed: u64,
        /// Number of runs to play
        #[arg(long, default_value_t = 5)]
        runs: u32,
        /// Give up on a run after this many ticks
        #[arg(long, default_value_t = 60 * 60 * 5, value_parser = clap::value_parser!(u64).range(1..))]
        max_ticks: u64,
    }

    fn load_config(args: &Args) -> Result<GameConfig> {
        if let Some(path) = &args.config {
            return GameConfig::from_json_file(path)
                .with_context(|| format!("loading config {}", path.display()));
        }
        let Some(preset) = Preset::from_str(&args.preset) else {
            bail!("unknown preset {:?} (expected classic, walls or quota)", args.preset);
        };
        Ok(GameConfig::from_preset(preset))
    }

    /// Play one run from NotStarted until it ends or hits the tick cap
    fn play_run(state: &mut SimulationState, max_ticks: u64) -> RunRecord {
        let input = TickInput {
            autopilot: true,
            ..Default::default()
        };
        while !state.phase.is_terminal() && state.ticks < max_ticks {
            tick(state, &input);
        }
        RunRecord {
            score: state.score,
            ticks: state.ticks,
            outcome: RunOutcome::from_phase(state.phase),
        }
    }

    /// Best score across finished runs and capped runs alike
    fn session_best(finished_best: u32, scores: &HighScores) -> u32 {
        scores.top_score().unwrap_or(0).max(finished_best)
    }

    /// End-of-session summary: best score, then the leaderboard
    fn session_report(finished_best: u32, scores: &HighScores) -> String {
        let mut report = format!(
            "Best score this session: {}\n",
            session_best(finished_best, scores)
        );
        if scores.is_empty() {
            report.push_str("No runs cleared a pipe.\n");
        }
        for (rank, entry) in scores.entries.iter().enumerate() {
            report.push_str(&format!(
                "{:>2}. {:>4} pipes  {:>6} ticks  {}\n",
                rank + 1,
                entry.score,
                entry.ticks,
                entry.outcome.as_str()
            ));
        }
        report
    }

    pub fn run() -> Result<()> {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

        let args = Args::parse();
        let config = load_config(&args)?;
        log::info!("Flappy Pipes (native) starting with seed {}", args.seed);

        let mut state = SimulationState::new(config, args.seed);
        let mut scores = HighScores::new();

        for run in 1..=args.runs {
            let record = play_run(&mut state, args.max_ticks);
            log::info!(
                "Run {}: {} after {} ticks, score {}",
                run,
                record.outcome.as_str(),
                record.ticks,
                record.score
            );
            if let Some(rank) = scores.add_run(record) {
                log::info!("New leaderboard entry at rank {}", rank);
            }

            if state.phase == GamePhase::Running {
                log::warn!("Run {} hit the {} tick cap, ending session", run, args.max_ticks);
                break;
            }
            tick(
                &mut state,
                &TickInput {
                    restart: true,
                    ..Default::default()
                },
            );
        }

        print!("{}", session_report(state.best_score, &scores));
        Ok(())
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {}
