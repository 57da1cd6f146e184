//! Interactive review loop.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{Local, Utc};
use trainer_core::{
    parse_dataset, HistoryLog, HistoryRepository, LevelChange, MatchConfig, ProgressRepository,
    ReviewSession, SentenceItem, TrainerSettings,
};

use crate::storage::{JsonHistoryRepository, JsonProgressRepository};

pub fn run(
    data_dir: &Path,
    dataset: Option<PathBuf>,
    strict: bool,
    seed: Option<u64>,
) -> anyhow::Result<()> {
    let items = load_items(dataset)?;
    if items.is_empty() {
        println!("No sentences available. Check the dataset file.");
        return Ok(());
    }

    let progress_repo = JsonProgressRepository::new(data_dir);
    let history_repo = JsonHistoryRepository::new(data_dir);

    let settings = TrainerSettings {
        matching: if strict {
            MatchConfig::strict()
        } else {
            MatchConfig::lenient()
        },
        ..TrainerSettings::default()
    };
    let history = HistoryLog::from_entries(history_repo.load(), settings.history_cap);

    let today = Local::now().date_naive();
    let mut session = match seed {
        Some(seed) => ReviewSession::with_seed(
            items,
            progress_repo.load(),
            history,
            settings,
            today,
            seed,
        ),
        None => ReviewSession::new(items, progress_repo.load(), history, settings, today),
    };

    let stats = session.stats(today);
    println!(
        "{} sentences loaded, {} due today. Type a translation, /skip, or /quit.\n",
        stats.total_items, stats.due_today
    );

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let today = Local::now().date_naive();
        let item = match session.draw(today) {
            Some(item) => item,
            None => {
                println!("No sentences available.");
                return Ok(());
            }
        };
        print_prompt(item);

        let line = match lines.next() {
            Some(line) => line.context("reading stdin")?,
            None => break,
        };
        let input = line.trim();

        let now = Utc::now();
        let outcome = match input {
            "/quit" => break,
            "/skip" => session.skip(today, now)?,
            answer => session.submit_answer(answer, today, now)?,
        };

        if outcome.was_correct {
            println!("  correct — next review {}\n", outcome.due);
        } else if outcome.was_skipped {
            println!("  skipped — expected: {}\n", outcome.expected);
        } else {
            println!("  incorrect — expected: {}\n", outcome.expected);
        }

        match session.last_level_change() {
            LevelChange::Promoted(level) => println!("  ** promoted to {} **\n", level.as_str()),
            LevelChange::Demoted(level) => println!("  ** demoted to {} **\n", level.as_str()),
            LevelChange::Unchanged => {}
        }

        // A failed write loses one round of progress, never the session.
        if let Err(e) = progress_repo.save(session.store()) {
            tracing::warn!(error = %e, "progress not saved this round");
        }
        if let Err(e) = history_repo.save(&session.history().snapshot()) {
            tracing::warn!(error = %e, "history not saved this round");
        }
    }

    let stats = session.stats(Local::now().date_naive());
    println!(
        "\nSession over: {} correct, {} wrong today. Level {}.",
        stats.correct_today,
        stats.wrong_today,
        session.level().as_str()
    );
    Ok(())
}

fn print_prompt(item: &SentenceItem) {
    match item.level {
        Some(level) => println!("[{}] #{} {}", level.as_str(), item.id, item.english),
        None => println!("#{} {}", item.id, item.english),
    }
    print!("> ");
    let _ = io::stdout().flush();
}

fn load_items(dataset: Option<PathBuf>) -> anyhow::Result<Vec<SentenceItem>> {
    let path = match dataset.or_else(|| std::env::var("FRASES_DATASET").ok().map(PathBuf::from)) {
        Some(path) => path,
        None => anyhow::bail!("no dataset given; pass --dataset or set FRASES_DATASET"),
    };

    let text = fs::read_to_string(&path)
        .with_context(|| format!("reading dataset {}", path.display()))?;
    parse_dataset(&text).with_context(|| format!("parsing dataset {}", path.display()))
}
