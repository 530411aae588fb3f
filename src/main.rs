mod app;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use kanaquiz::catalog::{self, KanjiGrade, LearningMode, Script};
use kanaquiz::config::Config;
use kanaquiz::engine::scoring::{MasteryFilter, ProgressSummary, sort_weakest_first};
use kanaquiz::generator::{QuestionKind, QuizQuestion};
use kanaquiz::compute_accuracy;
use kanaquiz::session::{Card, QuizSession};

use app::App;

#[derive(Parser)]
#[command(name = "kanaquiz", version, about = "Multiple-choice kana and kanji quizzes")]
struct Cli {
    #[arg(long, global = true, help = "Directory holding saved progress")]
    data_dir: Option<PathBuf>,

    #[arg(long, global = true, help = "Do not save progress for this run")]
    no_save: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Take a quiz
    Quiz {
        #[arg(short, long, help = "hiragana, katakana, mixed or kanji")]
        mode: Option<LearningMode>,

        #[arg(short, long, help = "Kanji grade (grade1..grade6, juniorHigh)")]
        grade: Option<String>,

        #[arg(short, long, help = "Number of questions")]
        count: Option<usize>,

        #[arg(long, help = "Seed for a repeatable quiz")]
        seed: Option<u64>,
    },
    /// Show per-character progress, weakest first
    Progress {
        #[arg(short, long, default_value = "all", help = "all, learning or mastered")]
        filter: MasteryFilter,
    },
    /// Erase all saved progress
    Clear {
        #[arg(short, long, help = "Skip the confirmation prompt")]
        yes: bool,
    },
    /// Study with self-graded flashcards
    Learn {
        #[arg(short, long, help = "hiragana, katakana, mixed or kanji")]
        mode: Option<LearningMode>,

        #[arg(short, long, help = "Kanji grade (grade1..grade6, juniorHigh)")]
        grade: Option<String>,

        #[arg(long, help = "Seed for a repeatable card order")]
        seed: Option<u64>,
    },
    /// List the characters available for a mode
    Chart {
        #[arg(short, long)]
        mode: Option<LearningMode>,
    },
    /// Show or change saved settings
    Config {
        #[arg(long, help = "Default learning mode")]
        mode: Option<LearningMode>,

        #[arg(long, help = "Default number of quiz questions")]
        count: Option<usize>,

        #[arg(long, help = "Accuracy percentage that counts as mastered")]
        threshold: Option<u32>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("kanaquiz=warn".parse()?),
        )
        .init();

    let cli = Cli::parse();

    let mut config = Config::load().unwrap_or_else(|e| {
        tracing::warn!("ignoring unreadable config: {e}");
        Config::default()
    });
    config.validate();
    if let Command::Config {
        mode,
        count,
        threshold,
    } = cli.command
    {
        return edit_config(config, mode, count, threshold);
    }
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir.to_string_lossy().to_string();
    }

    let seed = match &cli.command {
        Command::Quiz { seed, .. } | Command::Learn { seed, .. } => *seed,
        _ => None,
    };
    let mut app = App::new(config, cli.no_save, seed);

    match cli.command {
        Command::Quiz {
            mode, grade, count, ..
        } => {
            let mode = mode.unwrap_or_else(|| app.config.mode());
            let grade = parse_grade(grade)?;
            let count = count.unwrap_or(app.config.question_count);
            run_quiz(&mut app, mode, grade, count)
        }
        Command::Learn { mode, grade, .. } => {
            let mode = mode.unwrap_or_else(|| app.config.mode());
            run_flashcards(&mut app, mode, parse_grade(grade)?)
        }
        Command::Progress { filter } => {
            show_progress(&app, filter);
            Ok(())
        }
        Command::Clear { yes } => clear_progress(&app, yes),
        Command::Chart { mode } => {
            show_chart(mode.unwrap_or_else(|| app.config.mode()));
            Ok(())
        }
        Command::Config { .. } => Ok(()),
    }
}

fn parse_grade(grade: Option<String>) -> Result<Option<KanjiGrade>> {
    grade
        .map(|key| {
            KanjiGrade::from_key(&key).with_context(|| format!("unknown kanji grade '{key}'"))
        })
        .transpose()
}

/// Print a prompt and read one trimmed line. `None` at end of input.
fn read_answer(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    prompt: &str,
) -> Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?.trim().to_string())),
        None => Ok(None),
    }
}

// --- Quiz ---

fn run_quiz(
    app: &mut App,
    mode: LearningMode,
    grade: Option<KanjiGrade>,
    count: usize,
) -> Result<()> {
    let mut session = app.start_quiz(mode, grade, count);
    if session.is_empty() {
        println!("Not enough characters to build a quiz.");
        return Ok(());
    }
    if !app.tracker.is_persistent() {
        println!("Progress for this quiz will not be saved.");
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let total = session.questions.len();

    'questions: while let Some(question) = session.current().cloned() {
        println!();
        println!("[{}/{}] {}", session.cursor + 1, total, prompt_text(&question));
        for (i, option) in question.options.iter().enumerate() {
            println!("  {}) {}", i + 1, option);
        }

        let index = loop {
            let Some(input) = read_answer(&mut lines, "> ")? else {
                break 'questions;
            };
            if input.eq_ignore_ascii_case("q") {
                break 'questions;
            }
            match session.resolve_choice(&input) {
                Some(index) => break index,
                None => println!("Pick 1-{} or type one of the options.", question.options.len()),
            }
        };

        if let Some(outcome) = session.answer_option(index, &app.tracker) {
            if outcome.correct {
                println!("Correct!");
            } else {
                println!("Wrong, the answer was {}", outcome.correct_answer);
            }
        }
    }

    print_result(app, &session, mode);
    Ok(())
}

// --- Flashcards ---

fn run_flashcards(app: &mut App, mode: LearningMode, grade: Option<KanjiGrade>) -> Result<()> {
    let mut deck = app.start_deck(mode, grade);
    if deck.is_empty() {
        println!("No characters to study for this mode.");
        return Ok(());
    }
    if !app.tracker.is_persistent() {
        println!("Progress for this session will not be saved.");
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let (mut studied, mut known_count) = (0, 0);

    'cards: while let Some(card) = deck.current().copied() {
        println!();
        println!("Card {} of {}", deck.position() + 1, deck.len());
        println!("  {}", card.glyph());
        match read_answer(&mut lines, "Press Enter to turn over (q to stop) ")? {
            Some(input) if !input.eq_ignore_ascii_case("q") => {}
            _ => break,
        }
        for line in card.back() {
            println!("  {line}");
        }

        let known = loop {
            let Some(input) = read_answer(&mut lines, "Did you know it? [y/n/q] ")? else {
                break 'cards;
            };
            match input.to_ascii_lowercase().as_str() {
                "y" | "yes" => break true,
                "n" | "no" => break false,
                "q" => break 'cards,
                _ => {}
            }
        };

        app.mark_card(&mut deck, known);
        studied += 1;
        if known {
            known_count += 1;
        }
        if deck.position() == 0 {
            println!();
            println!("Deck finished, reshuffling.");
        }
    }

    println!();
    println!("Studied {studied} cards, {known_count} known.");
    Ok(())
}

fn prompt_text(question: &QuizQuestion) -> String {
    match question.kind {
        QuestionKind::CharToRomaji => format!("What is the romaji for {}?", question.prompt),
        QuestionKind::RomajiToChar => format!("Which character reads '{}'?", question.prompt),
        QuestionKind::KanjiToMeaning => format!("What does {} mean?", question.prompt),
        QuestionKind::MeaningToKanji => format!("Which kanji means '{}'?", question.prompt),
        QuestionKind::KanjiToReading => format!("How is {} read?", question.prompt),
    }
}

fn print_result(app: &App, session: &QuizSession, mode: LearningMode) {
    let result = app.finish_quiz(session, mode);
    println!();
    println!(
        "Score: {}/{} ({}%){}",
        result.correct,
        result.total,
        result.accuracy,
        if result.completed { "" } else { ", quiz stopped early" }
    );
    if !result.missed.is_empty() {
        println!("Review: {}", result.missed.join(" "));
    }
}

// --- Progress ---

fn show_progress(app: &App, filter: MasteryFilter) {
    let threshold = app.config.mastery_threshold;
    let all = app.tracker.get_all_progress();
    let summary = ProgressSummary::from_entries(&all);

    println!(
        "Studied {} characters, {} mastered, overall accuracy {}%",
        summary.characters_studied,
        ProgressSummary::mastered_count(&all, threshold),
        summary.overall_accuracy
    );
    println!(
        "Answers: {} correct, {} incorrect",
        summary.total_correct, summary.total_incorrect
    );

    let mut entries = app.tracker.filtered_progress(filter, threshold);
    if entries.is_empty() {
        println!("No characters match '{filter}'.");
        return;
    }
    sort_weakest_first(&mut entries);

    println!();
    println!(
        "{:<6} {:>8} {:>10} {:>9}  last reviewed",
        "char", "correct", "incorrect", "accuracy"
    );
    for entry in &entries {
        println!(
            "{:<6} {:>8} {:>10} {:>8}%  {}",
            entry.glyph,
            entry.correct,
            entry.incorrect,
            compute_accuracy(entry),
            entry.last_reviewed.format("%Y-%m-%d %H:%M")
        );
    }
}

fn clear_progress(app: &App, yes: bool) -> Result<()> {
    if !yes {
        print!("Erase all saved progress? [y/N] ");
        io::stdout().flush()?;
        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;
        if !matches!(answer.trim(), "y" | "Y" | "yes") {
            println!("Nothing erased.");
            return Ok(());
        }
    }
    app.tracker.clear_all_progress();
    println!("Progress cleared.");
    Ok(())
}

// --- Chart ---

fn show_chart(mode: LearningMode) {
    match mode {
        LearningMode::Kanji => {
            for section in catalog::grade_sections() {
                println!(
                    "{} ({}): {}/{}{}",
                    section.grade.display_name(),
                    section.grade.japanese_name(),
                    section.available_count(),
                    section.total_count(),
                    if section.is_complete() { "" } else { ", more coming" }
                );
                for kanji in section.kanji {
                    let mut back = Card::Kanji(*kanji).back().into_iter();
                    println!("  {}  {}", kanji.glyph, back.next().unwrap_or_default());
                    for line in back {
                        println!("      {line}");
                    }
                }
            }
        }
        LearningMode::Hiragana => print_kana(Script::Hiragana),
        LearningMode::Katakana => print_kana(Script::Katakana),
        LearningMode::Mixed => {
            print_kana(Script::Hiragana);
            println!();
            print_kana(Script::Katakana);
        }
    }
}

fn print_kana(script: Script) {
    println!("{script}");
    for row in catalog::by_script(script).chunks(5) {
        let cells: Vec<String> = row
            .iter()
            .map(|c| format!("{} {:<4}", c.glyph, c.romaji))
            .collect();
        println!("  {}", cells.join(" "));
    }
}

// --- Config ---

fn edit_config(
    mut config: Config,
    mode: Option<LearningMode>,
    count: Option<usize>,
    threshold: Option<u32>,
) -> Result<()> {
    let changed = mode.is_some() || count.is_some() || threshold.is_some();
    if let Some(mode) = mode {
        config.default_mode = mode.to_key().to_string();
    }
    if let Some(count) = count {
        config.question_count = count;
    }
    if let Some(threshold) = threshold {
        config.mastery_threshold = threshold;
    }
    if changed {
        config.validate();
        config.save()?;
        println!("Saved {}", Config::config_path().display());
    }

    println!("mode = {}", config.mode());
    println!("question_count = {}", config.question_count);
    println!("mastery_threshold = {}", config.mastery_threshold);
    println!("data_dir = {}", config.data_dir);
    Ok(())
}
