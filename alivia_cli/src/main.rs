use alivia_core::pss::{ANSWER_LABELS, QUESTION_COUNT};
use alivia_core::schedule::rank_by_urgency;
use alivia_core::*;
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "alivia")]
#[command(about = "Healthcare companion: stress scoring and medication schedules", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Use this config file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show medications ordered by urgency or grouped by category
    Meds {
        /// JSON file with the medication list (defaults to sample data)
        #[arg(long)]
        file: Option<PathBuf>,

        /// Evaluate at this time of day (HH:MM) instead of now
        #[arg(long)]
        at: Option<TimeOfDay>,

        /// How to present the list
        #[arg(long, value_enum)]
        by: Option<ViewArg>,

        /// Print the schedule as CSV
        #[arg(long, conflicts_with = "by")]
        csv: bool,
    },

    /// Show the next dose of one medication
    Next {
        /// Medication ID
        id: String,

        /// JSON file with the medication list (defaults to sample data)
        #[arg(long)]
        file: Option<PathBuf>,

        /// Evaluate at this time of day (HH:MM) instead of now
        #[arg(long)]
        at: Option<TimeOfDay>,
    },

    /// Take the PSS-10 stress questionnaire
    Stress {
        /// All ten answers (0-4), comma separated; prompts when omitted
        #[arg(long, value_delimiter = ',')]
        answers: Option<Vec<u8>>,
    },

    /// Classify a PSS-10 total score
    Classify {
        #[arg(value_parser = clap::value_parser!(u8).range(0..=40))]
        score: u8,
    },

    /// Summarize the sample pain history
    Pain,
}

#[derive(Clone, Copy, ValueEnum)]
enum ViewArg {
    Urgency,
    Category,
}

impl From<ViewArg> for config::MedicationView {
    fn from(view: ViewArg) -> Self {
        match view {
            ViewArg::Urgency => config::MedicationView::Urgency,
            ViewArg::Category => config::MedicationView::Category,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        alivia_core::logging::init_with_level("debug");
    } else {
        alivia_core::logging::init();
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Commands::Meds { file, at, by, csv } => {
            let medications = load_medication_list(file.as_deref(), &config)?;
            let now = at.unwrap_or_else(TimeOfDay::now);

            if csv {
                report::write_schedule_csv(io::stdout().lock(), &medications, now)?;
                return Ok(());
            }

            let view = by.map(Into::into).unwrap_or(config.display.default_view);
            match view {
                config::MedicationView::Urgency => cmd_urgency(&medications, now, &config),
                config::MedicationView::Category => cmd_category(&medications, now),
            }
        }
        Commands::Next { id, file, at } => {
            let medications = load_medication_list(file.as_deref(), &config)?;
            cmd_next(&medications, &id, at.unwrap_or_else(TimeOfDay::now), &config)
        }
        Commands::Stress { answers } => cmd_stress(answers),
        Commands::Classify { score } => {
            let level = classify(score);
            println!("Score {}/40: {} stress", score, level);
            println!("  {}", level.description());
            Ok(())
        }
        Commands::Pain => cmd_pain(),
    }
}

/// Pick the medication source: explicit file, then config, then sample data
fn load_medication_list(file: Option<&Path>, config: &Config) -> Result<Vec<Medication>> {
    match file.or(config.data.medications_file.as_deref()) {
        Some(path) => load_medications(path),
        None => {
            tracing::debug!("No medications file configured, using sample data");
            Ok(sample_medications().to_vec())
        }
    }
}

fn cmd_urgency(medications: &[Medication], now: TimeOfDay, config: &Config) -> Result<()> {
    let ranked = rank_by_urgency(medications, now)?;

    println!("\nMedications by urgency (now {})", now);
    println!("─────────────────────────────────────────");

    if ranked.is_empty() {
        println!("  No medications registered");
        return Ok(());
    }

    for entry in &ranked {
        let med = entry.medication;
        match &entry.next {
            Some(next) => {
                let marker = if next.is_due_soon(config.schedule.due_soon_minutes) {
                    "!"
                } else {
                    "→"
                };
                println!(
                    "  {} {} {} [{}]  next {}  in {:.1}h ({})",
                    marker,
                    med.name,
                    med.dose,
                    med.category.label(),
                    next.time,
                    next.hours_remaining,
                    next.compact_label()
                );
            }
            None => {
                println!(
                    "  ✓ {} {} [{}]  all doses taken",
                    med.name,
                    med.dose,
                    med.category.label()
                );
            }
        }
    }

    print_summary(medications);
    Ok(())
}

fn cmd_category(medications: &[Medication], now: TimeOfDay) -> Result<()> {
    let groups = group_by_category(medications);

    println!("\nMedications by category");
    println!("─────────────────────────────────────────");

    if groups.is_empty() {
        println!("  No medications registered");
        return Ok(());
    }

    for group in &groups {
        let noun = if group.medications.len() == 1 {
            "medication"
        } else {
            "medications"
        };
        println!(
            "\n  {} ({} {})",
            group.category.label(),
            group.medications.len(),
            noun
        );

        for med in &group.medications {
            let status = match next_dose(med, now)? {
                Some(next) => format!("next {}", next.time),
                None => "all doses taken".to_string(),
            };
            println!("    • {} {}  {}", med.name, med.dose, status);
        }
    }

    print_summary(medications);
    Ok(())
}

fn print_summary(medications: &[Medication]) {
    let summary = summarize(medications);
    println!();
    println!(
        "  Total: {}  Completed: {}  Pending: {}",
        summary.total, summary.completed, summary.pending
    );
}

fn cmd_next(medications: &[Medication], id: &str, now: TimeOfDay, config: &Config) -> Result<()> {
    let med = medications
        .iter()
        .find(|m| m.id == id)
        .ok_or_else(|| Error::Other(format!("Unknown medication: {}", id)))?;

    match next_dose(med, now)? {
        Some(next) => {
            println!(
                "{} {}: next dose at {} (in {:.1}h)",
                med.name, med.dose, next.time, next.hours_remaining
            );
            if next.is_due_soon(config.schedule.due_soon_minutes) {
                println!("  Due soon!");
            }
        }
        None => println!("{} {}: all doses taken", med.name, med.dose),
    }

    if let Some(ref instructions) = med.instructions {
        println!("  ℹ {}", instructions);
    }

    Ok(())
}

fn cmd_stress(answers: Option<Vec<u8>>) -> Result<()> {
    let questionnaire = match answers {
        Some(values) => {
            if values.len() != QUESTION_COUNT {
                return Err(Error::Questionnaire(format!(
                    "expected {} answers, got {}",
                    QUESTION_COUNT,
                    values.len()
                )));
            }
            let mut questionnaire = Questionnaire::new();
            for value in values {
                questionnaire.answer(value)?;
            }
            questionnaire
        }
        None => prompt_questionnaire()?,
    };

    let assessment = questionnaire.complete(chrono::Utc::now())?;

    println!("\nPSS-10 score: {}/40", assessment.total_score);
    println!("Stress level: {}", assessment.stress_level);
    println!("  {}", assessment.stress_level.description());
    Ok(())
}

fn prompt_questionnaire() -> Result<Questionnaire> {
    let mut questionnaire = Questionnaire::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("PSS-10 perceived stress questionnaire");
    for (value, label) in ANSWER_LABELS.iter().enumerate() {
        println!("  {} = {}", value, label);
    }
    println!("  'b' + Enter to go back");

    while !questionnaire.can_submit() {
        println!(
            "\nQuestion {} of {} ({}%)",
            questionnaire.current_index() + 1,
            QUESTION_COUNT,
            questionnaire.progress_percent()
        );
        println!("{}", questionnaire.current_question());
        print!("> ");
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => {
                return Err(Error::Questionnaire(
                    "input ended before every question was answered".into(),
                ))
            }
        };

        match line.trim() {
            "b" => {
                if !questionnaire.previous() {
                    println!("Already at the first question.");
                }
            }
            input => match input.parse::<u8>() {
                Ok(value) => {
                    if let Err(e) = questionnaire.answer(value) {
                        println!("{}", e);
                    }
                }
                Err(_) => println!("Please answer with a number from 0 to 4."),
            },
        }
    }

    Ok(questionnaire)
}

fn cmd_pain() -> Result<()> {
    let reports = sample_pain_reports();
    let summary = pain::summarize(reports);
    let trend = pain::trend(reports);

    println!("\nPain history ({} reports)", summary.count);
    println!("─────────────────────────────────────────");
    println!("  Average: {:.1}", summary.average);
    println!("  Max:     {}", summary.max);
    println!("  Min:     {}", summary.min);
    println!("  Trend:   {:?}", trend);
    Ok(())
}
