use std::{
    path::PathBuf,
    process::ExitCode,
};

use clap::{
    Parser,
    Subcommand,
};
use tango::{
    logging::init_logging,
    persistence::Storage,
    session::enrichment::{
        enrich,
        RomajiTransliterator,
        TemplateSentences,
        WordCard,
    },
    BuiltinSeed,
    EngineConfig,
    TangoError,
    VocabEngine,
};

#[derive(Parser)]
#[command(name = "tango", about = "Daily vocabulary batches with look-alike warnings")]
struct Cli {
    /// Directory holding the catalog, learner state and settings
    #[arg(long)]
    data_dir: Option<PathBuf>,

    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Queue and learned counts
    Stats,
    /// Show today's words without committing them
    Propose {
        #[arg(long)]
        size: Option<usize>,
    },
    /// Show today's words and mark them as learned
    Study {
        #[arg(long)]
        size: Option<usize>,
    },
    /// Delete all progress
    Reset,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(&cli.log_level) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), TangoError> {
    let storage = cli.data_dir.map(Storage::new).unwrap_or_else(Storage::app_default);
    let config = EngineConfig::load(&storage)?;
    let mut engine = VocabEngine::open(&storage, config, &BuiltinSeed)?;

    match cli.command {
        Command::Stats => print_stats(&engine),
        Command::Propose { size } => {
            let session = engine.propose_with(size.unwrap_or(engine.config().batch_size));
            if session.is_empty() {
                println!("No more words to learn!");
            } else {
                enrich(&session, &TemplateSentences, &RomajiTransliterator)
                    .iter()
                    .for_each(print_card);
            }
        }
        Command::Study { size } => {
            let Some(session) = engine.start_session(size) else {
                println!("No more words to learn!");
                return Ok(());
            };
            enrich(session, &TemplateSentences, &RomajiTransliterator).iter().for_each(print_card);

            let committed = engine.finish_session()?;
            println!("Great job! {} words added to studied list.", committed.len());
            print_stats(&engine);
        }
        Command::Reset => {
            engine.reset()?;
            println!("Progress cleared.");
            print_stats(&engine);
        }
    }

    Ok(())
}

fn print_stats(engine: &VocabEngine) {
    let progress = engine.stats();
    println!("Queue: {}  Studied: {}", progress.queued, progress.learned);
}

fn print_card(card: &WordCard) {
    let item = &card.item;
    println!("\n{} ({})", item.word, item.kana);
    println!("  Meaning: {}", item.meaning);
    println!("  Level: {} | Rank: {}", item.level, item.rank);

    println!("  Example sentences:");
    for example in &card.examples {
        println!("    {}", example.text);
        println!("    {}", example.romanized);
    }

    if !card.contrasts.is_empty() {
        println!("  Distinguish from these known words:");
        for word in &card.contrasts {
            println!("    - {} ({}): {}", word.word, word.kana, word.meaning);
        }
    }

    if !card.roots.is_empty() {
        println!("  Shared kanji:");
        for word in &card.roots {
            println!("    - {} ({}): {}", word.word, word.kana, word.meaning);
        }
    }
}
