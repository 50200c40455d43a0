use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use generation::{CefrLevel, Generator, Language, VocabularyWord};
use tracing::{debug, info, warn};

use config::Config;
use error::{print_banner, report, ScreenError};
use menu::{Category, GameMode, Menu, Mode, SessionRequest};
use screens::pronunciation::Speech;
use screens::{with_spinner, Outcome, SessionContext};
use speech::{recognizer_from_config, synthesizer_from_config};
use storage::Storage;
use translations::{fill, translations, Translations};
use utilities::{input, is_end_of_input};

mod config;
mod error;
mod logging;
mod menu;
mod results;
mod screens;
mod speech;
mod storage;
mod translations;
mod utilities;

#[derive(Debug, Parser)]
#[command(version, about = "Practice a language with generated lessons")]
struct Cli {
    /// Configuration file, optional.
    #[arg(long, default_value = "lingo.toml")]
    config: PathBuf,
    /// Seed for answer-option shuffling.
    #[arg(long)]
    seed: Option<u64>,
    /// Log filter, e.g. `debug` or `generation=debug`.
    #[arg(long)]
    log_level: Option<String>,
}

struct App {
    config: Config,
    storage: Storage,
    generator: Generator,
    menu: Menu,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let mut config = Config::load(&cli.config)?;
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    let _log_guard = logging::init_tracing(&config.logging);
    info!(database = %config.storage.database_url, "starting");

    let storage = Storage::initialize(&config.storage.database_url).await?;
    let generator = Generator::new(config.gemini(), config.seed);
    let menu = Menu::new(
        config.defaults.ui_language,
        config.defaults.learning_language,
        config.defaults.level,
    );
    let mut app = App {
        config,
        storage,
        generator,
        menu,
    };
    print_status(&app.menu);
    loop {
        let t = translations(app.menu.ui_language());
        let line = match input(">> ") {
            Ok(line) => line,
            Err(error) if error.kind() == std::io::ErrorKind::UnexpectedEof => break,
            Err(error) => return Err(error.into()),
        };
        let line = line.trim();
        let mut command_parts = line.split_ascii_whitespace();
        let Some(command) = command_parts.next() else {
            continue;
        };
        let argument = command_parts.collect::<Vec<&str>>().join(" ");
        match command {
            "exit" | "quit" | "q" => break,
            "help" | "h" => print_help(),
            "status" | "s" => print_status(&app.menu),
            "learn" => match argument.parse::<Language>() {
                Ok(language) => {
                    app.menu.set_learning_language(language);
                    print_status(&app.menu);
                }
                Err(error) => println!("{error}"),
            },
            "ui" => match argument.parse::<Language>() {
                Ok(language) => {
                    app.menu.set_ui_language(language);
                    print_status(&app.menu);
                }
                Err(error) => println!("{error}"),
            },
            "level" => match argument.parse::<CefrLevel>() {
                Ok(level) => {
                    app.menu.set_level(level);
                    print_status(&app.menu);
                }
                Err(error) => println!("{error}"),
            },
            "category" | "c" => match argument.parse::<Category>() {
                Ok(category) => {
                    app.menu.set_category(category);
                    print_status(&app.menu);
                }
                Err(error) => println!("{error}"),
            },
            "mode" | "m" => match argument.parse::<Mode>() {
                Ok(mode) => match app.menu.set_mode(mode) {
                    Ok(()) => print_status(&app.menu),
                    Err(error) => println!("{error}"),
                },
                Err(error) => println!("{error}"),
            },
            "length" | "n" => match argument.parse::<usize>() {
                Ok(length) => {
                    let stored = app.menu.set_quiz_length(length);
                    println!("{}: {stored}", t.length_label);
                }
                Err(_) => {
                    let limits = app.menu.limits();
                    println!("expected a number between {} and {}", limits.min, limits.max);
                }
            },
            "start" | "go" => match app.menu.start() {
                Ok(request) => match start_session(&app, request).await {
                    Ok(()) => {}
                    Err(error) if is_end_of_input(&error) => break,
                    Err(error) => return Err(error),
                },
                Err(_) => print_banner(t.not_startable),
            },
            "seen" => show_seen(&app.storage, app.menu.learning_language(), t).await,
            "forget" => {
                let language = app.menu.learning_language();
                match app.storage.clear_seen_words(language).await {
                    Ok(true) => println!("forgot the words seen in {}", language.name()),
                    Ok(false) => println!("no words seen in {} yet", language.name()),
                    Err(error) => {
                        warn!(%error, "could not clear seen words");
                        print_banner(t.storage_error);
                    }
                }
            }
            _ => println!("{} ({command})", t.unknown_command),
        }
    }
    Ok(())
}

fn print_status(menu: &Menu) {
    let t = translations(menu.ui_language());
    let none = "-".dimmed().to_string();
    println!("========================================");
    println!(
        "{}",
        fill(t.tagline, &[("language", menu.learning_language().native_name())]).bold()
    );
    println!("{}", t.menu_title.underline());
    println!(
        "  {}: {} ({})",
        t.learning_language_label,
        menu.learning_language().native_name(),
        menu.learning_language().code()
    );
    println!(
        "  {}: {} ({})",
        t.ui_language_label,
        menu.ui_language().native_name(),
        menu.ui_language().code()
    );
    println!("  {}: {}", t.level_label, menu.level());
    println!(
        "  {}: {}",
        t.category_label,
        menu.category().map_or(none.clone(), |category| category.to_string())
    );
    println!(
        "  {}: {}",
        t.mode_label,
        menu.mode().map_or(none, |mode| mode.to_string())
    );
    let limits = menu.limits();
    println!(
        "  {}: {} [{}-{}]",
        t.length_label,
        menu.quiz_length(),
        limits.min,
        limits.max
    );
    println!("========================================");
}

fn print_help() {
    let languages = Language::ALL
        .iter()
        .map(|language| language.code())
        .collect::<Vec<&str>>()
        .join("|");
    let levels = CefrLevel::ALL
        .iter()
        .map(|level| level.as_str())
        .collect::<Vec<&str>>()
        .join("|");
    println!("learn <{languages}>      language to learn");
    println!("ui <{languages}>         interface language");
    println!("level <{levels}>");
    println!("category <vocabulary|grammar|pronunciation>");
    println!("mode <learn|quiz>");
    println!("length <n>               number of quiz questions");
    println!("status                   show the current choice");
    println!("start                    begin the session");
    println!("seen                     how many words were already generated");
    println!("forget                   clear the generated words for this language");
    println!("quit");
}

async fn show_seen(storage: &Storage, language: Language, t: &Translations) {
    match storage.seen_words_summary(language).await {
        Ok(Some(summary)) => println!(
            "{} words seen in {} (last updated {})",
            summary.count,
            language.name(),
            summary.updated_at.format("%Y-%m-%d %H:%M")
        ),
        Ok(None) => println!("no words seen in {} yet", language.name()),
        Err(error) => {
            warn!(%error, "could not read seen words");
            print_banner(t.storage_error);
        }
    }
}

/// Generates the word list, excluding words seen before, and records the new ones.
/// The word history only steers generation, so failing to read or save it is logged
/// and the session goes on.
async fn load_words(
    storage: &Storage,
    generator: &Generator,
    request: &SessionRequest,
    t: &Translations,
) -> Option<Vec<VocabularyWord>> {
    let exclude = storage
        .seen_words(request.learning_language)
        .await
        .unwrap_or_else(|error| {
            warn!(%error, "could not read seen words, generating without exclusions");
            Vec::new()
        });
    debug!(excluded = exclude.len(), count = request.count, "requesting word list");
    let words = with_spinner(
        t.loading,
        generator.generate_word_list(
            request.count,
            request.learning_language,
            request.ui_language,
            request.level,
            &exclude,
        ),
    )
    .await;
    match words {
        Ok(words) => {
            let recorded = storage
                .add_seen_words(
                    request.learning_language,
                    words.iter().map(|word| &word.source_word[..]),
                )
                .await;
            if let Err(error) = recorded {
                warn!(%error, "could not record seen words");
            }
            Some(words)
        }
        Err(error) => {
            report(&ScreenError::from(error), t);
            None
        }
    }
}

async fn start_session(app: &App, request: SessionRequest) -> anyhow::Result<()> {
    let t = translations(request.ui_language);
    info!(
        game_mode = ?request.game_mode,
        count = request.count,
        learning = request.learning_language.code(),
        "starting session"
    );
    let Some(words) = load_words(&app.storage, &app.generator, &request, t).await else {
        return Ok(());
    };
    let ctx = SessionContext {
        generator: &app.generator,
        t,
        ui_language: request.ui_language,
        learning_language: request.learning_language,
        level: request.level,
        image_dir: &app.config.storage.image_dir,
    };
    let outcome = match request.game_mode {
        GameMode::VocabLearn => {
            screens::learning::run(&ctx, &words).await?;
            Outcome::Left
        }
        GameMode::GrammarLearn => {
            screens::grammar_learn::run(&ctx, &words).await?;
            Outcome::Left
        }
        GameMode::VocabQuiz => screens::quiz::run(&ctx, &words).await?,
        GameMode::GrammarQuiz => screens::grammar_quiz::run(&ctx, &words).await?,
        GameMode::PronunciationPractice => {
            let recognizer = recognizer_from_config(&app.config.speech);
            let synthesizer = synthesizer_from_config(&app.config.speech);
            let speech = Speech {
                recognizer: recognizer.as_ref(),
                synthesizer: synthesizer.as_ref(),
            };
            screens::pronunciation::run(&ctx, &speech, &words).await?
        }
    };
    if let Outcome::Completed { score, total } = outcome {
        if request.game_mode.is_scored() {
            results::show_results(score, total, t)?;
        }
    }
    println!("{}", t.back_to_menu.dimmed());
    print_status(&app.menu);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use generation::{GenerationError, GenerativeBackend, TextRequest};

    /// Answers every word-list request with `reply` and keeps the prompts it saw.
    struct WordListBackend {
        reply: Option<&'static str>,
        prompts: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl GenerativeBackend for WordListBackend {
        async fn generate_json(&self, request: TextRequest) -> Result<String, GenerationError> {
            self.prompts.lock().unwrap().push(request.prompt);
            self.reply
                .map(str::to_owned)
                .ok_or(GenerationError::EmptyResponse)
        }

        async fn generate_image(&self, _prompt: &str) -> Result<String, GenerationError> {
            Err(GenerationError::EmptyResponse)
        }
    }

    fn backend(reply: Option<&'static str>) -> Arc<WordListBackend> {
        Arc::new(WordListBackend {
            reply,
            prompts: Mutex::new(Vec::new()),
        })
    }

    fn request() -> SessionRequest {
        SessionRequest {
            game_mode: GameMode::VocabQuiz,
            count: 2,
            ui_language: Language::En,
            learning_language: Language::De,
            level: CefrLevel::A1,
        }
    }

    #[tokio::test]
    async fn generated_words_are_recorded_as_seen() {
        let storage = Storage::in_memory().await.unwrap();
        storage.add_seen_words(Language::De, ["Katze"]).await.unwrap();
        let backend = backend(Some(
            r#"[{"sourceWord":"Hund","englishWord":"dog","targetWord":"dog"},
                {"sourceWord":"Katze","englishWord":"cat","targetWord":"cat"}]"#,
        ));
        let generator = Generator::with_backend(backend.clone(), Some(1));
        let t = translations(Language::En);

        let words = load_words(&storage, &generator, &request(), t).await.unwrap();

        assert_eq!(words.len(), 2);
        assert_eq!(
            storage.seen_words(Language::De).await.unwrap(),
            vec!["Katze", "Hund"]
        );
        assert!(backend.prompts.lock().unwrap()[0].contains("Katze"));
    }

    #[tokio::test]
    async fn failed_generation_records_nothing() {
        let storage = Storage::in_memory().await.unwrap();
        storage.add_seen_words(Language::De, ["Katze"]).await.unwrap();
        let generator = Generator::with_backend(backend(None), Some(1));
        let t = translations(Language::En);

        assert!(load_words(&storage, &generator, &request(), t).await.is_none());
        assert_eq!(storage.seen_words(Language::De).await.unwrap(), vec!["Katze"]);
    }

    #[tokio::test]
    async fn unreadable_history_does_not_block_the_session() {
        let storage = Storage::in_memory().await.unwrap();
        storage.close().await;
        let backend = backend(Some(
            r#"[{"sourceWord":"Hund","englishWord":"dog","targetWord":"dog"}]"#,
        ));
        let generator = Generator::with_backend(backend, Some(1));
        let t = translations(Language::En);

        let words = load_words(&storage, &generator, &request(), t).await.unwrap();

        assert_eq!(words[0].source_word, "Hund");
    }
}
