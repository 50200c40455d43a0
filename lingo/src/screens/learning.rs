use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use colored::Colorize;
use generation::VocabularyWord;
use tracing::{debug, warn};

use super::{parse_navigation, print_header, with_spinner, Deck, Navigation, SessionContext, Slot};
use crate::translations::fill;
use crate::utilities::input;

/// Bytes of a base64 `data:` URI, `None` for anything else.
pub fn decode_data_uri(uri: &str) -> Option<Vec<u8>> {
    let (header, payload) = uri.strip_prefix("data:")?.split_once(',')?;
    if !header.ends_with(";base64") {
        return None;
    }
    STANDARD.decode(payload.trim()).ok()
}

/// File name for a card picture, stable for the same word and position.
pub fn image_file_name(index: usize, english_word: &str) -> String {
    let mut slug = String::with_capacity(english_word.len());
    for c in english_word.trim().chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
        } else if !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_matches('-');
    if slug.is_empty() {
        format!("{index}.png")
    } else {
        format!("{index}-{slug}.png")
    }
}

async fn save_image(dir: &Path, file_name: &str, bytes: &[u8]) -> std::io::Result<PathBuf> {
    tokio::fs::create_dir_all(dir).await?;
    let path = dir.join(file_name);
    tokio::fs::write(&path, bytes).await?;
    Ok(path)
}

/// Writes the picture behind `uri` for card `index`; anything unusable marks the card failed.
async fn store_image(dir: &Path, index: usize, english_word: &str, uri: &str) -> Slot<PathBuf> {
    let Some(bytes) = decode_data_uri(uri) else {
        warn!(english_word, "image is not a base64 data URI");
        return Slot::Failed;
    };
    match save_image(dir, &image_file_name(index, english_word), &bytes).await {
        Ok(path) => {
            debug!(path = %path.display(), "saved flashcard image");
            Slot::Ready(path)
        }
        Err(error) => {
            warn!(%error, "could not save flashcard image");
            Slot::Failed
        }
    }
}

async fn load_image(ctx: &SessionContext<'_>, index: usize, word: &VocabularyWord) -> Slot<PathBuf> {
    let generated = with_spinner(
        ctx.t.loading_image,
        ctx.generator.generate_image(&word.english_word),
    )
    .await;
    match generated {
        Ok(uri) => store_image(ctx.image_dir, index, &word.english_word, &uri).await,
        Err(_) => Slot::Failed,
    }
}

/// Flashcards: one word per card with a generated picture. Returns when the learner goes
/// back to the menu or moves past the last card.
pub async fn run(ctx: &SessionContext<'_>, words: &[VocabularyWord]) -> anyhow::Result<()> {
    let mut deck: Deck<PathBuf> = Deck::new(words.len());
    if deck.is_empty() {
        return Ok(());
    }
    loop {
        let word = &words[deck.index()];
        print_header(ctx.t, deck.index() + 1, deck.len(), None);
        println!("{}", word.source_word.bold().blue());
        println!("{}", word.target_word);
        if let Slot::Pending = deck.slot() {
            let slot = load_image(ctx, deck.index(), word).await;
            deck.set_slot(slot);
        }
        match deck.slot() {
            Slot::Ready(path) => println!(
                "{}",
                fill(ctx.t.image_saved, &[("path", &path.display().to_string())]).dimmed()
            ),
            _ => println!("{}", ctx.t.image_not_available.dimmed()),
        }
        loop {
            let line = input(&format!("{} > ", ctx.t.navigation))?;
            match parse_navigation(&line) {
                Navigation::Next => {
                    if !deck.next() {
                        return Ok(());
                    }
                }
                Navigation::Prev => {
                    if !deck.prev() {
                        continue;
                    }
                }
                Navigation::Menu => return Ok(()),
                Navigation::Retry | Navigation::Unknown => {
                    println!("{}", ctx.t.unknown_command);
                    continue;
                }
            }
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_png_data_uri() {
        let uri = format!("data:image/png;base64,{}", STANDARD.encode([0x89, b'P', b'N', b'G']));
        assert_eq!(decode_data_uri(&uri), Some(vec![0x89, b'P', b'N', b'G']));
    }

    #[test]
    fn rejects_non_base64_uris() {
        assert_eq!(decode_data_uri("https://example.com/dog.png"), None);
        assert_eq!(decode_data_uri("data:text/plain,hello"), None);
        assert_eq!(decode_data_uri("data:image/png;base64,@@@"), None);
    }

    #[test]
    fn file_names_are_slugged() {
        assert_eq!(image_file_name(0, "Dog"), "0-dog.png");
        assert_eq!(image_file_name(12, " to go / walk "), "12-to-go-walk.png");
        assert_eq!(image_file_name(3, "?!"), "3.png");
    }

    #[tokio::test]
    async fn generated_picture_is_written_for_its_card() {
        let dir = std::env::temp_dir().join(format!("lingo-cards-{}", std::process::id()));
        let uri = format!("data:image/png;base64,{}", STANDARD.encode(b"png"));
        let slot = store_image(&dir, 4, "Dog", &uri).await;
        assert_eq!(slot, Slot::Ready(dir.join("4-dog.png")));
        assert_eq!(tokio::fs::read(dir.join("4-dog.png")).await.unwrap(), b"png");
        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }

    #[tokio::test]
    async fn unusable_picture_marks_the_card_failed() {
        let dir = std::env::temp_dir().join(format!("lingo-bad-cards-{}", std::process::id()));
        let slot = store_image(&dir, 0, "dog", "https://example.com/dog.png").await;
        assert_eq!(slot, Slot::Failed);
        assert!(!dir.exists());
    }
}
