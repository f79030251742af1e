//! CLI command definitions and handlers

use clap::Subcommand;
use std::path::PathBuf;

use crate::core::client::GoogleTranslator;

/// Commands for gtranslate
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Translate a piece of text
    Translate {
        /// Source language code
        #[arg(short, long)]
        from: String,

        /// Target language code
        #[arg(short, long)]
        to: String,

        /// Text to translate
        text: String,
    },

    /// Translate every non-empty line of a text file
    Batch {
        /// Input file (required)
        #[arg(short = 'i', long)]
        file: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Source language code
        #[arg(short, long)]
        from: String,

        /// Target language code
        #[arg(short, long)]
        to: String,
    },

    /// List supported languages and direct pairs
    Languages,

    /// Start HTTP API server
    Server {
        /// Bind address (default: 127.0.0.1)
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Listen port (default: 8000)
        #[arg(short, long, default_value_t = 8000)]
        port: u16,
    },
}

/// Handle single text translation command
pub async fn handle_translate(
    translator: GoogleTranslator,
    text: String,
    from: String,
    to: String,
) -> anyhow::Result<()> {
    use tracing::debug;

    debug!("Path: {:?}", translator.resolve_path(&from, &to));

    let translation = translator.translate(&text, &from, &to).await?;
    println!("{}", translation);

    Ok(())
}

/// Handle batch translation command
pub async fn handle_batch(
    translator: GoogleTranslator,
    file: PathBuf,
    output: Option<PathBuf>,
    from: String,
    to: String,
) -> anyhow::Result<()> {
    use crate::core::models::TranslationRequest;
    use indicatif::{ProgressBar, ProgressStyle};
    use std::time::Instant;
    use tracing::info;

    let start_time = Instant::now();

    let content = std::fs::read_to_string(&file)?;
    let lines: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() {
        anyhow::bail!("No text found in {}", file.display());
    }

    info!("Starting batch translation");
    info!("Input: {}", file.display());
    info!("Pair: {}|{}", from, to);
    info!("Rate control: {}", translator.is_using_rate_control());

    // Create progress bar
    let pb = ProgressBar::new(lines.len() as u64);
    pb.set_style(ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")?
        .progress_chars("=>-"));

    let mut translated = Vec::with_capacity(lines.len());
    let mut failed = 0;

    for line in lines {
        let request = TranslationRequest::new(line, &from, &to);
        match translator.translate_request(&request).await {
            Ok(result) => translated.push(result.translation),
            Err(e) => {
                failed += 1;
                pb.set_message(format!("Failed: {}", e));
                translated.push(line.to_string());
            }
        }
        pb.inc(1);
    }

    pb.finish_with_message("Completed");

    let joined = translated.join("\n");
    match output {
        Some(path) => {
            std::fs::write(&path, joined + "\n")?;
            info!("Output: {}", path.display());
        }
        None => println!("{}", joined),
    }

    let duration = start_time.elapsed();
    info!(
        "Completed: {} translated, {} failed in {:?}",
        translated.len() - failed,
        failed,
        duration
    );

    if failed > 0 {
        eprintln!("{} of {} lines failed and were left untranslated", failed, translated.len());
    }

    Ok(())
}

/// Handle languages command
pub fn handle_languages() {
    use crate::core::language::{direct_pairs, Language};

    println!("Languages:");
    for lang in Language::ALL {
        println!("  {:<6} {}", lang.code(), lang.name());
    }

    println!("\nDirect pairs:");
    for pair in direct_pairs() {
        println!("  {}", pair);
    }
}

/// Handle server command
pub async fn handle_server(translator: GoogleTranslator, host: String, port: u16) -> anyhow::Result<()> {
    use crate::server::api::run_server;
    use tracing::info;

    info!("Starting HTTP server on {}:{}", host, port);
    println!("Server starting on http://{}:{}", host, port);

    run_server(host, port, translator).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_support::{spawn_mock_service, test_config};
    use tokio_test::{assert_err, assert_ok};

    #[tokio::test]
    async fn test_batch_writes_translated_lines() {
        let service = spawn_mock_service(None).await;
        let translator = GoogleTranslator::new(test_config(&service.endpoint, false)).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.txt");
        let output = dir.path().join("output.txt");
        std::fs::write(&input, "hello\n\n   \n!no-result\nhola\n").unwrap();

        assert_ok!(
            handle_batch(
                translator,
                input,
                Some(output.clone()),
                "en".to_string(),
                "fr".to_string(),
            )
            .await
        );

        let written = std::fs::read_to_string(&output).unwrap();
        assert_eq!(written, "Bonjour\n!no-result\nen|fr:hola\n");

        // Blank lines are never sent.
        assert_eq!(service.requests().len(), 3);
    }

    #[tokio::test]
    async fn test_batch_rejects_empty_input() {
        let service = spawn_mock_service(None).await;
        let translator = GoogleTranslator::new(test_config(&service.endpoint, false)).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("empty.txt");
        let output = dir.path().join("output.txt");
        std::fs::write(&input, "\n  \n").unwrap();

        let err = assert_err!(
            handle_batch(
                translator,
                input,
                Some(output.clone()),
                "en".to_string(),
                "fr".to_string(),
            )
            .await
        );
        assert!(err.to_string().contains("No text found"));
        assert!(!output.exists());
        assert!(service.requests().is_empty());
    }
}
