//! folio — ask questions about a document from the command line.
//!
//! Each invocation ingests the file into a fresh in-memory index, runs the
//! query against it, and prints the answer with page citations. There is
//! no persistence; restarting means re-ingesting.

mod config;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
#[cfg(feature = "pdf")]
use folio_ingest::PdfLoader;
use folio_ingest::{DocumentLoader, IngestionPipeline, TextLoader};
use folio_llm::AnswerEngine;
use folio_retrieval::{LexicalIndex, Retriever};
use uuid::Uuid;

use crate::config::Config;

#[derive(Parser)]
#[command(
    name = "folio",
    version,
    about = "Ask questions about a PDF, answered from its own text with page citations"
)]
struct Cli {
    /// Path to a TOML config file.
    #[arg(long, global = true, default_value = "folio.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Ingest a document and answer a question about it.
    Ask {
        file: PathBuf,
        query: String,
        /// Chunks retrieved per query; defaults to the configured limit.
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Show the top-scoring chunks for a query instead of an answer.
    Chunks {
        file: PathBuf,
        query: String,
        #[arg(long)]
        limit: Option<usize>,
        /// Emit the ranked chunks as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Ingest a document and print its index record.
    Info { file: PathBuf },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let cfg = Config::load(&cli.config)?;

    let index = Arc::new(LexicalIndex::new());
    let pipeline = IngestionPipeline::new(Arc::clone(&index));
    let retriever = Retriever::new(Arc::clone(&index));

    match cli.command {
        Command::Ask { file, query, limit } => {
            let document_id = ingest(&pipeline, &file).await?;
            let ranked = retriever.search_similar(
                &document_id,
                &query,
                limit.unwrap_or(cfg.retrieval.limit),
            );

            let engine = AnswerEngine::new(cfg.provider());
            let answer = engine.answer(&query, &ranked).await;

            println!("{}", answer.text);
            if !answer.citations.is_empty() {
                let pages = answer
                    .citations
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                println!("\nPages: {pages}");
            }
        }
        Command::Chunks {
            file,
            query,
            limit,
            json,
        } => {
            let document_id = ingest(&pipeline, &file).await?;
            let ranked = retriever.search_similar(
                &document_id,
                &query,
                limit.unwrap_or(cfg.retrieval.limit),
            );

            if json {
                println!("{}", serde_json::to_string_pretty(&ranked)?);
            } else if ranked.is_empty() {
                println!("No relevant chunks.");
            } else {
                for scored in &ranked {
                    println!(
                        "score {:>3}  page {:>3}  {}",
                        scored.score, scored.chunk.page_number, scored.chunk.id
                    );
                    println!("  {}", preview(&scored.chunk.text));
                }
            }
        }
        Command::Info { file } => {
            let document_id = ingest(&pipeline, &file).await?;
            let info = index
                .get_document_info(&document_id)
                .context("document not found")?;
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
    }

    Ok(())
}

async fn ingest(pipeline: &IngestionPipeline, file: &Path) -> anyhow::Result<String> {
    let loader = loader_for(file)?;
    let document_id = Uuid::new_v4().to_string();
    let count = pipeline
        .load_and_ingest(loader.as_ref(), file, &document_id)
        .await
        .with_context(|| format!("failed to ingest {}", file.display()))?;
    tracing::info!(count, file = %file.display(), "ingested");
    Ok(document_id)
}

fn loader_for(file: &Path) -> anyhow::Result<Box<dyn DocumentLoader>> {
    let extension = file
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    #[cfg(feature = "pdf")]
    {
        let pdf = PdfLoader::default();
        if pdf.supported_extensions().contains(&extension.as_str()) {
            return Ok(Box::new(pdf));
        }
    }

    let text = TextLoader::default();
    if text.supported_extensions().contains(&extension.as_str()) {
        return Ok(Box::new(text));
    }

    bail!("unsupported file type: {}", file.display());
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn preview(text: &str) -> String {
    const PREVIEW_CHARS: usize = 120;
    let mut out: String = text.chars().take(PREVIEW_CHARS).collect();
    if text.chars().count() > PREVIEW_CHARS {
        out.push('…');
    }
    out
}
