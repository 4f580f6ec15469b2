use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};
use client_core::{load_settings, ApiClient, LegalBackend, TransportError, UploadFile};
use shared::domain::{category_style, ComplaintForm, ConversationTurn, Language};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "needhi-cli", about = "Command line client for the Needhi legal assistant")]
struct Args {
    /// Backend base URL; overrides needhi.toml and the environment.
    #[arg(long, global = true)]
    api_url: Option<String>,
    /// Language for answers and drafts. Questions are auto-detected when omitted.
    #[arg(long, global = true)]
    language: Option<Language>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Ask a legal question.
    Ask { question: String },
    /// Classify a legal issue into a category.
    Classify { description: String },
    /// Generate a complaint draft.
    Draft(ComplaintArgs),
    /// Download the complaint as a PDF.
    Pdf {
        #[command(flatten)]
        complaint: ComplaintArgs,
        /// Output directory (defaults to the configured download directory).
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Upload a .txt or .pdf document for indexing.
    Upload { path: PathBuf },
    /// Re-index every document on the backend.
    Reindex,
    /// Show the document index status.
    Status,
    /// Check backend health.
    Health,
}

#[derive(ClapArgs, Debug, Clone)]
struct ComplaintArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    address: String,
    #[arg(long)]
    opponent: String,
    #[arg(long)]
    issue: String,
    #[arg(long)]
    location: String,
    #[arg(long)]
    date: String,
}

impl ComplaintArgs {
    fn into_form(self) -> Result<ComplaintForm> {
        let form = ComplaintForm {
            complainant_name: self.name,
            complainant_address: self.address,
            opponent_name: self.opponent,
            issue_description: self.issue,
            location: self.location,
            date: self.date,
        };
        if let Err(err) = form.validate() {
            tracing::warn!(%err, "complaint form refused before sending");
            return Err(err.into());
        }
        Ok(form)
    }
}

/// The PDF always lands directly inside `dir`.
fn pdf_target(dir: &Path, form: &ComplaintForm) -> Result<PathBuf> {
    let target = dir.join(form.pdf_filename());
    if target.parent() != Some(dir) {
        bail!("{} is not a file inside {}", target.display(), dir.display());
    }
    Ok(target)
}

fn backend_error(err: TransportError) -> anyhow::Error {
    match err.detail() {
        Some(detail) => anyhow!("{err}: {detail}"),
        None => anyhow!(err),
    }
}

fn print_answer(turn: &ConversationTurn) {
    if let Some(category) = turn.category.as_deref() {
        println!("{} {category}", category_style(category).emoji);
    }
    println!("{}", turn.content);
    if !turn.sources.is_empty() {
        println!();
        println!("Sources:");
        for (index, citation) in turn.sources.iter().enumerate() {
            println!("  [{}] {}: {}", index + 1, citation.source_label, citation.excerpt);
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();
    let args = Args::parse();

    let mut settings = load_settings();
    if let Some(api_url) = args.api_url {
        settings.api_url = api_url;
    }
    let client = ApiClient::new(&settings).map_err(backend_error)?;
    let language = args.language.unwrap_or_default();
    tracing::debug!(
        api_url = %settings.api_url,
        language = language.code(),
        "settings resolved"
    );

    match args.command {
        Command::Ask { question } => {
            let question = question.trim();
            if question.is_empty() {
                bail!("question is empty");
            }
            let response = client
                .ask(question, args.language)
                .await
                .map_err(backend_error)?;
            print_answer(&ConversationTurn::from(response));
        }
        Command::Classify { description } => {
            let description = description.trim();
            if description.is_empty() {
                bail!("description is empty");
            }
            let result = client.classify(description).await.map_err(backend_error)?;
            let style = category_style(&result.category);
            match result.confidence.as_deref() {
                Some(confidence) => {
                    println!("{} {} ({confidence})", style.emoji, result.category)
                }
                None => println!("{} {}", style.emoji, result.category),
            }
            println!("{}", result.explanation);
        }
        Command::Draft(complaint) => {
            let form = complaint.into_form()?;
            let draft = client
                .draft_complaint(&form, language)
                .await
                .map_err(backend_error)?;
            println!("{}", draft.draft_text);
        }
        Command::Pdf { complaint, out } => {
            let form = complaint.into_form()?;
            let dir = out.unwrap_or_else(|| settings.resolved_download_dir());
            let target = pdf_target(&dir, &form)?;
            let bytes = client
                .complaint_pdf(&form, language)
                .await
                .map_err(backend_error)?;
            tokio::fs::create_dir_all(&dir)
                .await
                .with_context(|| format!("creating {}", dir.display()))?;
            tokio::fs::write(&target, &bytes)
                .await
                .with_context(|| format!("writing {}", target.display()))?;
            tracing::debug!(bytes = bytes.len(), path = %target.display(), "pdf written");
            println!("Saved {} ({} bytes)", target.display(), bytes.len());
        }
        Command::Upload { path } => {
            let file = UploadFile::from_path(&path).await.map_err(backend_error)?;
            let response = client.upload_document(file).await.map_err(backend_error)?;
            println!("{} ({} chunks)", response.message, response.chunks_created);
        }
        Command::Reindex => {
            let response = client.index_all().await.map_err(backend_error)?;
            println!(
                "{}: {} docs, {} chunks",
                response.message, response.documents_processed, response.total_chunks
            );
        }
        Command::Status => {
            let status = client.index_status().await.map_err(backend_error)?;
            println!("Vectors:     {}", status.total_vectors);
            println!("Documents:   {}", status.documents_on_disk.len());
            println!("Index ready: {}", if status.index_loaded { "yes" } else { "no" });
            for name in &status.documents_on_disk {
                println!("  - {name}");
            }
        }
        Command::Health => {
            let health = client.health().await.map_err(backend_error)?;
            let state = health.status.as_deref().unwrap_or("unknown");
            println!("{} ({state})", settings.api_url);
            if !health.is_healthy() {
                bail!("backend reported status `{state}`");
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complaint_flags() -> Vec<&'static str> {
        vec![
            "--name",
            "Rajesh Kumar",
            "--address",
            "12, Gandhi Street",
            "--opponent",
            "ABC Pvt. Ltd.",
            "--issue",
            "Deposit withheld",
            "--location",
            "Chennai",
            "--date",
            "2024-05-01",
        ]
    }

    #[test]
    fn parses_global_flags_after_subcommand() {
        let args = Args::try_parse_from([
            "needhi-cli",
            "ask",
            "What is Section 498A of IPC?",
            "--language",
            "ta",
        ])
        .expect("args");
        assert_eq!(args.language, Some(Language::Ta));
        assert!(matches!(args.command, Command::Ask { ref question } if question.contains("498A")));
    }

    #[test]
    fn rejects_unknown_language() {
        assert!(Args::try_parse_from(["needhi-cli", "--language", "fr", "health"]).is_err());
    }

    #[test]
    fn pdf_command_builds_valid_form() {
        let mut argv = vec!["needhi-cli", "pdf", "--out", "/tmp/out"];
        argv.extend(complaint_flags());
        let args = Args::try_parse_from(argv).expect("args");
        let Command::Pdf { complaint, out } = args.command else {
            panic!("expected pdf command");
        };
        assert_eq!(out, Some(PathBuf::from("/tmp/out")));
        let form = complaint.into_form().expect("form");
        assert_eq!(form.pdf_filename(), "complaint_Rajesh_Kumar.pdf");
    }

    #[test]
    fn blank_field_fails_before_any_request() {
        let mut argv = vec!["needhi-cli", "draft"];
        argv.extend(complaint_flags());
        let position = argv.iter().position(|arg| *arg == "Chennai").expect("location");
        argv[position] = "   ";
        let args = Args::try_parse_from(argv).expect("args");
        let Command::Draft(complaint) = args.command else {
            panic!("expected draft command");
        };
        let err = complaint.into_form().expect_err("blank location");
        assert!(err.to_string().contains("location"));
    }

    #[test]
    fn pdf_target_is_a_bare_file_in_the_output_dir() {
        let mut argv = vec!["needhi-cli", "pdf"];
        argv.extend(complaint_flags());
        argv[3] = "Ravi S/O Kumar";
        let args = Args::try_parse_from(argv).expect("args");
        let Command::Pdf { complaint, .. } = args.command else {
            panic!("expected pdf command");
        };
        let form = complaint.into_form().expect("form");
        let dir = Path::new("/tmp/out");
        let target = pdf_target(dir, &form).expect("target");
        assert_eq!(target, dir.join("complaint_Ravi_S_O_Kumar.pdf"));
    }
}
