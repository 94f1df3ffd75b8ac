use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use std::sync::Arc;

// Import from our modular crates
use ragkit_core::ChatRequest;
use ragkit_models::{DefaultModelLoader, InferenceConfig, ModelRegistry};
use ragkit_rag::{ApiResponse, RagService};
use ragkit_store::{StoreConfig, VectorStore};

#[derive(Parser)]
#[command(name = "ragkit")]
#[command(about = "Retrieval-augmented generation playground", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Embed a document and store it in the vector index
    Store {
        /// Caller-supplied document id (a later store with the same id overwrites)
        #[arg(long)]
        id: String,
        /// Document text to embed and store
        #[arg(long)]
        text: String,
    },
    /// Ask a question grounded in stored documents
    Chat {
        /// The question to answer
        query: String,
        /// Generation model alias
        #[arg(long, default_value = "gpt-j")]
        llm: String,
        /// Embedding model alias
        #[arg(long, default_value = "minilm")]
        embedding: String,
        /// Vector backend name; anything unrecognized uses memory
        #[arg(long, default_value = "qdrant")]
        backend: String,
        /// Number of documents to retrieve
        #[arg(long, default_value_t = 3)]
        top_k: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();
    let cli = Cli::parse();

    // Initialize components
    let inference = InferenceConfig::from_env();
    let loader = Arc::new(DefaultModelLoader::new(inference.clone()));
    let registry = Arc::new(ModelRegistry::new(loader, inference.accelerator));
    let store = Arc::new(VectorStore::new(StoreConfig::from_env()));
    let service = RagService::new(registry, store);

    match cli.command {
        Commands::Store { id, text } => {
            let response = service.store(&id, &text).await;
            match &response {
                ApiResponse::Ok(stored) => {
                    println!("{} Stored document: {}", "✅".green(), stored.stored_id)
                }
                ApiResponse::Err { error } => {
                    println!("{} Store failed: {}", "❌".red(), error)
                }
            }
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Commands::Chat {
            query,
            llm,
            embedding,
            backend,
            top_k,
        } => {
            let request = ChatRequest {
                query,
                llm,
                embedding,
                backend,
                top_k,
            };

            let response = service.chat(&request).await;
            match &response {
                ApiResponse::Ok(chat) => {
                    println!("{}", "Answer:".bold());
                    println!("{}\n", chat.response);
                    println!(
                        "{} {} document(s) retrieved",
                        "🔍".normal(),
                        chat.retrieved_docs.len()
                    );
                    for doc in &chat.retrieved_docs {
                        println!("  - {} (score {:.3})", doc.id, doc.score);
                    }
                }
                ApiResponse::Err { error } => {
                    println!("{} Chat failed: {}", "❌".red(), error)
                }
            }
        }
    }

    Ok(())
}
