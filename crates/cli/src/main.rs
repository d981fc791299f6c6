//! Glossary CLI - Command-line interface for the Glossary service
//! Talks to either front-end: JSON-RPC or REST

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::BTreeMap;
use tabled::{Table, Tabled};

const DEFAULT_RPC_URL: &str = "http://127.0.0.1:50051";
const DEFAULT_REST_URL: &str = "http://127.0.0.1:8000";

#[derive(Parser)]
#[command(name = "glossary")]
#[command(about = "Glossary service CLI", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Front-end to talk to
    #[arg(long, value_enum, default_value_t = Transport::Rpc)]
    transport: Transport,

    /// RPC server URL
    #[arg(long, env = "GLOSSARY_RPC_URL", default_value = DEFAULT_RPC_URL)]
    rpc_url: String,

    /// REST server URL
    #[arg(long, env = "GLOSSARY_REST_URL", default_value = DEFAULT_REST_URL)]
    rest_url: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Transport {
    Rpc,
    Rest,
}

#[derive(Subcommand)]
enum Commands {
    /// List every term
    List,

    /// Create a new term
    Create {
        /// Keyword to store the term under
        keyword: String,

        /// Term title
        #[arg(short, long)]
        title: String,

        /// Term definition
        #[arg(short, long)]
        definition: String,

        /// Source URL (absolute http/https)
        #[arg(short, long)]
        source_link: Option<String>,
    },

    /// Update definition and/or source link of a term
    Update {
        /// Keyword of the term
        keyword: String,

        /// New definition
        #[arg(short, long)]
        definition: Option<String>,

        /// New source URL (empty string clears it)
        #[arg(short, long)]
        source_link: Option<String>,
    },
}

#[derive(Serialize)]
struct JsonRpcRequest {
    jsonrpc: String,
    method: String,
    params: serde_json::Value,
    id: u64,
}

#[derive(Deserialize)]
struct JsonRpcResponse {
    #[allow(dead_code)]
    jsonrpc: String,
    #[allow(dead_code)]
    id: u64,
    result: Option<serde_json::Value>,
    error: Option<JsonRpcError>,
}

#[derive(Deserialize)]
struct JsonRpcError {
    code: i32,
    message: String,
}

#[derive(Deserialize)]
struct RestError {
    message: String,
}

#[derive(Clone, Deserialize)]
struct Term {
    title: String,
    definition: String,
    source_link: Option<String>,
}

#[derive(Tabled)]
struct TermRow {
    keyword: String,
    title: String,
    definition: String,
    source_link: String,
}

impl TermRow {
    fn new(keyword: impl Into<String>, term: Term) -> Self {
        Self {
            keyword: keyword.into(),
            title: term.title,
            definition: term.definition,
            source_link: term.source_link.unwrap_or_default(),
        }
    }
}

/// Keywords are not part of the RPC listing, so that column stays blank
fn rpc_rows(terms: Vec<Term>) -> Vec<TermRow> {
    terms
        .into_iter()
        .map(|t| TermRow::new(String::new(), t))
        .collect()
}

async fn call_rpc(url: &str, method: &str, params: serde_json::Value) -> Result<serde_json::Value> {
    let request = JsonRpcRequest {
        jsonrpc: "2.0".to_string(),
        method: method.to_string(),
        params,
        id: 1,
    };

    let client = reqwest::Client::new();
    let response: JsonRpcResponse = client
        .post(url)
        .json(&request)
        .send()
        .await
        .context("Failed to connect to server")?
        .json()
        .await
        .context("Failed to parse response")?;

    if let Some(error) = response.error {
        anyhow::bail!("RPC error ({}): {}", error.code, error.message);
    }

    response
        .result
        .ok_or_else(|| anyhow::anyhow!("No result in response"))
}

async fn call_rest(
    method: reqwest::Method,
    url: reqwest::Url,
    body: Option<serde_json::Value>,
) -> Result<serde_json::Value> {
    let client = reqwest::Client::new();
    let mut request = client.request(method, url);
    if let Some(body) = body {
        request = request.json(&body);
    }

    let response = request.send().await.context("Failed to connect to server")?;
    let status = response.status();

    if !status.is_success() {
        let message = response
            .json::<RestError>()
            .await
            .map(|e| e.message)
            .unwrap_or_else(|_| status.to_string());
        anyhow::bail!("HTTP {}: {}", status.as_u16(), message);
    }

    response.json().await.context("Failed to parse response")
}

/// Append path segments to the REST base URL, percent-encoding each one
fn rest_url(base: &str, segments: &[&str]) -> Result<reqwest::Url> {
    let mut url =
        reqwest::Url::parse(base).with_context(|| format!("Invalid REST URL '{}'", base))?;
    url.path_segments_mut()
        .map_err(|_| anyhow::anyhow!("REST URL '{}' cannot have a path", base))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

fn term_url(base: &str, keyword: &str) -> Result<reqwest::Url> {
    rest_url(base, &["term", keyword])
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::List => {
            // RPC returns a list without keywords; REST returns a keyed map
            let rows: Vec<TermRow> = match cli.transport {
                Transport::Rpc => {
                    let result = call_rpc(&cli.rpc_url, "GetAllTerms", json!({})).await?;
                    let terms: Vec<Term> = serde_json::from_value(result["terms"].clone())?;
                    rpc_rows(terms)
                }
                Transport::Rest => {
                    let url = rest_url(&cli.rest_url, &[""])?;
                    let result = call_rest(reqwest::Method::GET, url, None).await?;
                    let terms: BTreeMap<String, Term> = serde_json::from_value(result)?;
                    terms
                        .into_iter()
                        .map(|(keyword, t)| TermRow::new(keyword, t))
                        .collect()
                }
            };

            println!("{}", format!("{} terms", rows.len()).cyan().bold());
            println!("{}", Table::new(rows));
        }

        Commands::Create {
            keyword,
            title,
            definition,
            source_link,
        } => {
            let term = json!({
                "title": title,
                "definition": definition,
                "source_link": source_link,
            });

            let result = match cli.transport {
                Transport::Rpc => {
                    call_rpc(
                        &cli.rpc_url,
                        "CreateTerm",
                        json!({ "keyword": keyword, "term": term }),
                    )
                    .await?
                }
                Transport::Rest => {
                    call_rest(
                        reqwest::Method::POST,
                        term_url(&cli.rest_url, &keyword)?,
                        Some(term),
                    )
                    .await?
                }
            };
            let created: Term = serde_json::from_value(result)?;

            println!("{}", format!("✓ Term '{}' created", keyword).green().bold());
            println!("{}", Table::new(vec![TermRow::new(keyword, created)]));
        }

        Commands::Update {
            keyword,
            definition,
            source_link,
        } => {
            let mut update = serde_json::Map::new();
            if let Some(definition) = definition {
                update.insert("definition".to_string(), json!(definition));
            }
            if let Some(source_link) = source_link {
                update.insert("source_link".to_string(), json!(source_link));
            }
            if update.is_empty() {
                println!("{}", "Nothing to update".yellow());
                return Ok(());
            }
            let update = serde_json::Value::Object(update);

            let result = match cli.transport {
                Transport::Rpc => {
                    call_rpc(
                        &cli.rpc_url,
                        "UpdateTerm",
                        json!({ "keyword": keyword, "term_update": update }),
                    )
                    .await?
                }
                Transport::Rest => {
                    call_rest(
                        reqwest::Method::PUT,
                        term_url(&cli.rest_url, &keyword)?,
                        Some(update),
                    )
                    .await?
                }
            };
            let updated: Term = serde_json::from_value(result)?;

            println!("{}", format!("✓ Term '{}' updated", keyword).green().bold());
            println!("{}", Table::new(vec![TermRow::new(keyword, updated)]));
        }
    }

    Ok(())
}
