use clap::{Parser, Subcommand};
use serde_json::Value;

use opennic_omnibox::engines::parse_template;
use opennic_omnibox::intercept::RequestDetails;
use opennic_omnibox::namespace::TldSet;

#[derive(Parser)]
#[command(name = "omnibox-cli")]
#[command(about = "Management CLI for the OpenNIC omnibox redirector", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://127.0.0.1:8053")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a search engine URL template (offline)
    Parse { template: String },
    /// Check whether a query is an alternative-namespace domain (offline)
    Classify {
        query: String,
        /// TLDs to use instead of the OpenNIC list
        #[arg(long = "tld")]
        tlds: Vec<String>,
    },
    /// Ask the running service what it would do with a request
    Decide {
        request_url: String,
        #[arg(long)]
        origin_url: Option<String>,
        #[arg(long)]
        initiator: Option<String>,
    },
    /// List registered search engines
    Engines,
    /// Check service status
    Status,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Parse { template } => match parse_template(&template) {
            Ok(engine) => println!("{engine}"),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        },
        Commands::Classify { query, tlds } => {
            let tlds = if tlds.is_empty() {
                TldSet::opennic()
            } else {
                TldSet::new(tlds)
            };
            println!("{}", tlds.is_candidate_domain(&query));
        }
        Commands::Decide {
            request_url,
            origin_url,
            initiator,
        } => {
            let request = RequestDetails {
                url: request_url,
                origin_url,
                initiator,
            };
            let res = client
                .post(format!("{}/v1/decide", cli.url))
                .json(&request)
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Engines => {
            let res = client.get(format!("{}/v1/engines", cli.url)).send().await?;
            print_response(res).await?;
        }
        Commands::Status => {
            let res = client.get(format!("{}/v1/status", cli.url)).send().await?;
            print_response(res).await?;
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: service returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
