use clap::Parser;
use log::{error, info};
use pigeonhole::{
    catalog,
    client::CheckoutClient,
    logger::setup_logger,
    widget::{Activation, CheckoutWidget, Navigator},
};
use std::{process::ExitCode, sync::Arc};

/// Runs one checkout against a running storefront, the way the product page button does.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Product id, e.g. `cyber-finch`. Ids outside the catalog are sent as-is.
    #[arg(long, short)]
    product: String,

    /// Storefront base URL. Defaults to PIGEONHOLE_API_URL or http://127.0.0.1:8081.
    #[arg(long)]
    api_url: Option<String>,

    /// Print the mock payment URL as a link to open once the checkout resolves.
    #[arg(long)]
    open: bool,
}

struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn open_in_new_context(&self, url: &str) {
        println!("Open payment session: {}", url);
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    setup_logger();
    let cli = Cli::parse();

    let client = match cli.api_url {
        Some(url) => CheckoutClient::new(url),
        None => CheckoutClient::from_env(),
    };
    let product_name = catalog::product_by_id(&cli.product)
        .map(|product| product.name.to_string())
        .unwrap_or_else(|| cli.product.clone());
    info!("Checking out {} via {}", product_name, client.api_url);

    let mut widget = CheckoutWidget::new(cli.product, product_name, Arc::new(client));
    if cli.open {
        widget = widget.with_navigator(Arc::new(TerminalNavigator));
    }

    match widget.activate().await {
        Activation::Resolved(receipt) => {
            println!("Signal Locked · {}", widget.product_name());
            println!("{}", receipt.message);
            println!("Reference: {}", receipt.reference);
            if !cli.open {
                println!("Payment session: {}", receipt.payment_url);
            }
            ExitCode::SUCCESS
        }
        Activation::Failed(message) => {
            error!("{}", message);
            eprintln!("{}", message);
            ExitCode::FAILURE
        }
        Activation::Ignored => ExitCode::SUCCESS,
    }
}
