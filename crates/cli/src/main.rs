use anyhow::Result;
use app::StorefrontSession;
use catalog::{FileFeed, Product, ProductId};
use clap::{Parser, Subcommand};
use colored::Colorize;
use pipeline::SortKey;
use state::FileStore;
use std::path::PathBuf;

/// Storefront - demo e-commerce catalog browser
#[derive(Parser)]
#[command(name = "storefront")]
#[command(about = "Browse a product feed with filters, sorting, and likes", long_about = None)]
struct Cli {
    /// Path to the product feed JSON file
    #[arg(short, long, default_value = "data/products.json")]
    feed: PathBuf,

    /// Directory holding the durable like store
    #[arg(long, default_value = ".storefront")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the product grid
    Browse {
        /// Sort key: recommended, newest, popular, price-high, price-low.
        /// Anything else falls back to recommended.
        #[arg(long, default_value = "recommended")]
        sort: String,

        /// Only show customizable products
        #[arg(long)]
        customizable: bool,
    },

    /// Toggle a product in the liked set
    Like {
        /// Product ID to like or unlike
        #[arg(long)]
        product_id: ProductId,
    },

    /// List liked products
    Likes,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    tracing::debug!("Feed: {}, like store: {}", cli.feed.display(), cli.data_dir.display());

    let mut session = StorefrontSession::new(FileStore::new(&cli.data_dir));
    let feed = FileFeed::new(&cli.feed);

    match cli.command {
        Commands::Browse { sort, customizable } => {
            session.load_products(&feed).await;
            session.select_sort(SortKey::parse(&sort));
            session.set_customizable(customizable);
            print_grid(&session);
        }

        Commands::Like { product_id } => {
            let now_liked = session.toggle_like(product_id);
            if now_liked {
                println!("{} product {}", "Liked".red().bold(), product_id);
            } else {
                println!("Unliked product {product_id}");
            }
        }

        Commands::Likes => {
            // Load the feed so liked ids can show their titles; likes still
            // list fine if the feed is unavailable.
            session.load_products(&feed).await;
            print_likes(&session);
        }
    }

    Ok(())
}

fn print_grid<K: state::KvStore>(session: &StorefrontSession<K>) {
    if let Some(message) = session.error() {
        println!("{}", message.red());
        return;
    }

    println!(
        "{}   {}",
        format!("{} ITEMS", session.item_count()).bold(),
        session.sort_key().label().dimmed()
    );
    println!();

    if session.display_page().is_empty() {
        println!("{}", "No products to show.".dimmed());
        return;
    }

    for product in session.display_page() {
        print_card(session, product);
    }

    let hidden = session.item_count().saturating_sub(session.display_page().len());
    if hidden > 0 {
        println!("{}", format!("... and {hidden} more").dimmed());
    }
}

fn print_card<K: state::KvStore>(session: &StorefrontSession<K>, product: &Product) {
    let heart = if session.is_liked(product.id) {
        "♥".red().to_string()
    } else {
        "♡".dimmed().to_string()
    };

    let title = product.title.as_deref().unwrap_or("PRODUCT NAME");

    let price = match product.price {
        Some(price) => format_price(price).green().to_string(),
        None => "Sign in or Create an account to see pricing"
            .italic()
            .to_string(),
    };

    let stock = if product.is_out_of_stock() {
        format!("  {}", "OUT OF STOCK".yellow().bold())
    } else {
        String::new()
    };

    println!("{heart} [{}] {}{stock}", product.id, title.bold());
    println!("      {price}");
}

fn print_likes<K: state::KvStore>(session: &StorefrontSession<K>) {
    let liked = session.liked_ids();
    if liked.is_empty() {
        println!("{}", "No liked products yet.".dimmed());
        return;
    }

    println!("{}", format!("{} liked products", liked.len()).bold());
    for id in liked {
        let title = session
            .derived_view()
            .iter()
            .find(|p| p.id == id)
            .and_then(|p| p.title.as_deref())
            .unwrap_or("(not in current feed)");
        println!("{} [{}] {}", "♥".red(), id, title);
    }
}

fn format_price(price: f64) -> String {
    format!("${price:.2}")
}
