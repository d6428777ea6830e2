use catalog::client::i18n::Lang;
use catalog::client::views::{render_detail, render_list, ViewState};
use catalog::client::{CatalogClient, ClientError, DEFAULT_BASE_URL};
use catalog::logging;
use catalog::models::{CreateProductRequest, ProductPatch};
use clap::{Parser, Subcommand};
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(name = "catalog-client", about = "Browse and edit the product catalog")]
struct Cli {
    /// Base URL of the catalog service
    #[arg(long, env = "CATALOG_API_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Label language (vi or en)
    #[arg(long, env = "CATALOG_LANG", default_value = "vi")]
    lang: Lang,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the product table
    List,
    /// Show one product
    Show { id: Uuid },
    /// Create a product
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        price: f64,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        image: Option<String>,
    },
    /// Change the given fields of a product
    Update {
        id: Uuid,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        price: Option<f64>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        image: Option<String>,
    },
    /// Delete a product
    Delete { id: Uuid },
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    logging::init("warn");

    let cli = Cli::parse();
    let client = CatalogClient::new(cli.base_url);
    tracing::debug!(base_url = client.base_url(), "using catalog service");

    if let Err(e) = run(&client, cli.command, cli.lang).await {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

async fn run(client: &CatalogClient, command: Command, lang: Lang) -> Result<(), ClientError> {
    match command {
        Command::List => show_list(client, lang).await,
        Command::Show { id } => {
            let state = ViewState::from_result(client.get_product(id).await);
            print!("{}", render_detail(&state, lang));
            Ok(())
        }
        Command::Create {
            name,
            price,
            description,
            image,
        } => {
            let created = client
                .create_product(&CreateProductRequest {
                    name: Some(name),
                    description,
                    price: Some(price),
                    image,
                })
                .await?;
            println!("{}", created.id);
            show_list(client, lang).await
        }
        Command::Update {
            id,
            name,
            price,
            description,
            image,
        } => {
            let patch = ProductPatch {
                name,
                description,
                price,
                image,
            };
            client.update_product(id, &patch).await?;
            show_list(client, lang).await
        }
        Command::Delete { id } => {
            client.delete_product(id).await?;
            show_list(client, lang).await
        }
    }
}

async fn show_list(client: &CatalogClient, lang: Lang) -> Result<(), ClientError> {
    let state = ViewState::from_result(client.list_products().await);
    print!("{}", render_list(&state, lang));
    Ok(())
}
