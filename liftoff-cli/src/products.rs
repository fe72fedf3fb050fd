use clap::Subcommand;
use liftoff_core::models::{NewProduct, Product, ProductCategory};
use liftoff_core::{report, table, ApiClient, Candidate, Result, UpdatePatch};

#[derive(Subcommand, Debug)]
pub enum ProductCommand {
    /// Register a new product.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long)]
        price: f64,
        #[arg(long, value_enum)]
        category: ProductCategory,
        #[arg(long)]
        supplier_email: String,
    },
    /// Show every product.
    List,
    /// Show one product by id.
    Get { id: i64 },
    /// Overwrite the supplied fields of a product; omitted flags stay untouched.
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        price: Option<f64>,
        #[arg(long, value_enum)]
        category: Option<ProductCategory>,
        #[arg(long)]
        supplier_email: Option<String>,
    },
    /// Remove a product.
    Delete { id: i64 },
}

pub async fn run(cmd: ProductCommand, client: &ApiClient) -> Result<()> {
    match cmd {
        ProductCommand::Create {
            name,
            description,
            price,
            category,
            supplier_email,
        } => {
            let created: Product = client
                .create(&NewProduct {
                    name,
                    description,
                    price,
                    category,
                    supplier_email,
                })
                .await?;
            println!("{}", report::SUCCESS);
            print!("{}", table::render(std::slice::from_ref(&created)));
        }
        ProductCommand::List => {
            let products: Vec<Product> = client.list().await?;
            print!("{}", table::render(&products));
        }
        ProductCommand::Get { id } => {
            let product: Product = client.get_one(id).await?;
            print!("{}", table::render(std::slice::from_ref(&product)));
        }
        ProductCommand::Update {
            id,
            name,
            description,
            price,
            category,
            supplier_email,
        } => {
            let patch = UpdatePatch::compose([
                ("name", Candidate::Text(name.unwrap_or_default())),
                ("description", Candidate::Text(description.unwrap_or_default())),
                ("price", Candidate::Number(price.unwrap_or(0.0))),
                (
                    "categoria",
                    Candidate::Choice(category.map(|c| c.wire_name().to_string())),
                ),
                (
                    "email_fornecedor",
                    Candidate::Text(supplier_email.unwrap_or_default()),
                ),
            ])?;
            client.update::<Product>(id, &patch).await?;
            println!("{}", report::SUCCESS);
        }
        ProductCommand::Delete { id } => {
            client.delete::<Product>(id).await?;
            println!("{}", report::SUCCESS);
        }
    }
    Ok(())
}
