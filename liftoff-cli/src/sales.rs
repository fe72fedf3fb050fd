use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use clap::Subcommand;
use liftoff_core::models::{NewSale, Sale, SaleProduct};
use liftoff_core::{report, table, ApiClient, Candidate, Result, UpdatePatch};

#[derive(Subcommand, Debug)]
pub enum SaleCommand {
    /// Register a new sale.
    Create {
        /// Seller email.
        #[arg(long)]
        email: String,
        /// Purchase date, YYYY-MM-DD.
        #[arg(long)]
        date: NaiveDate,
        /// Purchase time of day, HH:MM.
        #[arg(long, default_value = "09:00")]
        time: NaiveTime,
        #[arg(long)]
        value: f64,
        #[arg(long)]
        quantity: i64,
        #[arg(long, value_enum)]
        product: SaleProduct,
    },
    /// Show every sale.
    List,
    /// Show one sale by id.
    Get { id: i64 },
    /// Overwrite the supplied fields of a sale; omitted flags stay untouched.
    Update {
        id: i64,
        #[arg(long)]
        email: Option<String>,
        /// New purchase date; the timestamp is only patched when this is given.
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long, default_value = "09:00")]
        time: NaiveTime,
        #[arg(long)]
        value: Option<f64>,
        #[arg(long)]
        quantity: Option<i64>,
        #[arg(long, value_enum)]
        product: Option<SaleProduct>,
    },
    /// Remove a sale.
    Delete { id: i64 },
}

pub async fn run(cmd: SaleCommand, client: &ApiClient) -> Result<()> {
    match cmd {
        SaleCommand::Create {
            email,
            date,
            time,
            value,
            quantity,
            product,
        } => {
            let created: Sale = client
                .create(&NewSale {
                    email,
                    sold_at: NaiveDateTime::new(date, time),
                    value,
                    quantity,
                    product,
                })
                .await?;
            println!("{}", report::SUCCESS);
            print!("{}", table::render(std::slice::from_ref(&created)));
        }
        SaleCommand::List => {
            let sales: Vec<Sale> = client.list().await?;
            print!("{}", table::render(&sales));
        }
        SaleCommand::Get { id } => {
            let sale: Sale = client.get_one(id).await?;
            print!("{}", table::render(std::slice::from_ref(&sale)));
        }
        SaleCommand::Update {
            id,
            email,
            date,
            time,
            value,
            quantity,
            product,
        } => {
            let patch = UpdatePatch::compose([
                ("email", Candidate::Text(email.unwrap_or_default())),
                (
                    "data",
                    Candidate::DateTime(date.map(|d| NaiveDateTime::new(d, time))),
                ),
                ("valor", Candidate::Number(value.unwrap_or(0.0))),
                ("quantidade", Candidate::Integer(quantity.unwrap_or(0))),
                (
                    "produto",
                    Candidate::Choice(product.map(|p| p.wire_name().to_string())),
                ),
            ])?;
            client.update::<Sale>(id, &patch).await?;
            println!("{}", report::SUCCESS);
        }
        SaleCommand::Delete { id } => {
            client.delete::<Sale>(id).await?;
            println!("{}", report::SUCCESS);
        }
    }
    Ok(())
}
