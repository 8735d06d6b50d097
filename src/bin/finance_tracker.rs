use std::{path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand};
use serde::Serialize;

use finance_tracker::{
    CategoryTitle, Error, ErrorResponse, NewTransaction, TransactionType, get_balance,
    import_transactions, list_transactions, logging::init_tracing, open_shared_connection,
    parse_csv_file, record_transaction, stores::sqlite::create_sqlite_stores,
};

/// Record transactions, import them from CSV files and check the balance.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to the application SQLite database.
    #[arg(long)]
    db_path: PathBuf,

    /// The minimum level of log messages to show, overridden by `RUST_LOG`.
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the income, outcome and total of all transactions.
    Balance,

    /// Print all transactions along with the balance.
    List,

    /// Record a single transaction.
    Record {
        /// What the transaction was for.
        #[arg(long)]
        title: String,

        /// Either "income" or "outcome".
        #[arg(long = "type")]
        transaction_type: String,

        /// The amount of money earned or spent.
        #[arg(long)]
        value: f64,

        /// The category to file the transaction under, created if missing.
        #[arg(long)]
        category: String,
    },

    /// Import transactions from a CSV file with the columns title, type, value and category.
    Import {
        /// File path to the CSV file.
        csv_path: PathBuf,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(&args.log_level);

    match run(args).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            let response = ErrorResponse::from(&error);
            let body =
                serde_json::to_string_pretty(&response).unwrap_or_else(|_| error.to_string());
            eprintln!("{body}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<String, Error> {
    let connection = open_shared_connection(&args.db_path)?;
    let (transaction_store, category_store) = create_sqlite_stores(connection);

    match args.command {
        Command::Balance => to_json(&get_balance(&transaction_store)?),
        Command::List => to_json(&list_transactions(&transaction_store)?),
        Command::Record {
            title,
            transaction_type,
            value,
            category,
        } => {
            let new_transaction = NewTransaction {
                title,
                transaction_type: transaction_type.parse::<TransactionType>()?,
                value,
                category: CategoryTitle::new(&category)?,
            };

            let transaction =
                record_transaction(new_transaction, &transaction_store, &category_store).await?;

            to_json(&transaction)
        }
        Command::Import { csv_path } => {
            let rows = parse_csv_file(&csv_path)?;
            tracing::info!("Read {} rows from {csv_path:?}", rows.len());

            let transactions =
                import_transactions(rows, &transaction_store, &category_store).await?;

            to_json(&transactions)
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, Error> {
    serde_json::to_string_pretty(value)
        .map_err(|error| Error::JSONSerializationError(error.to_string()))
}
