use anyhow::{bail, Context};
use bookstore_app::{Book, Bookstore, User};
use bookstore_kernel::settings::Settings;
use clap::{Parser, Subcommand};

/// Run one bookstore operation against the configured catalog and accounts.
#[derive(Debug, Parser)]
#[command(name = "bookstore", version, about)]
struct Cli {
    /// Print books as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the whole catalog
    Books,
    /// Search titles, authors and genres (case-sensitive)
    Search { keyword: String },
    /// List a new book
    AddBook {
        #[arg(long)]
        title: String,
        #[arg(long)]
        author: String,
        #[arg(long)]
        genre: String,
        #[arg(long)]
        price: f64,
    },
    /// Delist the book with this exact title
    RemoveBook { title: String },
    /// Buy a listed book
    Purchase {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
        title: String,
    },
    /// Review a purchased book
    Review {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
        title: String,
        text: String,
    },
    /// Create an account
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        email: String,
        #[arg(long, default_value_t = 0.0)]
        balance: f64,
    },
    /// Check credentials
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    /// Change username, password and email
    UpdateProfile {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        new_username: String,
        #[arg(long)]
        new_password: String,
        #[arg(long)]
        new_email: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = Settings::load().with_context(|| "failed to load bookstore settings")?;
    bookstore_telemetry::init(&settings.telemetry);

    let (bookstore, registry) = Bookstore::bootstrap(&settings).await?;
    tracing::debug!(command = ?cli.command, "running command");

    run(&bookstore, cli.command, cli.json).await?;

    registry.stop_modules().await?;
    Ok(())
}

async fn run(bookstore: &Bookstore, command: Command, json: bool) -> anyhow::Result<()> {
    match command {
        Command::Books => {
            let catalog = bookstore.catalog().lock().await;
            print_books(catalog.books(), json)?;
        }
        Command::Search { keyword } => {
            let hits = bookstore.catalog().lock().await.search_book(&keyword);
            print_books(&hits, json)?;
        }
        Command::AddBook {
            title,
            author,
            genre,
            price,
        } => {
            let mut catalog = bookstore.catalog().lock().await;
            catalog.try_add_book(Book::new(title, author, genre, price))?;
            println!("listed ({} books)", catalog.len());
        }
        Command::RemoveBook { title } => {
            let mut catalog = bookstore.catalog().lock().await;
            let Some(book) = catalog.find_by_title(&title).cloned() else {
                bail!("no book titled '{title}' is listed");
            };
            if !catalog.remove_book(&book) {
                bail!("could not delist '{title}'");
            }
            println!("delisted ({} books)", catalog.len());
        }
        Command::Purchase {
            username,
            password,
            title,
        } => {
            let balance = bookstore.purchase(&username, &password, &title).await?;
            println!("purchased '{title}', balance {balance:.2}");
        }
        Command::Review {
            username,
            password,
            title,
            text,
        } => {
            let book = bookstore.review(&username, &password, &title, &text).await?;
            println!("reviewed '{}' ({} reviews)", book.title, book.reviews.len());
        }
        Command::Register {
            username,
            password,
            email,
            balance,
        } => {
            let user = User::new(username, password, email).with_balance(balance);
            let mut accounts = bookstore.accounts().lock().await;
            accounts.try_register_user(user)?;
            println!("registered ({} accounts)", accounts.len());
        }
        Command::Login { username, password } => {
            let accounts = bookstore.accounts().lock().await;
            let user = accounts.try_login_user(&username, &password)?;
            println!(
                "welcome {} <{}>, balance {:.2}",
                user.username, user.email, user.balance
            );
        }
        Command::UpdateProfile {
            username,
            password,
            new_username,
            new_password,
            new_email,
        } => {
            let user = bookstore
                .update_profile(&username, &password, &new_username, &new_password, &new_email)
                .await?;
            println!("updated profile for {} <{}>", user.username, user.email);
        }
    }

    Ok(())
}

fn print_books(books: &[Book], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(books)?);
        return Ok(());
    }

    for book in books {
        println!(
            "{} by {} [{}] {:.2}",
            book.title, book.author, book.genre, book.price
        );
    }
    Ok(())
}
