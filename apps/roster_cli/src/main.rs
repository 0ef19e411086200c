use account_core::{demo_users, LoginSession, UserStore};
use anyhow::Result;
use clap::Parser;

#[derive(Parser, Debug)]
struct Args {
    #[arg(long)]
    email: String,
    #[arg(long)]
    password: String,
    /// Display name applied on sign-in when registering.
    #[arg(long, default_value = "")]
    name: String,
    /// Open a registration with the given email and password before signing in.
    #[arg(long)]
    register: bool,
    #[arg(long)]
    seed_demo: bool,
    /// Print the roster as JSON instead of plain lines.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();

    let store = if args.seed_demo {
        let seeded = demo_users();
        tracing::debug!(count = seeded.len(), "cli: seeding demo accounts");
        UserStore::with_users(seeded)
    } else {
        UserStore::new()
    };
    let mut session = LoginSession::with_store(store);

    if args.register {
        session.begin_registration(&args.email, &args.password);
        println!(
            "Registration opened for {} ({} on the roster)",
            args.email,
            session.store().len()
        );
    }

    let user = session.submit_login(&args.email, &args.password, &args.name)?;
    if user.name.is_empty() {
        println!("Signed in as {}", user.email);
    } else {
        println!("Signed in as {} ({})", user.name, user.email);
    }

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(session.store().list_users())?
        );
    } else {
        println!("Roster, oldest first:");
        for entry in session.store().list_users() {
            if entry.name.is_empty() {
                println!("  {}", entry.email);
            } else {
                println!("  {}  {}", entry.email, entry.name);
            }
        }
    }

    Ok(())
}
