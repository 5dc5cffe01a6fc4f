use std::net::SocketAddr;
use std::process;

use clap::{Parser, Subcommand};
use comfy_table::{modifiers, presets, ContentArrangement, Table};
use terminal_size::{terminal_size, Width};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use unigate::auth::username_exists;
use unigate::config::{self, DEFAULT_HOST, DEFAULT_PORT};
use unigate::models::{AppState, NewUser, Role};
use unigate::routes::build_router;
use unigate::store::UserStore;

fn build_state_from_env(env_file: Option<&str>, data_dir: Option<&str>) -> AppState {
    config::load_env_file(env_file);
    let data_dir = data_dir
        .map(str::to_string)
        .unwrap_or_else(config::get_data_dir);
    let store = UserStore::new(data_dir);
    AppState::new(store, config::get_public_base_url())
}

async fn start_server(mut state: AppState, host: &str, port: u16, stylesheet: Option<String>) {
    if let Some(path) = stylesheet {
        match std::fs::read_to_string(&path) {
            Ok(css) => {
                state.custom_css = Some(css);
                tracing::info!("Loaded custom stylesheet from {}", path);
            }
            Err(e) => {
                tracing::error!(%e, "Failed to read custom stylesheet");
                eprintln!(
                    "{} {}: {}",
                    yansi::Paint::red("Failed to read custom stylesheet at"),
                    path,
                    e
                );
                process::exit(1);
            }
        }
    }

    let addr: SocketAddr = match format!("{}:{}", host, port).parse() {
        Ok(a) => a,
        Err(e) => {
            tracing::error!(%e, "Invalid host/port format");
            eprintln!("{}: {}", yansi::Paint::red("Invalid host/port format"), e);
            process::exit(1);
        }
    };
    let app = build_router(state);
    tracing::info!(%addr, "Starting unigate server");
    println!(
        "{} {}",
        yansi::Paint::new("Web server running on").green(),
        yansi::Paint::new(format!("http://{}", addr)).cyan()
    );
    match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!(%e, "Server encountered an error while running");
                eprintln!("{}: {}", yansi::Paint::new("Server error").red(), e);
                process::exit(1);
            }
        }
        Err(e) => {
            tracing::error!(%e, "Failed to bind to address; is the port already in use?");
            eprintln!(
                "{}: {}\n{}",
                yansi::Paint::new(format!("Failed to bind to {}", addr)).red(),
                e,
                yansi::Paint::new("Please stop any process using this port, or start the server with a different --port value.").yellow()
            );
            process::exit(1);
        }
    }
}

#[derive(Parser)]
#[command(
    name = "unigate",
    author,
    version,
    about = "Role-based user portal",
    long_about = r#"unigate — a small role-based user portal.

Runs a local web UI where users sign in or register and land on the
dashboard their role permits (admin, employee or student). All data lives
in two JSON files under the data directory; there is no remote service.

Examples:
  1) Build & run (dev):
      cargo run -- serve --host 127.0.0.1 --port 8080
  2) Manage users from the terminal:
      unigate users list
      unigate users add carol secret employee --dept "Civil"
"#,
    after_help = "Use `unigate <subcommand> --help` to get subcommand specific options and usage examples."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        /// Host to bind to
        #[arg(long, default_value_t = String::from(DEFAULT_HOST))]
        host: String,
        /// Port to bind to
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
        /// Directory holding the JSON store (overrides DATA_DIR)
        #[arg(long)]
        data_dir: Option<String>,
        /// Path to a custom stylesheet to serve instead of the default
        #[arg(long)]
        stylesheet: Option<String>,
    },
    /// Manage stored users (app_users.json)
    Users {
        #[command(subcommand)]
        sub: UserCommands,
    },
}

#[derive(Subcommand)]
enum UserCommands {
    #[command(about = "List stored users", long_about = "Enumerate users stored in app_users.json (id, username, role, dept, created). Seeds the default admin if the store is empty.")]
    List,
    #[command(about = "Add a new user", long_about = "Add a user with a role (admin|employee|student) and an optional department. The password is stored as-is.")]
    Add {
        username: String,
        password: String,
        role: String,
        #[arg(long)]
        dept: Option<String>,
    },
    #[command(about = "Delete a user by id", long_about = "Remove the user record with the given id from app_users.json. Unknown ids are reported.")]
    Delete { id: u64 },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    // Dispatch CLI commands. If no command provided, serve on the defaults.
    if cli.command.is_none() {
        let state = build_state_from_env(None, None);
        start_server(state, DEFAULT_HOST, DEFAULT_PORT, None).await;
        return;
    }
    match cli.command.unwrap() {
        Commands::Serve {
            host,
            port,
            env_file,
            data_dir,
            stylesheet,
        } => {
            let state = build_state_from_env(env_file.as_deref(), data_dir.as_deref());
            start_server(state, &host, port, stylesheet).await;
        }
        Commands::Users { sub } => {
            let state = build_state_from_env(None, None);
            match sub {
                UserCommands::List => {
                    let users = match state.store.list_users() {
                        Ok(users) => users,
                        Err(e) => {
                            eprintln!("{}: {}", yansi::Paint::new("Failed to read user store").red(), e);
                            process::exit(1);
                        }
                    };
                    let mut table = Table::new();
                    table.load_preset(presets::UTF8_FULL);
                    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
                    table.set_content_arrangement(ContentArrangement::Dynamic);
                    if let Some((Width(w), _)) = terminal_size() {
                        table.set_width(w - 4);
                    }
                    table.set_header(vec!["ID", "Username", "Role", "Dept", "Created"]);
                    for u in &users {
                        table.add_row(vec![
                            u.id.to_string(),
                            u.username.clone(),
                            u.role.label().to_string(),
                            u.dept.clone().unwrap_or_default(),
                            u.created_at.clone(),
                        ]);
                    }
                    println!("\n{table}\n");
                }
                UserCommands::Add {
                    username,
                    password,
                    role,
                    dept,
                } => {
                    let Some(role) = Role::from_str(&role) else {
                        eprintln!(
                            "{} '{}' ({})",
                            yansi::Paint::new("Invalid role").red(),
                            role,
                            "expected admin, employee or student"
                        );
                        process::exit(1);
                    };
                    let username = username.trim().to_string();
                    if username.is_empty() || password.is_empty() {
                        eprintln!("{}", yansi::Paint::new("Username and password are required").red());
                        process::exit(1);
                    }
                    if username_exists(&state.store, &username) {
                        eprintln!(
                            "{} '{}' {}",
                            yansi::Paint::new("User").red(),
                            username,
                            yansi::Paint::new("already exists").red()
                        );
                        process::exit(1);
                    }
                    match state.store.add_user(NewUser {
                        username: username.clone(),
                        password,
                        role,
                        dept,
                    }) {
                        Ok(record) => {
                            println!(
                                "{} '{}' {} (id {})",
                                yansi::Paint::new("User").green(),
                                username,
                                yansi::Paint::new("added").green(),
                                record.id
                            );
                        }
                        Err(e) => {
                            eprintln!("{}: {}", yansi::Paint::new("Failed to persist user store").red(), e);
                            process::exit(1);
                        }
                    }
                }
                UserCommands::Delete { id } => {
                    let known = state
                        .store
                        .list_users()
                        .map(|users| users.iter().any(|u| u.id == id))
                        .unwrap_or(false);
                    if !known {
                        eprintln!(
                            "{} {} {}",
                            yansi::Paint::new("User id").red(),
                            id,
                            yansi::Paint::new("not found").red()
                        );
                        process::exit(1);
                    }
                    if let Err(e) = state.store.delete_user(id) {
                        eprintln!("{}: {}", yansi::Paint::new("Failed to persist user store").red(), e);
                        process::exit(1);
                    }
                    println!(
                        "{} {} {}",
                        yansi::Paint::new("User id").green(),
                        id,
                        yansi::Paint::new("deleted").green()
                    );
                }
            }
        }
    }
}
