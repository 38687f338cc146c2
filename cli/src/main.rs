//! `calldesk`: command-line access to the call-tracking backend.

mod client;
mod error;
mod output;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

use calls::admin::{NewUser, UserFilter, UserPatch, visible_users};
use calls::edit::CallEdit;
use calls::endpoints::CallQuery;
use calls::types::{CallDirection, Credentials, Role};
use calls::{ApiCallStatus, CallFilter, CallView, UiCallStatus, derive_page};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::client::ApiClient;
use crate::error::CliError;
use crate::output::print_json;

#[derive(Parser, Debug)]
#[command(name = "calldesk", about = "Call-tracking dashboard API CLI")]
struct Cli {
    /// API base URL, including any path prefix such as `/api`.
    #[arg(long, env = "CALLDESK_BASE_URL", default_value = "http://127.0.0.1:8000/api")]
    base_url: String,

    #[arg(long, env = "CALLDESK_TOKEN", hide_env_values = true)]
    token: Option<String>,

    #[arg(long, env = "CALLDESK_REFRESH_TOKEN", hide_env_values = true)]
    refresh_token: Option<String>,

    /// Print raw JSON instead of tables.
    #[arg(long, global = true)]
    json: bool,

    /// Debug-level logging unless RUST_LOG is set.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    #[command(subcommand)]
    Auth(AuthCommand),
    #[command(subcommand)]
    Calls(CallsCommand),
    #[command(subcommand)]
    Reminders(RemindersCommand),
    #[command(subcommand)]
    Notifications(NotificationsCommand),
    #[command(subcommand)]
    Users(UsersCommand),
    /// Aggregate dashboard figures (admin).
    Kpis,
}

#[derive(Subcommand, Debug)]
enum AuthCommand {
    /// Exchange credentials for tokens.
    Login {
        #[arg(long, env = "CALLDESK_EMAIL")]
        email: String,
        #[arg(long, env = "CALLDESK_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Exchange the refresh token for a new access token.
    Refresh,
    /// Show the authenticated user.
    Me,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ViewArg {
    All,
    Today,
    History,
}

impl From<ViewArg> for CallView {
    fn from(value: ViewArg) -> Self {
        match value {
            ViewArg::All => Self::All,
            ViewArg::Today => Self::Today,
            ViewArg::History => Self::History,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum DirectionArg {
    Inbound,
    Outbound,
}

impl From<DirectionArg> for CallDirection {
    fn from(value: DirectionArg) -> Self {
        match value {
            DirectionArg::Inbound => Self::Inbound,
            DirectionArg::Outbound => Self::Outbound,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum RoleArg {
    Admin,
    Regular,
}

impl From<RoleArg> for Role {
    fn from(value: RoleArg) -> Self {
        match value {
            RoleArg::Admin => Self::Admin,
            RoleArg::Regular => Self::Regular,
        }
    }
}

/// Filters shared by `calls list` and `calls search`.
#[derive(Args, Debug, Default)]
struct FilterArgs {
    /// Free text matched against names, numbers, email, agent and notes.
    #[arg(long)]
    search: Option<String>,
    /// Status key (`callback`) or backend code (`A_RAPPELER`); repeatable.
    #[arg(long = "status", value_parser = parse_status)]
    statuses: Vec<UiCallStatus>,
    #[arg(long = "type", value_enum)]
    direction: Option<DirectionArg>,
    /// Inclusive lower bound, YYYY-MM-DD.
    #[arg(long, value_parser = parse_day)]
    from: Option<NaiveDate>,
    /// Inclusive upper bound, YYYY-MM-DD.
    #[arg(long, value_parser = parse_day)]
    to: Option<NaiveDate>,
}

impl FilterArgs {
    fn to_filter(&self) -> CallFilter {
        let mut filter = CallFilter {
            search: self.search.clone().unwrap_or_default(),
            date_from: self.from,
            date_to: self.to,
            direction: self.direction.map(CallDirection::from),
            ..CallFilter::default()
        };
        for status in &self.statuses {
            filter.set_status_enabled(*status, true);
        }
        filter
    }
}

/// Contact fields for `calls create` and `calls update`.
#[derive(Args, Debug, Default)]
struct CallFields {
    #[arg(long, value_parser = parse_status)]
    status: Option<UiCallStatus>,
    #[arg(long)]
    first_name: Option<String>,
    #[arg(long)]
    last_name: Option<String>,
    #[arg(long)]
    phone: Option<String>,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    notes: Option<String>,
    /// Callback as `"YYYY-MM-DD • slot"`; kept only for no-answer/callback statuses.
    #[arg(long)]
    reminder: Option<String>,
}

impl CallFields {
    fn apply_to(self, edit: &mut CallEdit) {
        if let Some(status) = self.status {
            edit.status = status;
        }
        let fields = [
            (self.first_name, &mut edit.first_name),
            (self.last_name, &mut edit.last_name),
            (self.phone, &mut edit.phone),
            (self.email, &mut edit.email),
            (self.notes, &mut edit.notes),
            (self.reminder, &mut edit.reminder),
        ];
        for (value, slot) in fields {
            if let Some(value) = value {
                *slot = value;
            }
        }
    }

    fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.first_name.is_none()
            && self.last_name.is_none()
            && self.phone.is_none()
            && self.email.is_none()
            && self.notes.is_none()
            && self.reminder.is_none()
    }
}

#[derive(Subcommand, Debug)]
enum CallsCommand {
    /// Derive a view locally: restriction, filter, order and page.
    List {
        #[arg(long, value_enum, default_value = "all")]
        view: ViewArg,
        #[command(flatten)]
        filter: FilterArgs,
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Backend-side filtered and paginated listing.
    Search {
        #[command(flatten)]
        filter: FilterArgs,
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        page_size: Option<u32>,
    },
    Show {
        id: String,
    },
    Create {
        #[arg(long = "type", value_enum, default_value = "outbound")]
        direction: DirectionArg,
        #[command(flatten)]
        fields: CallFields,
    },
    /// Fetch, apply the given fields, and send the reconciled update.
    Update {
        id: String,
        #[command(flatten)]
        fields: CallFields,
    },
    Delete {
        id: String,
    },
}

#[derive(Subcommand, Debug)]
enum RemindersCommand {
    List {
        /// Every reminder instead of today's.
        #[arg(long)]
        all: bool,
    },
    Done {
        id: String,
    },
    Delete {
        id: String,
    },
}

#[derive(Subcommand, Debug)]
enum NotificationsCommand {
    /// Unread notifications.
    List,
    Count,
    Read {
        id: String,
    },
    ReadAll,
}

#[derive(Subcommand, Debug)]
enum UsersCommand {
    List {
        #[arg(long)]
        search: Option<String>,
        #[arg(long, value_enum)]
        role: Option<RoleArg>,
        #[arg(long)]
        include_inactive: bool,
    },
    Create {
        #[arg(long)]
        email: String,
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long, value_enum, default_value = "regular")]
        role: RoleArg,
        #[arg(long, env = "CALLDESK_NEW_PASSWORD", hide_env_values = true)]
        password: String,
    },
    Update {
        id: String,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long, value_enum)]
        role: Option<RoleArg>,
        #[arg(long)]
        active: Option<bool>,
    },
    Deactivate {
        id: String,
    },
    ResetPassword {
        id: String,
    },
    Stats {
        id: String,
    },
}

/// Accept a UI key (`no-answer`) or a backend code (`PAS_DE_REPONSE`).
fn parse_status(raw: &str) -> Result<UiCallStatus, String> {
    let raw = raw.trim();
    if let Some(status) = UiCallStatus::ALL.into_iter().find(|s| s.key() == raw) {
        return Ok(status);
    }
    let code = raw.to_ascii_uppercase();
    ApiCallStatus::ALL
        .into_iter()
        .find(|s| s.code() == code)
        .map(ApiCallStatus::to_ui)
        .ok_or_else(|| format!("unknown status `{raw}`"))
}

fn parse_day(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "calldesk=debug,calls=debug" } else { "calldesk=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli).await {
        eprintln!("error: {err}");
        if err.is_unauthorized() {
            eprintln!("hint: the access token was rejected; run `calldesk auth refresh` or `calldesk auth login`");
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let client = ApiClient::new(&cli.base_url, cli.token.clone())?;
    debug!(base_url = %cli.base_url, "client ready");
    let json = cli.json;

    match cli.command {
        Command::Auth(cmd) => run_auth(&client, cmd, cli.refresh_token.as_deref()).await,
        Command::Calls(cmd) => run_calls(&client, cmd, json).await,
        Command::Reminders(cmd) => run_reminders(&client, cmd, json).await,
        Command::Notifications(cmd) => run_notifications(&client, cmd, json).await,
        Command::Users(cmd) => run_users(&client, cmd, json).await,
        Command::Kpis => {
            let kpis = client.kpis().await?;
            if json {
                print_json(&kpis)
            } else {
                println!("{}", output::kpis_table(&kpis));
                Ok(())
            }
        }
    }
}

async fn run_auth(client: &ApiClient, cmd: AuthCommand, refresh_token: Option<&str>) -> Result<(), CliError> {
    match cmd {
        AuthCommand::Login { email, password } => {
            let tokens = client.login(&Credentials { email, password }).await?;
            info!(expires_in = ?tokens.expires_in, "logged in");
            print_json(&tokens)
        }
        AuthCommand::Refresh => {
            let refresh_token = refresh_token.ok_or(CliError::MissingRefreshToken)?;
            let tokens = client.refresh(refresh_token).await?;
            print_json(&tokens)
        }
        AuthCommand::Me => print_json(&client.me().await?),
    }
}

async fn run_calls(client: &ApiClient, cmd: CallsCommand, json: bool) -> Result<(), CliError> {
    match cmd {
        CallsCommand::List { view, filter, page } => {
            let view = CallView::from(view);
            let calls = client.calls_for_view(view).await?;
            let derived = derive_page(&calls, &filter.to_filter(), view, page);
            debug!(fetched = calls.len(), matching = derived.total, "derived call page");
            if json {
                return print_json(&derived.rows);
            }
            println!("{}", output::calls_table(&derived.rows));
            println!("{}", output::page_footer(&derived));
            Ok(())
        }
        CallsCommand::Search {
            filter,
            page,
            page_size,
        } => {
            let query = CallQuery {
                page,
                page_size,
                ..CallQuery::from_filter(&filter.to_filter())
            };
            let result = client.search_calls(&query).await?;
            if json {
                return print_json(&result);
            }
            println!("{}", output::calls_table(&result.items));
            println!("page {} · {} appel(s)", result.page, result.total);
            Ok(())
        }
        CallsCommand::Show { id } => {
            let call = client.call(&id).await?;
            if json {
                return print_json(&call);
            }
            println!("{}", output::call_detail(&call));
            Ok(())
        }
        CallsCommand::Create { direction, fields } => {
            let mut edit = CallEdit::default();
            fields.apply_to(&mut edit);
            let created = client.create_call(&edit.to_new_call(direction.into())).await?;
            info!(id = %created.id, "call created");
            print_json(&created)
        }
        CallsCommand::Update { id, fields } => {
            if fields.is_empty() {
                return Err(CliError::EmptyUpdate);
            }
            let current = client.call(&id).await?;
            let mut edit = CallEdit::from_call(&current);
            fields.apply_to(&mut edit);
            let update = edit.to_update();
            debug!(status = %update.status, recall_date = ?update.recall_date, "sending call update");
            let updated = client.update_call(&id, &update).await?;
            if json {
                return print_json(&updated);
            }
            println!("{}", output::call_detail(&updated));
            Ok(())
        }
        CallsCommand::Delete { id } => {
            client.delete_call(&id).await?;
            println!("deleted {id}");
            Ok(())
        }
    }
}

async fn run_reminders(client: &ApiClient, cmd: RemindersCommand, json: bool) -> Result<(), CliError> {
    match cmd {
        RemindersCommand::List { all } => {
            let mut reminders = client.reminders(all).await?;
            calls::reminders::sort_for_display(&mut reminders);
            if json {
                return print_json(&reminders);
            }
            println!("{}", output::reminders_table(&reminders));
            Ok(())
        }
        RemindersCommand::Done { id } => {
            client.reminder_done(&id).await?;
            println!("done {id}");
            Ok(())
        }
        RemindersCommand::Delete { id } => {
            client.delete_reminder(&id).await?;
            println!("deleted {id}");
            Ok(())
        }
    }
}

async fn run_notifications(client: &ApiClient, cmd: NotificationsCommand, json: bool) -> Result<(), CliError> {
    match cmd {
        NotificationsCommand::List => {
            let items = client.unread_notifications().await?;
            if json {
                return print_json(&items);
            }
            println!("{}", output::notifications_table(&items));
            Ok(())
        }
        NotificationsCommand::Count => {
            println!("{}", client.unread_count().await?);
            Ok(())
        }
        NotificationsCommand::Read { id } => {
            client.mark_read(&id).await?;
            println!("read {id}");
            Ok(())
        }
        NotificationsCommand::ReadAll => {
            client.mark_all_read().await?;
            println!("all read");
            Ok(())
        }
    }
}

async fn run_users(client: &ApiClient, cmd: UsersCommand, json: bool) -> Result<(), CliError> {
    match cmd {
        UsersCommand::List {
            search,
            role,
            include_inactive,
        } => {
            let filter = UserFilter {
                search: search.unwrap_or_default(),
                role: role.map(Role::from),
                include_inactive,
            };
            let users = visible_users(&client.users().await?, &filter);
            if json {
                return print_json(&users);
            }
            println!("{}", output::users_table(&users));
            Ok(())
        }
        UsersCommand::Create {
            email,
            first_name,
            last_name,
            phone,
            role,
            password,
        } => {
            let user = NewUser {
                email,
                first_name,
                last_name,
                phone,
                role: role.into(),
                password,
            };
            print_json(&client.create_user(&user).await?)
        }
        UsersCommand::Update {
            id,
            email,
            first_name,
            last_name,
            phone,
            role,
            active,
        } => {
            let patch = UserPatch {
                email,
                first_name,
                last_name,
                phone,
                role: role.map(Role::from),
                active,
            };
            if patch.is_empty() {
                return Err(CliError::EmptyUpdate);
            }
            print_json(&client.update_user(&id, &patch).await?)
        }
        UsersCommand::Deactivate { id } => {
            client.deactivate_user(&id).await?;
            println!("deactivated {id}");
            Ok(())
        }
        UsersCommand::ResetPassword { id } => {
            let reset = client.reset_password(&id).await?;
            match reset.temporary_password {
                Some(password) => println!("temporary password: {password}"),
                None => println!("reset link sent"),
            }
            Ok(())
        }
        UsersCommand::Stats { id } => {
            let stats = client.user_stats(&id).await?;
            if json {
                return print_json(&stats);
            }
            println!("{}", output::stats_table(&stats));
            Ok(())
        }
    }
}
