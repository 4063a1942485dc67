use clap::Parser;
use colored::*;
use contacts::api::{CmdMessage, ConfigAction, ContactsApi, MessageLevel};
use contacts::config::{resolve_data_file, ContactsConfig, KEYS};
use contacts::error::{ContactsError, Result};
use contacts::index::DisplayContact;
use contacts::logging::init_logging;
use contacts::model::ContactInput;
use contacts::store::fs::FileBackend;
use directories::ProjectDirs;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

const FILE_ENV: &str = "CONTACTS_FILE";
const CONFIG_DIR_ENV: &str = "CONTACTS_CONFIG_DIR";

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: ContactsApi<FileBackend>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    // Config never reads the contacts file.
    if !matches!(cli.command, Some(Commands::Config { .. })) {
        ctx.api.reload()?;
    }

    match cli.command {
        Some(Commands::Add { name, phone, email }) => handle_add(&mut ctx, name, phone, email),
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::Search { keyword }) => handle_search(&ctx, keyword),
        Some(Commands::Delete { index }) => handle_delete(&mut ctx, index),
        Some(Commands::Update {
            index,
            name,
            phone,
            email,
        }) => handle_update(&mut ctx, index, name, phone, email),
        Some(Commands::View { index }) => handle_view(&ctx, index),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = match std::env::var_os(CONFIG_DIR_ENV) {
        Some(dir) => PathBuf::from(dir),
        None => ProjectDirs::from("com", "contacts", "contacts")
            .ok_or_else(|| ContactsError::Config("Could not determine config dir".to_string()))?
            .config_dir()
            .to_path_buf(),
    };

    let config = match ContactsConfig::load(&config_dir) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} ignoring unreadable config: {}", "Warning:".yellow(), e);
            ContactsConfig::default()
        }
    };

    let level = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    if let Err(e) = init_logging(level, config.log_dir.as_deref()) {
        eprintln!("{} {}", "Warning:".yellow(), e);
    }

    let data_file = resolve_data_file(
        cli.file.clone(),
        std::env::var_os(FILE_ENV).map(PathBuf::from),
        &config,
    );
    log::debug!("using contacts file {}", data_file.display());

    Ok(AppContext {
        api: ContactsApi::new(FileBackend::new(data_file), config_dir),
    })
}

fn handle_add(
    ctx: &mut AppContext,
    name: String,
    phone: String,
    email: Option<String>,
) -> Result<()> {
    let input = ContactInput::new(name, phone, email.unwrap_or_default());
    let result = ctx.api.add_contact(&input)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_contacts()?;
    print_contacts(&result.listed_contacts);
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &AppContext, keyword: String) -> Result<()> {
    let result = ctx.api.search_contacts(&keyword)?;
    print_contacts(&result.listed_contacts);
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, index: Option<String>) -> Result<()> {
    let result = ctx.api.delete_contact(index.as_deref())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_update(
    ctx: &mut AppContext,
    index: String,
    name: String,
    phone: String,
    email: Option<String>,
) -> Result<()> {
    let input = ContactInput::new(name, phone, email.unwrap_or_default());
    let result = ctx.api.update_contact(Some(&index), &input)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &AppContext, index: Option<String>) -> Result<()> {
    let result = ctx.api.view_contact(index.as_deref())?;
    for dc in &result.listed_contacts {
        println!("{} {}", "Name:".bold(), dc.contact.name);
        println!("{} {}", "Phone:".bold(), dc.contact.phone);
        println!("{} {}", "Email:".bold(), dc.contact.email);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let show_all = action == ConfigAction::ShowAll;

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            for key in KEYS {
                println!("{} = {}", key, config.get(key)?);
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

fn print_contacts(contacts: &[DisplayContact]) {
    if contacts.is_empty() {
        println!("No contacts found.");
        return;
    }

    let idx_width = contacts
        .iter()
        .map(|dc| dc.index.to_string().len())
        .max()
        .unwrap_or(1);
    let name_width = contacts
        .iter()
        .map(|dc| dc.contact.name.width())
        .max()
        .unwrap_or(0);

    for dc in contacts {
        let idx = format!("{:>width$}.", dc.index, width = idx_width);
        let padding = name_width.saturating_sub(dc.contact.name.width());
        println!(
            "{} {}{}  {}  {}",
            idx.yellow(),
            dc.contact.name.bold(),
            " ".repeat(padding),
            dc.contact.phone,
            dc.contact.email.dimmed()
        );
    }
}
