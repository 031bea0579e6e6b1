use cardiary::api::{AdminToken, DiaryApi};
use cardiary::config::DiaryConfig;
use cardiary::error::{DiaryError, Result};
use cardiary::model::{Diary, DiarySummary, PhaseTag};
use cardiary::store::fs::FileStore;
use chrono::{DateTime, Utc};
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut api = init_api(&cli)?;

    // The CLI runs as the operator on their own machine, which is the auth
    // gate here; a networked front end would mint this only after its
    // middleware passes.
    let admin = AdminToken::assume_verified();

    match cli.command {
        Commands::Create {
            client_ref,
            name,
            gender,
        } => handle_create(&mut api, client_ref, name, gender),
        Commands::Show { public_id } => handle_show(&api, &public_id),
        Commands::Append {
            public_id,
            topic,
            phase,
            body,
        } => handle_append(&mut api, &public_id, topic, &phase, body),
        Commands::Edit {
            public_id,
            card_id,
            topic,
            phase,
            body,
        } => handle_edit(&mut api, &public_id, &card_id, topic, &phase, body),
        Commands::Remove { public_id, card_id } => handle_remove(&mut api, &public_id, &card_id),
        Commands::List => handle_list(&api, admin),
        Commands::Delete { public_id } => handle_delete(&mut api, admin, &public_id),
        Commands::Config { key, value } => handle_config(key, value),
    }
}

fn init_api(cli: &Cli) -> Result<DiaryApi<FileStore>> {
    let data_dir = match &cli.dir {
        Some(dir) => dir.clone(),
        None => default_data_dir()?,
    };
    Ok(DiaryApi::new(FileStore::new(data_dir)))
}

fn config_base_dir() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("com", "cardiary", "cardiary")
        .ok_or_else(|| DiaryError::Store("Could not determine data dir".to_string()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

fn default_data_dir() -> Result<PathBuf> {
    let base = config_base_dir()?;
    let config = DiaryConfig::load(&base).unwrap_or_default();
    Ok(config.data_dir.unwrap_or(base))
}

/// CLI-friendly phase parsing: case-insensitive, while the stored value stays
/// the exact `Before`/`After` pair.
fn parse_phase(s: &str) -> Result<PhaseTag> {
    match s.to_lowercase().as_str() {
        "before" => Ok(PhaseTag::Before),
        "after" => Ok(PhaseTag::After),
        other => Err(DiaryError::Validation(format!(
            "phase must be 'before' or 'after', got '{}'",
            other
        ))),
    }
}

fn handle_create(
    api: &mut DiaryApi<FileStore>,
    client_ref: String,
    name: String,
    gender: String,
) -> Result<()> {
    let diary = api.create_diary(client_ref, name, gender)?;
    println!(
        "{} {}",
        "Diary created:".green(),
        diary.display_name.bold()
    );
    println!("Public id: {}", diary.public_id.yellow());
    Ok(())
}

fn handle_show(api: &DiaryApi<FileStore>, public_id: &str) -> Result<()> {
    let diary = api.diary(public_id)?;
    print_diary(&diary);
    Ok(())
}

fn handle_append(
    api: &mut DiaryApi<FileStore>,
    public_id: &str,
    topic: String,
    phase: &str,
    body: String,
) -> Result<()> {
    let phase = parse_phase(phase)?;
    let card = api.append_card(public_id, topic, phase, body)?;
    println!("{} {}", "Card added:".green(), card.topic.bold());
    println!("Card id: {}", card.id.yellow());
    Ok(())
}

fn handle_edit(
    api: &mut DiaryApi<FileStore>,
    public_id: &str,
    card_id: &str,
    topic: String,
    phase: &str,
    body: String,
) -> Result<()> {
    let phase = parse_phase(phase)?;
    let card = api.update_card(public_id, card_id, topic, phase, body)?;
    println!("{} {}", "Card updated:".green(), card.topic.bold());
    Ok(())
}

fn handle_remove(api: &mut DiaryApi<FileStore>, public_id: &str, card_id: &str) -> Result<()> {
    api.remove_card(public_id, card_id)?;
    println!("{}", "Card removed.".green());
    Ok(())
}

fn handle_list(api: &DiaryApi<FileStore>, admin: AdminToken) -> Result<()> {
    let summaries = api.list_diaries(admin)?;
    print_summaries(&summaries);
    Ok(())
}

fn handle_delete(
    api: &mut DiaryApi<FileStore>,
    admin: AdminToken,
    public_id: &str,
) -> Result<()> {
    api.delete_diary(admin, public_id)?;
    println!("{}", "Diary deleted.".green());
    Ok(())
}

fn handle_config(key: Option<String>, value: Option<String>) -> Result<()> {
    let base = config_base_dir()?;
    let mut config = DiaryConfig::load(&base).unwrap_or_default();

    match (key.as_deref(), value) {
        (None, _) | (Some("dir"), None) => {}
        (Some("dir"), Some(v)) => {
            config.data_dir = Some(PathBuf::from(v));
            config.save(&base)?;
        }
        (Some(other), _) => {
            println!("Unknown config key: {}", other);
            return Ok(());
        }
    }

    match &config.data_dir {
        Some(dir) => println!("dir = {}", dir.display()),
        None => println!("dir = {} (default)", base.display()),
    }
    Ok(())
}

fn print_diary(diary: &Diary) {
    println!(
        "{} {}",
        diary.display_name.bold(),
        format!("({})", diary.public_id).yellow()
    );
    println!(
        "Client ref: {}   Gender: {}   Created: {}",
        diary.client_ref,
        diary.gender,
        diary.created_at.format("%Y-%m-%d %H:%M")
    );

    if diary.cards.is_empty() {
        println!("\nNo cards yet.");
        return;
    }

    for card in &diary.cards {
        println!("\n--------------------------------");
        let phase = match card.phase {
            PhaseTag::Before => "Before".blue(),
            PhaseTag::After => "After".magenta(),
        };
        println!(
            "[{}] {} {}",
            phase,
            card.topic.bold(),
            card.id.dimmed()
        );
        println!("{}", card.body);
    }
}

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;

fn print_summaries(summaries: &[DiarySummary]) {
    if summaries.is_empty() {
        println!("No diaries found.");
        return;
    }

    for summary in summaries {
        let id_str = format!("{}  ", summary.public_id);
        let label = format!("{} ({})", summary.display_name, summary.client_ref);

        let time_ago = format_time_ago(summary.created_at);

        let fixed_width = id_str.width() + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let label_display = truncate_to_width(&label, available);
        let padding = available.saturating_sub(label_display.width());

        println!(
            "{}{}{}{}",
            id_str.yellow(),
            label_display,
            " ".repeat(padding),
            time_ago.dimmed()
        );
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(timestamp);

    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
