//! Codequest - Entry Point
//!
//! Interactive demo shell for the progression engine: initialize a profile,
//! award XP, run quests, spend skill points, and watch notifications roll
//! in. All state persists to a JSON profile file between runs.

use clap::Parser;
use codequest::content::{load_content_pack, ContentPack};
use codequest::core::error::Result;
use codequest::core::types::{AvatarSlot, SkillCategory};
use codequest::persistence::FileStorage;
use codequest::progression::ProgressionStore;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "codequest", about = "Progression engine demo shell")]
struct Args {
    /// Path to the profile save file
    #[arg(long, default_value = "profile.json")]
    profile: PathBuf,

    /// Directory with a TOML content pack (defaults to built-in content)
    #[arg(long)]
    content: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("codequest=debug")
        .init();

    let args = Args::parse();

    let content = match &args.content {
        Some(dir) => load_content_pack(dir)?,
        None => ContentPack::builtin(),
    };
    let storage = FileStorage::new(&args.profile);
    let mut store = ProgressionStore::new(Default::default(), content, Box::new(storage))?;

    if store.state().player.username.is_empty() {
        let username = prompt("Choose a username: ");
        store.initialize_player(username.trim(), None)?;
    }
    store.record_activity(chrono::Utc::now().date_naive());

    println!("\n=== CODEQUEST ===");
    println!("Commands:");
    println!("  status / s           - Show player status");
    println!("  quests               - List quests by state");
    println!("  start <quest_id>     - Start an available quest");
    println!("  complete <quest_id>  - Complete an active quest");
    println!("  award <xp> [skill]   - Award XP, optionally tagged");
    println!("  upgrade <node_id>    - Spend skill points on a node");
    println!("  class <class_id>     - Switch character class");
    println!("  claim <achievement>  - Claim a completed achievement");
    println!("  reset                - Reset all progress");
    println!("  quit / q             - Exit");
    println!();

    loop {
        flush_notifications(&mut store);

        let line = prompt("> ");
        let mut parts = line.split_whitespace();
        let command = parts.next().unwrap_or("");

        match command {
            "quit" | "q" => break,
            "status" | "s" => display_status(&store),
            "quests" => display_quests(&store),
            "start" => {
                if let Some(id) = parts.next() {
                    report(store.start_quest(id));
                }
            }
            "complete" => {
                if let Some(id) = parts.next() {
                    report(store.complete_quest(id));
                }
            }
            "award" => {
                if let Some(amount) = parts.next().and_then(|s| s.parse::<u64>().ok()) {
                    let skill = parts.next().and_then(SkillCategory::parse);
                    store.award_xp(amount, skill, "Manual award");
                }
            }
            "upgrade" => {
                if let Some(id) = parts.next() {
                    if let Err(e) = store.upgrade_skill_node(id) {
                        println!("  {}", e);
                    }
                }
            }
            "class" => {
                if let Some(id) = parts.next() {
                    report(store.change_character_class(id));
                }
            }
            "claim" => {
                if let Some(id) = parts.next() {
                    match store.claim_achievement(id) {
                        Ok(outcome) => println!("  {:?}", outcome),
                        Err(e) => println!("  {}", e),
                    }
                }
            }
            "avatar" => {
                // avatar <slot> <value>
                if let (Some(slot), Some(value)) = (parts.next(), parts.next()) {
                    let slot = match slot {
                        "head" => Some(AvatarSlot::Head),
                        "body" => Some(AvatarSlot::Body),
                        "accessory" => Some(AvatarSlot::Accessory),
                        "theme" => Some(AvatarSlot::Theme),
                        _ => None,
                    };
                    if let Some(slot) = slot {
                        store.customize_avatar(slot, value);
                    }
                }
            }
            "reset" => {
                if let Err(e) = store.reset_progress() {
                    println!("  reset failed: {}", e);
                }
            }
            "" => {}
            other => println!("  unknown command: {}", other),
        }
    }

    Ok(())
}

fn prompt(text: &str) -> String {
    print!("{}", text);
    let _ = io::stdout().flush();
    let mut line = String::new();
    let _ = io::stdin().read_line(&mut line);
    line.trim().to_string()
}

fn report(result: Result<bool>) {
    match result {
        Ok(true) => {}
        Ok(false) => println!("  nothing happened"),
        Err(e) => println!("  {}", e),
    }
}

fn flush_notifications(store: &mut ProgressionStore) {
    for n in store.drain_notifications() {
        let icon = n.icon.unwrap_or_default();
        println!("  {} {} - {}", icon, n.title, n.message);
    }
}

fn display_status(store: &ProgressionStore) {
    let state = store.state();
    let progress = store.next_level_progress();

    println!(
        "  {} | level {} ({}/{} XP, {:.0}%) | class {}",
        state.player.username,
        state.player.level,
        progress.into_level,
        progress.required,
        progress.percent,
        state.player.class_id,
    );
    for cat in SkillCategory::ALL {
        let skill = state.skill(cat);
        if skill.xp > 0 || skill.points > 0 {
            println!(
                "    {:<12} level {:<3} {:>6} XP  {} points",
                cat.name(),
                skill.level,
                skill.xp,
                skill.points
            );
        }
    }
    println!(
        "    streak {} days (best {}) | arena {}-{} (rating {})",
        state.player.stats.current_streak,
        state.player.stats.longest_streak,
        state.battle_record.wins,
        state.battle_record.losses,
        state.battle_record.rating,
    );
}

fn display_quests(store: &ProgressionStore) {
    let log = &store.state().quest_log;
    println!("  available: {}", log.available.join(", "));
    let active: Vec<_> = log.active.iter().map(|q| q.id.as_str()).collect();
    println!("  active:    {}", active.join(", "));
    let completed: Vec<_> = log.completed.iter().map(|q| q.id.as_str()).collect();
    println!("  completed: {}", completed.join(", "));
}
