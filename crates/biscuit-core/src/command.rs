use std::collections::HashMap;
use std::path::PathBuf;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use anyhow::{bail, Result};

use biscuit_sim::{Action, ActionOutcome, PetSim};
use biscuit_sprite::Canvas;

use crate::console::Console;
use crate::meter::TickMeter;

/// Output from a command execution.
pub enum CommandOutput {
    /// Lines to display in the console.
    Lines(Vec<String>),
    /// Signal that the app should quit.
    Quit,
}

/// Context available to commands during execution.
pub struct CommandContext<'a> {
    pub sim: &'a mut PetSim,
    pub console: &'a mut Console,
    pub meter: &'a TickMeter,
    pub canvas: &'a Canvas,
    pub pet_name: &'a str,
    pub started_at: Instant,
    pub now: Instant,
}

/// A console command.
pub trait Command: Send + Sync {
    fn name(&self) -> &str;
    fn aliases(&self) -> &[&str] {
        &[]
    }
    fn description(&self) -> &str;
    fn usage(&self) -> &str {
        self.name()
    }
    fn execute(&self, args: &[&str], ctx: &mut CommandContext) -> CommandOutput;
}

/// Registry of console commands.
pub struct CommandRegistry {
    commands: Vec<Box<dyn Command>>,
    lookup: HashMap<String, usize>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            lookup: HashMap::new(),
        }
    }

    pub fn register(&mut self, cmd: Box<dyn Command>) -> Result<()> {
        let name = cmd.name().to_string();
        if self.lookup.contains_key(&name) {
            bail!("duplicate command name: {}", name);
        }
        for alias in cmd.aliases() {
            if self.lookup.contains_key(*alias) {
                bail!("duplicate command alias: {}", alias);
            }
        }
        let idx = self.commands.len();
        self.lookup.insert(name, idx);
        for alias in cmd.aliases() {
            self.lookup.insert(alias.to_string(), idx);
        }
        self.commands.push(cmd);
        Ok(())
    }

    pub fn execute(&self, input: &str, ctx: &mut CommandContext) -> CommandOutput {
        let parts: Vec<&str> = input.split_whitespace().collect();
        if parts.is_empty() {
            return CommandOutput::Lines(vec![]);
        }

        let name = parts[0];
        let args = &parts[1..];

        match self.lookup.get(name) {
            Some(&idx) => self.commands[idx].execute(args, ctx),
            None => CommandOutput::Lines(vec![format!(
                "unknown command: '{}'. Type 'help' for available commands.",
                name
            )]),
        }
    }

    pub fn commands(&self) -> &[Box<dyn Command>] {
        &self.commands
    }
}

// ── Built-in commands ──

pub struct HelpCommand;

impl Command for HelpCommand {
    fn name(&self) -> &str {
        "help"
    }
    fn aliases(&self) -> &[&str] {
        &["?"]
    }
    fn description(&self) -> &str {
        "List commands or show specific help"
    }
    fn usage(&self) -> &str {
        "help [command]"
    }

    fn execute(&self, args: &[&str], _ctx: &mut CommandContext) -> CommandOutput {
        // Note: we can't access the CommandRegistry from inside a command easily,
        // so help with args is handled specially by the caller. This returns generic help.
        if !args.is_empty() {
            return CommandOutput::Lines(vec![format!(
                "help for '{}' — use 'help' to list all commands",
                args[0]
            )]);
        }
        // Placeholder — the real help list is injected by the caller
        CommandOutput::Lines(vec!["Type 'help' to list all commands.".into()])
    }
}

pub struct ClearCommand;

impl Command for ClearCommand {
    fn name(&self) -> &str {
        "clear"
    }
    fn aliases(&self) -> &[&str] {
        &["cls"]
    }
    fn description(&self) -> &str {
        "Clear console log"
    }

    fn execute(&self, _args: &[&str], ctx: &mut CommandContext) -> CommandOutput {
        ctx.console.clear_logs();
        CommandOutput::Lines(vec![])
    }
}

/// One console command per care action. `feed`, `pet` and `walk` all route
/// through here and differ only in the [`Action`] they carry.
pub struct CareCommand {
    action: Action,
}

impl CareCommand {
    pub fn new(action: Action) -> Self {
        Self { action }
    }
}

impl Command for CareCommand {
    fn name(&self) -> &str {
        self.action.name()
    }

    fn aliases(&self) -> &[&str] {
        match self.action {
            Action::Feed => &["f"],
            Action::Pet => &["p"],
            Action::Walk => &["w"],
        }
    }

    fn description(&self) -> &str {
        match self.action {
            Action::Feed => "Feed the dog (hunger +20, energy +5)",
            Action::Pet => "Pet the dog (happiness +20, energy +3)",
            Action::Walk => "Walk the dog (happiness +10, energy -15, hunger -10)",
        }
    }

    fn execute(&self, _args: &[&str], ctx: &mut CommandContext) -> CommandOutput {
        match ctx.sim.apply(self.action, ctx.now) {
            ActionOutcome::Applied => {
                CommandOutput::Lines(vec![format!("You {}.", self.action.message())])
            }
            ActionOutcome::Busy => {
                CommandOutput::Lines(vec![format!("{} is busy right now.", ctx.pet_name)])
            }
        }
    }
}

pub struct MoodCommand;

impl Command for MoodCommand {
    fn name(&self) -> &str {
        "mood"
    }
    fn description(&self) -> &str {
        "Show the current mood"
    }

    fn execute(&self, _args: &[&str], ctx: &mut CommandContext) -> CommandOutput {
        let mood = ctx.sim.mood();
        CommandOutput::Lines(vec![format!("Mood: {} ({})", mood.label(), mood.name())])
    }
}

pub struct StatsCommand;

impl Command for StatsCommand {
    fn name(&self) -> &str {
        "stats"
    }
    fn description(&self) -> &str {
        "Show the care gauges"
    }

    fn execute(&self, _args: &[&str], ctx: &mut CommandContext) -> CommandOutput {
        let mut lines = vec![
            format!("Hunger:    {:>3}%", ctx.sim.hunger().percent()),
            format!("Happiness: {:>3}%", ctx.sim.happiness().percent()),
            format!("Energy:    {:>3}%", ctx.sim.energy().percent()),
            format!("Mood:      {}", ctx.sim.mood().label()),
        ];
        if let Some(action) = ctx.sim.busy() {
            lines.push(format!("Busy:      {}", action.busy_label()));
        }
        CommandOutput::Lines(lines)
    }
}

pub struct DumpCommand;

impl Command for DumpCommand {
    fn name(&self) -> &str {
        "dump"
    }
    fn description(&self) -> &str {
        "Dump simulation state as JSON"
    }

    fn execute(&self, _args: &[&str], ctx: &mut CommandContext) -> CommandOutput {
        match serde_json::to_string_pretty(&ctx.sim.snapshot()) {
            Ok(json) => CommandOutput::Lines(json.lines().map(str::to_string).collect()),
            Err(err) => CommandOutput::Lines(vec![format!("error: {}", err)]),
        }
    }
}

pub struct SnapCommand;

impl Command for SnapCommand {
    fn name(&self) -> &str {
        "snap"
    }
    fn description(&self) -> &str {
        "Save the current frame as a PNG"
    }
    fn usage(&self) -> &str {
        "snap [path]"
    }

    fn execute(&self, args: &[&str], ctx: &mut CommandContext) -> CommandOutput {
        let path = match args.first() {
            Some(p) => PathBuf::from(p),
            None => {
                let ts = SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .map(|d| d.as_secs())
                    .unwrap_or(0);
                PathBuf::from(format!("biscuit-{}.png", ts))
            }
        };
        match ctx.canvas.save_png(&path) {
            Ok(()) => CommandOutput::Lines(vec![format!("Saved {}", path.display())]),
            Err(err) => CommandOutput::Lines(vec![format!("error: {}", err)]),
        }
    }
}

pub struct QuitCommand;

impl Command for QuitCommand {
    fn name(&self) -> &str {
        "quit"
    }
    fn aliases(&self) -> &[&str] {
        &["exit", "q"]
    }
    fn description(&self) -> &str {
        "Exit the dashboard"
    }

    fn execute(&self, _args: &[&str], _ctx: &mut CommandContext) -> CommandOutput {
        CommandOutput::Quit
    }
}

pub struct UptimeCommand;

impl Command for UptimeCommand {
    fn name(&self) -> &str {
        "uptime"
    }
    fn description(&self) -> &str {
        "Show session uptime"
    }

    fn execute(&self, _args: &[&str], ctx: &mut CommandContext) -> CommandOutput {
        let secs = ctx.now.saturating_duration_since(ctx.started_at).as_secs();
        let hours = secs / 3600;
        let mins = (secs % 3600) / 60;
        let s = secs % 60;
        CommandOutput::Lines(vec![format!("Uptime: {:02}:{:02}:{:02}", hours, mins, s)])
    }
}

pub struct TpsCommand;

impl Command for TpsCommand {
    fn name(&self) -> &str {
        "tps"
    }
    fn aliases(&self) -> &[&str] {
        &["fps"]
    }
    fn description(&self) -> &str {
        "Show ticks-per-second"
    }

    fn execute(&self, _args: &[&str], ctx: &mut CommandContext) -> CommandOutput {
        CommandOutput::Lines(vec![format!("TPS: {:.1}", ctx.meter.tps())])
    }
}

pub struct EchoCommand;

impl Command for EchoCommand {
    fn name(&self) -> &str {
        "echo"
    }
    fn description(&self) -> &str {
        "Print message to console"
    }
    fn usage(&self) -> &str {
        "echo <message>"
    }

    fn execute(&self, args: &[&str], _ctx: &mut CommandContext) -> CommandOutput {
        CommandOutput::Lines(vec![args.join(" ")])
    }
}

/// Create a CommandRegistry pre-loaded with all built-in commands.
pub fn builtin_registry() -> Result<CommandRegistry> {
    let mut reg = CommandRegistry::new();
    reg.register(Box::new(HelpCommand))?;
    reg.register(Box::new(ClearCommand))?;
    for action in Action::ALL {
        reg.register(Box::new(CareCommand::new(action)))?;
    }
    reg.register(Box::new(MoodCommand))?;
    reg.register(Box::new(StatsCommand))?;
    reg.register(Box::new(DumpCommand))?;
    reg.register(Box::new(SnapCommand))?;
    reg.register(Box::new(QuitCommand))?;
    reg.register(Box::new(UptimeCommand))?;
    reg.register(Box::new(TpsCommand))?;
    reg.register(Box::new(EchoCommand))?;
    Ok(reg)
}
