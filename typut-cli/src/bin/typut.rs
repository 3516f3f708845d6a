use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use serde::Serialize;
use typut_engine::{Style, render};
use typut_im::config::Settings;
use typut_im::core::candidate::CandidateList;
use typut_im::host::{CandidatePanel, MemoryClient};
use typut_im::{KeyCode, KeyEvent, Session};

/// typut: typographic text transforms and an input-method simulator.
#[derive(Parser, Debug)]
#[command(name = "typut")]
#[command(about = "typut: typographic text transforms and an input-method simulator")]
struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Settings file (defaults to the user config file)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render text in one style, or in every style.
    Render {
        text: String,

        /// Style id (e.g. bold, fraktur, double-struck); all styles if omitted
        #[arg(short, long)]
        style: Option<Style>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the candidate list an input session would offer for text.
    ///
    /// Labels are included when `candidates.annotate` is set.
    Candidates {
        text: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List the available styles in candidate order.
    Styles,

    /// Feed a key script through the input controller.
    ///
    /// Plain characters are typed as-is. Special keys are written in angle
    /// brackets: <tab> <enter> <space> <bs> <esc> <up> <down> <left> <right>
    /// <eisu>, and <cmd-X> types X with the command key held. Use << for a
    /// literal '<'.
    Replay {
        script: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct Rendering<'a> {
    style: Style,
    text: &'a str,
}

#[derive(Serialize)]
struct CandidateRow<'a> {
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<&'a str>,
}

#[derive(Serialize)]
struct ReplayStep {
    key: String,
    consumed: bool,
    state: String,
    marked: String,
    selected: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    panel: Vec<String>,
}

#[derive(Serialize)]
struct ReplayOutcome {
    steps: Vec<ReplayStep>,
    committed: String,
}

/// A key from a replay script, with the label it was written as
struct ScriptKey {
    label: String,
    event: KeyEvent,
}

fn special_key(name: &str) -> Option<KeyEvent> {
    let code = match name {
        "tab" => KeyCode::TAB,
        "enter" | "return" => KeyCode::RETURN,
        "space" => KeyCode::SPACE,
        "bs" | "delete" => KeyCode::DELETE,
        "esc" | "escape" => KeyCode::ESCAPE,
        "up" => KeyCode::UP,
        "down" => KeyCode::DOWN,
        "left" => KeyCode::LEFT,
        "right" => KeyCode::RIGHT,
        "eisu" => KeyCode::JIS_EISU,
        _ => {
            let rest = name.strip_prefix("cmd-")?;
            let mut chars = rest.chars();
            let ch = chars.next()?;
            if chars.next().is_some() {
                return special_key(rest).map(KeyEvent::with_command);
            }
            return Some(KeyEvent::typed(ch).with_command());
        }
    };
    Some(KeyEvent::press(code))
}

fn parse_script(script: &str) -> Result<Vec<ScriptKey>> {
    let mut keys = Vec::new();
    let mut rest = script;
    while let Some(ch) = rest.chars().next() {
        if let Some(after) = rest.strip_prefix("<<") {
            keys.push(ScriptKey {
                label: "<".to_string(),
                event: KeyEvent::typed('<'),
            });
            rest = after;
        } else if ch == '<' {
            let Some(end) = rest.find('>') else {
                bail!("unterminated key name in {:?}", rest);
            };
            let name = &rest[1..end];
            let Some(event) = special_key(&name.to_ascii_lowercase()) else {
                bail!("unknown key <{}>", name);
            };
            keys.push(ScriptKey {
                label: format!("<{}>", name),
                event,
            });
            rest = &rest[end + 1..];
        } else {
            keys.push(ScriptKey {
                label: ch.to_string(),
                event: KeyEvent::typed(ch),
            });
            rest = &rest[ch.len_utf8()..];
        }
    }
    Ok(keys)
}

fn load_settings(path: Option<&PathBuf>) -> Result<Settings> {
    match path {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    }
}

fn run_render(text: &str, style: Option<Style>, json: bool) -> Result<()> {
    let styles: Vec<Style> = match style {
        Some(style) => vec![style],
        None => Style::ALL.to_vec(),
    };
    let rendered: Vec<String> = styles.iter().map(|s| render(text, *s)).collect();

    if json {
        let rows: Vec<_> = styles
            .iter()
            .zip(&rendered)
            .map(|(style, text)| Rendering {
                style: *style,
                text,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else if style.is_some() {
        println!("{}", rendered[0]);
    } else {
        for (style, text) in styles.iter().zip(&rendered) {
            println!("{:<24}{}", style.id(), text);
        }
    }
    Ok(())
}

fn candidate_rows(candidates: &CandidateList) -> Vec<CandidateRow<'_>> {
    candidates
        .candidates()
        .iter()
        .map(|c| CandidateRow {
            text: &c.text,
            label: c.annotation.as_deref(),
        })
        .collect()
}

fn run_candidates(settings: &Settings, text: &str, json: bool) -> Result<()> {
    let candidates = CandidateList::for_composition(text, settings.candidates.annotate);
    if json {
        println!("{}", serde_json::to_string_pretty(&candidate_rows(&candidates))?);
        return Ok(());
    }
    for (i, c) in candidates.candidates().iter().enumerate() {
        println!("{:>2}. {}", i + 1, c);
    }
    Ok(())
}

fn run_styles() {
    for style in Style::ALL {
        println!(
            "{:<24}{:<24}{}",
            style.id(),
            style.display_name(),
            render(style.display_name(), style)
        );
    }
}

fn run_replay(settings: &Settings, script: &str, json: bool) -> Result<()> {
    let keys = parse_script(script)?;
    let mut session = Session::with_settings(settings, MemoryClient::new(), CandidatePanel::new());

    let mut steps = Vec::with_capacity(keys.len());
    for key in keys {
        let consumed = session.handle_key(&key.event);
        tracing::debug!("{} consumed={}", key.label, consumed);
        steps.push(ReplayStep {
            key: key.label,
            consumed,
            state: format!("{:?}", session.controller().state()),
            marked: session.client().marked_text().to_string(),
            selected: session.controller().selected_candidate().map(str::to_string),
            panel: session.window().page_lines(),
        });
    }
    let outcome = ReplayOutcome {
        steps,
        committed: session.client().committed_text().to_string(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }
    for step in &outcome.steps {
        let consumed = if step.consumed { "consumed" } else { "passed" };
        print!("{:<10}{:<9}{:<10}[{}]", step.key, consumed, step.state, step.marked);
        if let Some(selected) = &step.selected {
            print!(" -> {}", selected);
        }
        println!();
        for line in &step.panel {
            println!("    {}", line);
        }
    }
    println!("committed: {}", outcome.committed);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = load_settings(cli.config.as_ref())?;

    let filter = if cli.verbose {
        "typut_im=debug,typut_engine=debug,typut=debug"
    } else {
        settings.logging.filter.as_str()
    };
    typut_im::init_logging(filter);

    match cli.command {
        Commands::Render { text, style, json } => run_render(&text, style, json),
        Commands::Candidates { text, json } => run_candidates(&settings, &text, json),
        Commands::Styles => {
            run_styles();
            Ok(())
        }
        Commands::Replay { script, json } => run_replay(&settings, &script, json),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(script: &str) -> Vec<String> {
        parse_script(script)
            .unwrap()
            .into_iter()
            .map(|k| k.label)
            .collect()
    }

    #[test]
    fn test_parse_plain_and_special_keys() {
        assert_eq!(labels("ab<tab><Down>"), vec!["a", "b", "<tab>", "<Down>"]);
        let keys = parse_script("<enter>").unwrap();
        assert_eq!(keys[0].event.key_code, KeyCode::RETURN);
    }

    #[test]
    fn test_parse_literal_angle_bracket() {
        let keys = parse_script("a<<b").unwrap();
        assert_eq!(keys.len(), 3);
        assert_eq!(keys[1].event.text(), Some("<"));
    }

    #[test]
    fn test_parse_command_keys() {
        let keys = parse_script("<cmd-c><cmd-enter>").unwrap();
        assert!(keys[0].event.modifiers.command_key);
        assert_eq!(keys[0].event.text(), Some("c"));
        assert!(keys[1].event.modifiers.command_key);
        assert_eq!(keys[1].event.key_code, KeyCode::RETURN);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_script("<tab").is_err());
        assert!(parse_script("<hyper>").is_err());
    }

    #[test]
    fn test_replay_session_commits_style() {
        let settings = Settings::default();
        let mut session =
            Session::with_settings(&settings, MemoryClient::new(), CandidatePanel::new());
        for key in parse_script("Hi<tab><down><down><down><enter>").unwrap() {
            session.handle_key(&key.event);
        }
        // Hi, hi, HI, then Bold
        assert_eq!(session.client().committed_text(), "𝐇𝐢");
    }

    #[test]
    fn test_candidate_rows_follow_annotate_setting() {
        let mut settings = Settings::default();
        let annotated = CandidateList::for_composition("Hi", settings.candidates.annotate);
        let rows = candidate_rows(&annotated);
        assert_eq!(rows[0].label, None);
        assert_eq!(rows[1].text, "hi");
        assert_eq!(rows[1].label, Some("lowercase"));

        settings.candidates.annotate = false;
        let plain = CandidateList::for_composition("Hi", settings.candidates.annotate);
        assert!(candidate_rows(&plain).iter().all(|row| row.label.is_none()));
    }
}
