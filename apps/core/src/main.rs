// MoodChat terminal host
// Reads one message per line from stdin and prints the reply.

use anyhow::{Context, Result};
use moodchat_core::actors::ResponderHandle;
use moodchat_core::brain::MoodAnalyzer;
use moodchat_core::telemetry::{self, LogFormat};
use moodchat_core::{EngineConfig, Mood};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

const HELP: &str =
    "Commands: /mood <tag> (or /mood to unset), /moods [days], /analyze <text>, /history, /clear, /quit";

#[derive(Debug, PartialEq)]
enum Command {
    Say(String),
    SetMood(Option<Mood>),
    Moods(Option<u32>),
    Analyze(String),
    History,
    Clear,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let Some(rest) = line.strip_prefix('/') else {
        return Ok(Command::Say(line.to_string()));
    };

    let mut parts = rest.splitn(2, char::is_whitespace);
    let name = parts.next().unwrap_or_default().to_lowercase();
    let arg = parts.next().map(str::trim).filter(|s| !s.is_empty());

    match name.as_str() {
        "quit" | "exit" => Ok(Command::Quit),
        "clear" => Ok(Command::Clear),
        "history" => Ok(Command::History),
        "help" => Ok(Command::Help),
        "mood" => match arg {
            None => Ok(Command::SetMood(None)),
            Some(tag) => tag.parse::<Mood>().map(|m| Command::SetMood(Some(m))).map_err(|e| e.to_string()),
        },
        "moods" => match arg {
            None => Ok(Command::Moods(None)),
            Some(days) => days
                .parse::<u32>()
                .map(|d| Command::Moods(Some(d)))
                .map_err(|_| format!("'{}' is not a number of days", days)),
        },
        "analyze" => arg
            .map(|text| Command::Analyze(text.to_string()))
            .ok_or_else(|| "Usage: /analyze <text>".to_string()),
        other => Err(format!("Unknown command '/{}'. {}", other, HELP)),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    telemetry::init_tracing(LogFormat::from_env());

    let config = EngineConfig::from_env().context("Invalid MOODCHAT_* configuration")?;
    let responder = ResponderHandle::new(&config).context("Failed to start the responder")?;
    let user_id = std::env::var("MOODCHAT_USER").unwrap_or_else(|_| "local".to_string());
    info!("MoodChat ready for user {}", user_id);

    let analyzer = MoodAnalyzer::new();
    println!("MoodChat. {}", HELP);
    let mut explicit_mood: Option<Mood> = None;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(message) => {
                println!("{}", message);
                continue;
            }
        };

        match command {
            Command::Say(text) => {
                let reply = responder.respond(user_id.clone(), text, explicit_mood).await;
                println!("{}\n", reply.text);
            }
            Command::SetMood(mood) => {
                explicit_mood = mood;
                match mood {
                    Some(m) => println!("Mood set to {}.", m),
                    None => println!("Mood unset."),
                }
            }
            Command::Moods(days) => {
                let summary = responder.mood_summary(user_id.clone(), days).await?;
                if summary.total == 0 {
                    println!("No moods recorded yet.");
                }
                for (mood, count) in &summary.by_mood {
                    println!("{:>12}: {}", mood, count);
                }
                if let Some(mood) = summary.dominant() {
                    println!("Mostly {} across {} messages.", mood, summary.total);
                }
            }
            Command::Analyze(text) => {
                let analysis = analyzer.analyze(&text);
                println!("{} ({:.0}% confidence)", analysis.mood, analysis.confidence * 100.0);
                for (mood, share) in analysis.emotions.iter().filter(|(_, share)| **share > 0.0) {
                    println!("{:>12}: {:.0}%", mood, share * 100.0);
                }
            }
            Command::History => {
                for record in responder.history(user_id.clone(), None).await? {
                    let who = if record.is_user { "you" } else { "bot" };
                    println!("[{}] {}: {}", record.created_at.format("%H:%M:%S"), who, record.text);
                }
            }
            Command::Clear => {
                let removed = responder.clear_history(user_id.clone()).await?;
                explicit_mood = None;
                println!("Cleared {} messages. Starting fresh.", removed);
            }
            Command::Help => println!("{}", HELP),
            Command::Quit => break,
        }
    }

    responder.shutdown().await.ok();
    info!("MoodChat stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("  hello  "), Ok(Command::Say("hello".to_string())));
        assert_eq!(parse_command("/quit"), Ok(Command::Quit));
        assert_eq!(parse_command("/mood Sad"), Ok(Command::SetMood(Some(Mood::Sad))));
        assert_eq!(parse_command("/mood"), Ok(Command::SetMood(None)));
        assert!(parse_command("/mood grumpy").is_err());
        assert!(parse_command("/dance").is_err());
        assert_eq!(parse_command("/moods"), Ok(Command::Moods(None)));
        assert_eq!(parse_command("/moods 30"), Ok(Command::Moods(Some(30))));
        assert!(parse_command("/moods lots").is_err());
        assert_eq!(parse_command("/analyze very sad"), Ok(Command::Analyze("very sad".to_string())));
        assert!(parse_command("/analyze").is_err());
    }
}
