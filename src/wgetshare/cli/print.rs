use colored::Colorize;
use std::io::Write;
use wgetshare::api::{CmdMessage, MessageLevel, RawOutcome, Rendered, ShareBundle, ViewState};
use wgetshare::web::pages::format_time_ago;

const RULE: &str = "--------------------------------";

/// Notices go to stderr so `publish | ...` pipes only carry the links.
pub(super) fn eprint_messages(messages: &[CmdMessage]) {
    let output = render_messages(messages);
    if !output.is_empty() {
        eprint!("{}", output);
    }
}

fn render_messages(messages: &[CmdMessage]) -> String {
    messages
        .iter()
        .map(|m| {
            let line = format!("{}: {}", m.title, m.content);
            let line = match m.level {
                MessageLevel::Info => line.dimmed(),
                MessageLevel::Success => line.green(),
                MessageLevel::Warning => line.yellow(),
                MessageLevel::Error => line.red(),
            };
            format!("{}\n", line)
        })
        .collect()
}

pub(super) fn print_bundle(bundle: &ShareBundle) {
    print!("{}", render_bundle(bundle));
}

fn render_bundle(bundle: &ShareBundle) -> String {
    format!(
        "{} {}\n{} {}\n{} {}\n",
        "Share link:".bold(),
        bundle.view_url,
        "Raw link:  ".bold(),
        bundle.raw_url,
        "Download:  ".bold(),
        bundle.download_command
    )
}

/// Prints a rendered lookup. Returns whether a snippet was shown.
pub(super) fn print_rendered(rendered: &Rendered) -> std::io::Result<bool> {
    match rendered {
        Rendered::View(state) => Ok(print_view(state)),
        Rendered::Raw(outcome) => print_raw(outcome),
    }
}

/// The body exactly as stored: no trailing newline, no colour.
fn print_raw(outcome: &RawOutcome) -> std::io::Result<bool> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(outcome.body().as_bytes())?;
    stdout.flush()?;
    Ok(outcome.is_found())
}

/// Found snippets go to stdout; every other state is reported on stderr.
fn print_view(state: &ViewState) -> bool {
    match state {
        ViewState::Found { .. } => {
            println!("{}", render_found(state));
            true
        }
        ViewState::Loading => {
            eprintln!("{}", "Loading...".dimmed());
            false
        }
        ViewState::NotFound | ViewState::Error(_) => {
            eprintln!("{}", state.error_message().unwrap_or_default().red());
            false
        }
    }
}

fn render_found(state: &ViewState) -> String {
    match state {
        ViewState::Found {
            code,
            filename,
            created_at,
        } => {
            let mut header = String::new();
            if !filename.is_empty() {
                header.push_str(&format!("{} {}  ", "Filename:".bold(), filename.yellow()));
            }
            let shared = format!("Shared {}", format_time_ago(*created_at));
            header.push_str(&shared.dimmed().to_string());
            format!("{}\n{}\n{}", header, RULE, code)
        }
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use wgetshare::api::ViewError;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_render_messages_one_line_each() {
        plain();
        let out = render_messages(&[
            CmdMessage::success("Link generated!", "Your code is ready to share"),
            CmdMessage::warning("Check the filename", "odd"),
        ]);
        assert_eq!(
            out,
            "Link generated!: Your code is ready to share\nCheck the filename: odd\n"
        );
        assert_eq!(render_messages(&[]), "");
    }

    #[test]
    fn test_render_bundle_lists_all_artifacts() {
        plain();
        let id = uuid::Uuid::new_v4();
        let bundle = ShareBundle::derive("http://h", id, "hello");
        let out = render_bundle(&bundle);
        assert!(out.contains(&format!("Share link: http://h/share/{}", id)));
        assert!(out.contains(&format!("Raw link:   http://h/raw/{}", id)));
        assert!(out.contains(&format!(
            "Download:   wget \"http://h/raw/{}\" -O \"hello.txt\"",
            id
        )));
    }

    #[test]
    fn test_render_found_keeps_code_verbatim() {
        plain();
        let state = ViewState::Found {
            code: "  indented\n\ttabbed\n".to_string(),
            filename: "f".to_string(),
            created_at: Utc::now(),
        };
        let out = render_found(&state);
        assert!(out.starts_with("Filename: f  Shared"));
        assert!(out.ends_with(&format!("{}\n  indented\n\ttabbed\n", RULE)));
    }

    #[test]
    fn test_render_found_without_filename() {
        plain();
        let state = ViewState::Found {
            code: "x".to_string(),
            filename: String::new(),
            created_at: Utc::now(),
        };
        assert!(!render_found(&state).contains("Filename:"));
        assert_eq!(render_found(&ViewState::Error(ViewError::InvalidId)), "");
    }
}
