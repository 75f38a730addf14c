//! Line-oriented picker over the ordered view.
//!
//! Commands, one per line: `/text` filters (`/` alone clears), `j`/`k` move
//! the cursor, `p` toggles the pin, `d` deletes, an empty line pastes the
//! selected entry, `q` quits.

use std::io::Write;

use anyhow::Result;
use ch_core::{apply_filter, move_selection, Entry, ViewState};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::bootstrap::AppContext;

const VISIBLE_ROWS: usize = 15;
const PREVIEW_CHARS: usize = 80;
const HELP: &str = "/text filter | j/k move | p pin | d delete | enter paste | q quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerInput {
    Filter(String),
    Move(isize),
    TogglePin,
    Delete,
    Accept,
    Quit,
    Help,
}

/// What the caller has to do after an input was handled. Indices are
/// positions in the ordered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerAction {
    Redraw,
    Help,
    Pin(usize),
    Delete(usize),
    Paste(usize),
    Quit,
}

pub fn parse_input(line: &str) -> PickerInput {
    let line = line.trim_end_matches(['\r', '\n']);
    if let Some(query) = line.strip_prefix('/') {
        return PickerInput::Filter(query.to_owned());
    }
    match line.trim() {
        "" => PickerInput::Accept,
        "q" | "quit" => PickerInput::Quit,
        "j" => PickerInput::Move(1),
        "k" => PickerInput::Move(-1),
        "p" => PickerInput::TogglePin,
        "d" => PickerInput::Delete,
        _ => PickerInput::Help,
    }
}

pub struct Picker {
    entries: Vec<Entry>,
    pinned: Vec<bool>,
    view: ViewState,
}

impl Picker {
    pub fn new(items: Vec<(Entry, bool)>) -> Self {
        let (entries, pinned): (Vec<Entry>, Vec<bool>) = items.into_iter().unzip();
        let view = ViewState::new(&entries);
        Self {
            entries,
            pinned,
            view,
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn handle(&mut self, input: PickerInput) -> PickerAction {
        match input {
            PickerInput::Filter(query) => {
                self.view = apply_filter(&self.view, &self.entries, &query);
                PickerAction::Redraw
            }
            PickerInput::Move(delta) => {
                self.view = move_selection(&self.view, delta);
                PickerAction::Redraw
            }
            PickerInput::TogglePin => self.on_selected(PickerAction::Pin),
            PickerInput::Delete => self.on_selected(PickerAction::Delete),
            PickerInput::Accept => self.on_selected(PickerAction::Paste),
            PickerInput::Quit => PickerAction::Quit,
            PickerInput::Help => PickerAction::Help,
        }
    }

    fn on_selected(&self, action: fn(usize) -> PickerAction) -> PickerAction {
        self.view
            .selected_index()
            .map_or(PickerAction::Redraw, action)
    }

    /// Swaps in the entries after a mutation. The query is re-applied and the
    /// cursor stays on the same row, or the last one if the list got shorter.
    pub fn refresh(&mut self, items: Vec<(Entry, bool)>) {
        let row = self.view.selected;
        let (entries, pinned): (Vec<Entry>, Vec<bool>) = items.into_iter().unzip();
        self.entries = entries;
        self.pinned = pinned;

        let query = self.view.query.clone();
        let filtered = apply_filter(&self.view, &self.entries, &query);
        let last = filtered.filtered.len().saturating_sub(1);
        self.view = ViewState {
            selected: row.min(last),
            ..filtered
        };
    }

    /// Visible rows, scrolled so the cursor is always shown.
    pub fn render(&self, max_rows: usize) -> Vec<String> {
        let max_rows = max_rows.max(1);
        let start = self.view.selected.saturating_sub(max_rows - 1);

        self.view
            .filtered
            .iter()
            .enumerate()
            .skip(start)
            .take(max_rows)
            .map(|(row, &index)| {
                let cursor = if row == self.view.selected { '>' } else { ' ' };
                let pin = if self.pinned[index] { '*' } else { ' ' };
                format!(
                    "{cursor} [{index}]{pin} {}",
                    self.entries[index].preview(PREVIEW_CHARS)
                )
            })
            .collect()
    }
}

fn draw(picker: &Picker) -> Result<()> {
    let mut out = std::io::stdout().lock();
    writeln!(out)?;
    if picker.view().is_empty() {
        writeln!(out, "  (no entries)")?;
    }
    for row in picker.render(VISIBLE_ROWS) {
        writeln!(out, "{row}")?;
    }
    let shown = picker.view().filtered.len();
    write!(out, "[{shown}] {}> ", picker.view().query)?;
    out.flush()?;
    Ok(())
}

pub async fn run(ctx: &AppContext) -> Result<()> {
    let mut picker = Picker::new(ctx.history.ordered_items().await);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    println!("{HELP}");

    loop {
        // Pick up captures and edits made by other processes since the last draw.
        match ctx.history.refresh().await {
            Ok(()) => picker.refresh(ctx.history.ordered_items().await),
            Err(err) => eprintln!("reload failed: {err:#}"),
        }
        draw(&picker)?;
        let Some(line) = lines.next_line().await? else {
            return Ok(());
        };

        match picker.handle(parse_input(&line)) {
            PickerAction::Redraw => {}
            PickerAction::Help => println!("{HELP}"),
            PickerAction::Quit => return Ok(()),
            PickerAction::Pin(index) => {
                if let Err(err) = ctx.toggle_pin().execute(index).await {
                    eprintln!("pin failed: {err:#}");
                }
                picker.refresh(ctx.history.ordered_items().await);
            }
            PickerAction::Delete(index) => {
                if let Err(err) = ctx.delete_entry().execute(index).await {
                    eprintln!("delete failed: {err:#}");
                }
                picker.refresh(ctx.history.ordered_items().await);
            }
            PickerAction::Paste(index) => {
                ctx.paste_entry().execute(index).await?;
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(texts: &[(&str, bool)]) -> Vec<(Entry, bool)> {
        texts.iter().map(|(t, p)| (Entry::new(*t), *p)).collect()
    }

    #[test]
    fn parses_commands() {
        assert_eq!(parse_input("/git st\n"), PickerInput::Filter("git st".into()));
        assert_eq!(parse_input("/"), PickerInput::Filter(String::new()));
        assert_eq!(parse_input("\n"), PickerInput::Accept);
        assert_eq!(parse_input(" j "), PickerInput::Move(1));
        assert_eq!(parse_input("k"), PickerInput::Move(-1));
        assert_eq!(parse_input("p"), PickerInput::TogglePin);
        assert_eq!(parse_input("d"), PickerInput::Delete);
        assert_eq!(parse_input("q"), PickerInput::Quit);
        assert_eq!(parse_input("what"), PickerInput::Help);
    }

    #[test]
    fn filter_then_accept_pastes_best_match() {
        let mut picker = Picker::new(items(&[("f_o_o", false), ("bar", false), ("xfooy", false)]));

        picker.handle(PickerInput::Filter("foo".into()));
        assert_eq!(picker.view().filtered, vec![2, 0]);
        assert_eq!(picker.handle(PickerInput::Accept), PickerAction::Paste(2));

        picker.handle(PickerInput::Move(1));
        assert_eq!(picker.handle(PickerInput::TogglePin), PickerAction::Pin(0));
    }

    #[test]
    fn cursor_stops_at_both_ends() {
        let mut picker = Picker::new(items(&[("a", false), ("b", false)]));
        picker.handle(PickerInput::Move(-1));
        assert_eq!(picker.view().selected, 0);
        picker.handle(PickerInput::Move(5));
        assert_eq!(picker.view().selected, 1);
    }

    #[test]
    fn actions_on_empty_view_do_nothing() {
        let mut picker = Picker::new(items(&[("a", false)]));
        picker.handle(PickerInput::Filter("zzz".into()));
        assert_eq!(picker.handle(PickerInput::Accept), PickerAction::Redraw);
        assert_eq!(picker.handle(PickerInput::Delete), PickerAction::Redraw);
    }

    #[test]
    fn refresh_keeps_query_and_clamps_cursor() {
        let mut picker = Picker::new(items(&[("git a", false), ("git b", false), ("ls", false)]));
        picker.handle(PickerInput::Filter("git".into()));
        picker.handle(PickerInput::Move(1));
        assert_eq!(picker.handle(PickerInput::Delete), PickerAction::Delete(1));

        picker.refresh(items(&[("git a", false), ("ls", false)]));

        assert_eq!(picker.view().query, "git");
        assert_eq!(picker.view().filtered, vec![0]);
        assert_eq!(picker.view().selected, 0);
    }

    #[test]
    fn render_marks_cursor_and_pins() {
        let mut picker = Picker::new(items(&[("pinned one", true), ("a\nb", false)]));
        picker.handle(PickerInput::Move(1));

        assert_eq!(
            picker.render(10),
            vec!["  [0]* pinned one".to_string(), "> [1]  a…".to_string()]
        );
    }

    #[test]
    fn render_scrolls_to_cursor() {
        let texts: Vec<String> = (0..10).map(|i| format!("item {i}")).collect();
        let mut picker = Picker::new(texts.iter().map(|t| (Entry::new(t.as_str()), false)).collect());
        picker.handle(PickerInput::Move(7));

        let rows = picker.render(3);
        assert_eq!(rows.len(), 3);
        assert!(rows[2].starts_with("> [7]"), "{rows:?}");
    }
}
