//! Shared entry state machine for the list-shaped résumé sections.
//!
//! A section is a run of lines. Some lines open a new entry (the section's
//! entry-start trigger); the rest fill fields of the entry in progress, one
//! field per line, in a fixed priority order, never overwriting a field that
//! is already set.

use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MachineState {
    /// The next trigger line opens a new entry.
    AwaitingEntryStart,
    /// An entry was just opened; lines go to its fields.
    FillingFields,
}

/// One fillable field. `apply` returns true only if it set the field, which
/// implies the field was unset and the line matched.
pub struct FieldRule<D> {
    pub name: &'static str,
    pub apply: fn(&mut D, &str) -> bool,
}

/// An entry type that can be accumulated line by line.
pub trait EntryDraft: Default + PartialEq + Sized + 'static {
    /// Fields in priority order.
    const FIELDS: &'static [FieldRule<Self>];

    fn is_entry_start(line: &str) -> bool;

    fn start(line: &str) -> Self;

    fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

pub struct EntryMachine<D: EntryDraft> {
    state: MachineState,
    current: D,
    entries: Vec<D>,
}

impl<D: EntryDraft> Default for EntryMachine<D> {
    fn default() -> Self {
        Self {
            state: MachineState::AwaitingEntryStart,
            current: D::default(),
            entries: Vec::new(),
        }
    }
}

impl<D: EntryDraft> EntryMachine<D> {
    pub fn feed(&mut self, line: &str) {
        if self.state == MachineState::AwaitingEntryStart && D::is_entry_start(line) {
            self.flush();
            self.current = D::start(line);
            self.state = MachineState::FillingFields;
            return;
        }

        for rule in D::FIELDS {
            if (rule.apply)(&mut self.current, line) {
                trace!(field = rule.name, "field set");
                self.state = MachineState::AwaitingEntryStart;
                return;
            }
        }
    }

    pub fn finish(mut self) -> Vec<D> {
        self.flush();
        self.entries
    }

    fn flush(&mut self) {
        let draft = std::mem::take(&mut self.current);
        if !draft.is_empty() {
            self.entries.push(draft);
        }
    }
}

/// Runs a fresh machine over `lines` and returns the entries in source order.
pub fn collect_entries<D: EntryDraft>(lines: &[String]) -> Vec<D> {
    let mut machine = EntryMachine::<D>::default();
    for line in lines {
        machine.feed(line);
    }
    machine.finish()
}

/// Sets `slot` to `value` if it is empty. Shared by the field rules.
pub fn set_once(slot: &mut Option<String>, value: impl Into<String>) -> bool {
    if slot.is_some() {
        return false;
    }
    *slot = Some(value.into());
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, PartialEq)]
    struct Note {
        title: String,
        body: Option<String>,
        tags: Vec<String>,
    }

    impl Note {
        fn fill_body(&mut self, line: &str) -> bool {
            !line.starts_with('#') && set_once(&mut self.body, line)
        }

        fn fill_tag(&mut self, line: &str) -> bool {
            match line.strip_prefix('#') {
                Some(tag) => {
                    self.tags.push(tag.to_string());
                    true
                }
                None => false,
            }
        }
    }

    impl EntryDraft for Note {
        const FIELDS: &'static [FieldRule<Self>] = &[
            FieldRule {
                name: "body",
                apply: Note::fill_body,
            },
            FieldRule {
                name: "tag",
                apply: Note::fill_tag,
            },
        ];

        fn is_entry_start(line: &str) -> bool {
            line.starts_with("NOTE")
        }

        fn start(line: &str) -> Self {
            Note {
                title: line.to_string(),
                ..Default::default()
            }
        }
    }

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_entries_flush_on_trigger_and_at_end() {
        let notes = collect_entries::<Note>(&lines(&[
            "NOTE one", "first body", "#a", "NOTE two", "second body",
        ]));
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].title, "NOTE one");
        assert_eq!(notes[0].body.as_deref(), Some("first body"));
        assert_eq!(notes[0].tags, vec!["a"]);
        assert_eq!(notes[1].title, "NOTE two");
    }

    #[test]
    fn test_trigger_right_after_start_is_a_field_line() {
        // Directly after a start line the machine is filling fields, so a
        // trigger-shaped line is treated as content.
        let notes = collect_entries::<Note>(&lines(&["NOTE one", "NOTE looks like a title"]));
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].body.as_deref(), Some("NOTE looks like a title"));
    }

    #[test]
    fn test_first_match_wins() {
        let notes = collect_entries::<Note>(&lines(&["NOTE one", "kept", "NOTE two"]));
        assert_eq!(notes[0].body.as_deref(), Some("kept"));

        let mut machine = EntryMachine::<Note>::default();
        for line in ["NOTE x", "kept", "ignored"] {
            machine.feed(line);
        }
        let notes = machine.finish();
        assert_eq!(notes[0].body.as_deref(), Some("kept"));
    }

    #[test]
    fn test_fields_before_any_trigger_still_flush() {
        let notes = collect_entries::<Note>(&lines(&["orphan body", "NOTE one"]));
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].title, "");
        assert_eq!(notes[0].body.as_deref(), Some("orphan body"));
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        assert!(collect_entries::<Note>(&[]).is_empty());
    }

    #[test]
    fn test_state_transitions() {
        let mut machine = EntryMachine::<Note>::default();
        assert_eq!(machine.state, MachineState::AwaitingEntryStart);
        machine.feed("NOTE one");
        assert_eq!(machine.state, MachineState::FillingFields);
        machine.feed("body");
        assert_eq!(machine.state, MachineState::AwaitingEntryStart);
    }
}
