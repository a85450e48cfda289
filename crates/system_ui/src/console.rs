//! In-page console log.
//!
//! Interaction handlers write through a [`ConsoleLog`] handle taken from context. Each line is
//! forwarded to the framework logger and kept in a bounded buffer that [`ConsolePanel`]
//! renders as an overlay.

use std::collections::VecDeque;

use leptos::*;

use crate::primitives::merge_layout_class;
use crate::{Icon, IconName, IconSize};

/// Lines kept when the provider does not choose a capacity.
pub const DEFAULT_CONSOLE_CAPACITY: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq)]
/// One recorded console line.
pub struct ConsoleLine {
    /// Monotonic sequence number, unique for the lifetime of the buffer.
    pub seq: u64,
    /// Logged text.
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Bounded FIFO of console lines; the oldest line is evicted once full.
pub struct ConsoleBuffer {
    capacity: usize,
    next_seq: u64,
    lines: VecDeque<ConsoleLine>,
}

impl ConsoleBuffer {
    /// Empty buffer holding at most `capacity` lines (at least one).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            next_seq: 0,
            lines: VecDeque::with_capacity(capacity),
        }
    }

    /// Appends `text`, evicting the oldest line when full.
    pub fn push(&mut self, text: impl Into<String>) {
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(ConsoleLine {
            seq: self.next_seq,
            text: text.into(),
        });
        self.next_seq += 1;
    }

    /// Drops every line. Sequence numbers keep counting.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Lines oldest first.
    pub fn lines(&self) -> impl Iterator<Item = &ConsoleLine> {
        self.lines.iter()
    }

    /// Number of stored lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns `true` when no line is stored.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Maximum number of stored lines.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for ConsoleBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_CONSOLE_CAPACITY)
    }
}

#[derive(Debug, Clone, Copy)]
/// Reactive handle to the shared console buffer.
pub struct ConsoleLog {
    buffer: RwSignal<ConsoleBuffer>,
}

impl ConsoleLog {
    /// Creates a handle over a fresh buffer owned by the current reactive scope.
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: create_rw_signal(ConsoleBuffer::new(capacity)),
        }
    }

    /// Records `text` and forwards it to the framework logger.
    pub fn log(&self, text: impl Into<String>) {
        let text = text.into();
        logging::log!("{text}");
        self.buffer.update(|buffer| buffer.push(text));
    }

    /// Removes all recorded lines.
    pub fn clear(&self) {
        self.buffer.update(ConsoleBuffer::clear);
    }

    /// Reactive snapshot of the recorded lines, oldest first.
    pub fn lines(&self) -> Signal<Vec<ConsoleLine>> {
        let buffer = self.buffer;
        Signal::derive(move || buffer.with(|buffer| buffer.lines().cloned().collect()))
    }
}

/// Creates a [`ConsoleLog`] and provides it to descendants.
pub fn provide_console_log(capacity: usize) -> ConsoleLog {
    let console = ConsoleLog::new(capacity);
    provide_context(console);
    console
}

/// The nearest provided [`ConsoleLog`], if any.
pub fn use_console_log() -> Option<ConsoleLog> {
    use_context::<ConsoleLog>()
}

#[component]
/// Toggleable overlay listing recent console lines.
pub fn ConsolePanel(
    /// Log whose lines are listed.
    console: ConsoleLog,
    /// Extra class merged onto the root element.
    #[prop(optional)]
    layout_class: Option<&'static str>,
) -> impl IntoView {
    let open = create_rw_signal(false);
    let lines = console.lines();

    view! {
        <div
            class=merge_layout_class("ui-console", layout_class)
            data-ui-primitive="true"
            data-ui-kind="console"
            data-ui-state=move || if open.get() { "open" } else { "closed" }
        >
            <button
                type="button"
                data-ui-slot="toggle"
                aria-expanded=move || open.get().to_string()
                on:click=move |_| open.update(|open| *open = !*open)
            >
                <Icon icon=IconName::Terminal size=IconSize::Sm />
                <span>"Console"</span>
            </button>
            <Show when=move || open.get() fallback=|| ()>
                <section data-ui-slot="panel" aria-label="Console log">
                    <header data-ui-slot="header">
                        <span>"Console Log"</span>
                        <button type="button" data-ui-slot="clear" on:click=move |_| console.clear()>
                            "Clear"
                        </button>
                    </header>
                    <div data-ui-slot="lines" role="log">
                        <For
                            each=move || lines.get()
                            key=|line| line.seq
                            children=|line| view! { <div data-ui-slot="line">{line.text}</div> }
                        />
                    </div>
                </section>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn texts(buffer: &ConsoleBuffer) -> Vec<&str> {
        buffer.lines().map(|line| line.text.as_str()).collect()
    }

    #[test]
    fn keeps_lines_in_order() {
        let mut buffer = ConsoleBuffer::new(4);
        buffer.push("one");
        buffer.push(String::from("two"));
        assert_eq!(texts(&buffer), vec!["one", "two"]);
        assert_eq!(buffer.len(), 2);
    }

    #[test]
    fn evicts_oldest_when_full() {
        let mut buffer = ConsoleBuffer::new(2);
        for text in ["a", "b", "c"] {
            buffer.push(text);
        }
        assert_eq!(texts(&buffer), vec!["b", "c"]);
        assert_eq!(
            buffer.lines().map(|line| line.seq).collect::<Vec<_>>(),
            vec![1, 2]
        );
    }

    #[test]
    fn clear_keeps_sequence_running() {
        let mut buffer = ConsoleBuffer::new(3);
        buffer.push("a");
        buffer.clear();
        assert!(buffer.is_empty());
        buffer.push("b");
        assert_eq!(buffer.lines().next().map(|line| line.seq), Some(1));
    }

    #[test]
    fn capacity_is_at_least_one() {
        let mut buffer = ConsoleBuffer::new(0);
        assert_eq!(buffer.capacity(), 1);
        buffer.push("x");
        buffer.push("y");
        assert_eq!(texts(&buffer), vec!["y"]);
        assert_eq!(ConsoleBuffer::default().capacity(), DEFAULT_CONSOLE_CAPACITY);
    }
}
