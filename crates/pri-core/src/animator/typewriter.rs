//! Character-by-character markup reveal.
//!
//! A reveal unit is either one plain character or one complete tag fragment
//! (from `<` through the next `>`), so no rendered prefix ever ends inside a
//! tag. A `<` with no closing `>` takes the rest of the string as one unit.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::schedule::Scheduler;

/// Delay before the first unit appears.
pub const TYPE_START_DELAY: Duration = Duration::from_millis(250);

/// Delay between consecutive units.
pub const TYPE_UNIT_DELAY: Duration = Duration::from_millis(40);

/// Cursor over a markup string. Only moves forward.
#[derive(Debug, Clone)]
pub struct Typewriter {
    markup: String,
    cursor: usize,
}

impl Typewriter {
    pub fn new(markup: impl Into<String>) -> Self {
        Self {
            markup: markup.into(),
            cursor: 0,
        }
    }

    /// Reveal the next unit and return it, or `None` once complete.
    pub fn advance(&mut self) -> Option<&str> {
        let rest = &self.markup[self.cursor..];
        let first = rest.chars().next()?;
        let len = if first == '<' {
            rest.find('>').map_or(rest.len(), |close| close + 1)
        } else {
            first.len_utf8()
        };
        let start = self.cursor;
        self.cursor += len;
        Some(&self.markup[start..self.cursor])
    }

    /// Everything revealed so far.
    pub fn revealed(&self) -> &str {
        &self.markup[..self.cursor]
    }

    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn is_done(&self) -> bool {
        self.cursor >= self.markup.len()
    }
}

struct Run {
    writer: Typewriter,
    render: Box<dyn FnMut(&str)>,
}

/// Play `markup` through `render`, which receives the full revealed prefix
/// after each unit. Runs once to completion; there is no cancellation.
pub fn play<S>(scheduler: S, markup: impl Into<String>, render: impl FnMut(&str) + 'static)
where
    S: Scheduler + Clone + 'static,
{
    let run = Rc::new(RefCell::new(Run {
        writer: Typewriter::new(markup),
        render: Box::new(render),
    }));
    schedule_step(scheduler, run, TYPE_START_DELAY);
}

fn schedule_step<S>(scheduler: S, run: Rc<RefCell<Run>>, delay: Duration)
where
    S: Scheduler + Clone + 'static,
{
    let next = scheduler.clone();
    scheduler.after(
        delay,
        Box::new(move || {
            let advanced = {
                let mut guard = run.borrow_mut();
                let Run { writer, render } = &mut *guard;
                if writer.advance().is_some() {
                    render(writer.revealed());
                    true
                } else {
                    false
                }
            };
            if advanced {
                schedule_step(next, run, TYPE_UNIT_DELAY);
            } else {
                tracing::debug!("typewriter complete");
            }
        }),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::ManualScheduler;

    fn units(markup: &str) -> Vec<String> {
        let mut writer = Typewriter::new(markup);
        let mut out = Vec::new();
        while let Some(unit) = writer.advance() {
            out.push(unit.to_string());
        }
        out
    }

    #[test]
    fn tags_are_single_units() {
        assert_eq!(
            units("a<br>b<span class='x'>c</span>"),
            vec!["a", "<br>", "b", "<span class='x'>", "c", "</span>"]
        );
    }

    #[test]
    fn multibyte_characters_are_whole_units() {
        assert_eq!(units("Côte"), vec!["C", "ô", "t", "e"]);
    }

    #[test]
    fn unterminated_tag_takes_the_rest() {
        assert_eq!(units("ab<span"), vec!["a", "b", "<span"]);
    }

    #[test]
    fn empty_markup_is_immediately_done() {
        let mut writer = Typewriter::new("");
        assert!(writer.is_done());
        assert!(writer.advance().is_none());
    }

    #[test]
    fn play_follows_start_and_unit_delays() {
        let scheduler = ManualScheduler::new();
        let frames = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&frames);
        play(scheduler.clone(), "a<br>b", move |html| {
            sink.borrow_mut().push(html.to_string())
        });

        scheduler.advance(Duration::from_millis(249));
        assert!(frames.borrow().is_empty());

        scheduler.advance(Duration::from_millis(1));
        assert_eq!(*frames.borrow(), vec!["a"]);

        scheduler.advance(TYPE_UNIT_DELAY);
        assert_eq!(frames.borrow().last().map(String::as_str), Some("a<br>"));

        scheduler.advance(Duration::from_secs(1));
        assert_eq!(*frames.borrow(), vec!["a", "a<br>", "a<br>b"]);
        assert_eq!(scheduler.pending(), 0);
    }
}
