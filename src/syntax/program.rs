//! Program container
//!
//! A [`Program`] is an ordered list of [`Line`]s. [`Program::push`] appends
//! without checks; ordering and uniqueness of line numbers are up to the
//! caller. [`Program::insert`] offers editor-style placement for callers that
//! want a sorted listing.

use super::ast::{Line, LineNumber};
use super::printer::print_line;
use rustc_hash::FxHashMap;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    lines: Vec<Line>,
}

impl Program {
    pub fn new() -> Self {
        Program::default()
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Append a line as-is.
    pub fn push(&mut self, line: Line) {
        self.lines.push(line);
    }

    /// Place a line before the first line with a larger number, replacing a
    /// line that already has the same number.
    pub fn insert(&mut self, line: Line) {
        let slot = self
            .lines
            .iter()
            .position(|existing| existing.number >= line.number);

        match slot {
            Some(i) if self.lines[i].number == line.number => {
                debug!(number = line.number, "replacing line");
                self.lines[i] = line;
            }
            Some(i) => self.lines.insert(i, line),
            None => self.lines.push(line),
        }
    }

    /// Remove the first line carrying `number`.
    pub fn remove(&mut self, number: LineNumber) -> Option<Line> {
        let i = self.lines.iter().position(|line| line.number == number)?;
        debug!(number, "removing line");
        Some(self.lines.remove(i))
    }

    pub fn get(&self, number: LineNumber) -> Option<&Line> {
        self.lines.iter().find(|line| line.number == number)
    }

    /// Map each line number to the index of its first occurrence.
    pub fn line_index(&self) -> FxHashMap<LineNumber, usize> {
        let mut index = FxHashMap::default();
        for (i, line) in self.lines.iter().enumerate() {
            index.entry(line.number).or_insert(i);
        }
        index
    }

    /// `(line, target)` pairs for jumps whose target line does not exist.
    pub fn dangling_jumps(&self) -> Vec<(LineNumber, LineNumber)> {
        let index = self.line_index();
        self.lines
            .iter()
            .filter_map(|line| {
                let target = line.command.jump_target()?;
                (!index.contains_key(&target)).then_some((line.number, target))
            })
            .collect()
    }

    /// Every line printed, one per row.
    pub fn listing(&self) -> String {
        self.lines
            .iter()
            .map(print_line)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl FromIterator<Line> for Program {
    fn from_iter<I: IntoIterator<Item = Line>>(iter: I) -> Self {
        Program {
            lines: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Line;
    type IntoIter = std::slice::Iter<'a, Line>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::ast::{Command, Expression};

    fn rem(number: LineNumber, text: &str) -> Line {
        Line::new(number, Command::Rem(text.to_string()))
    }

    #[test]
    fn test_insert_orders_and_replaces() {
        let mut program = Program::new();
        program.insert(rem(20, "b"));
        program.insert(rem(10, "a"));
        program.insert(rem(30, "c"));
        program.insert(rem(20, "B"));

        let numbers: Vec<_> = program.lines().iter().map(|l| l.number).collect();
        assert_eq!(numbers, vec![10, 20, 30]);
        assert_eq!(program.get(20), Some(&rem(20, "B")));
    }

    #[test]
    fn test_push_keeps_caller_order() {
        let mut program = Program::new();
        program.push(rem(20, "b"));
        program.push(rem(10, "a"));
        program.push(rem(10, "again"));

        assert_eq!(program.len(), 3);
        assert_eq!(program.line_index()[&10], 1);
        assert_eq!(program.remove(10), Some(rem(10, "a")));
        assert_eq!(program.remove(99), None);
    }

    #[test]
    fn test_dangling_jumps() {
        let program: Program = vec![
            Line::new(10, Command::Goto(30)),
            Line::new(
                20,
                Command::If {
                    condition: Expression::var("X"),
                    target: 10,
                },
            ),
            Line::new(30, Command::Goto(40)),
        ]
        .into_iter()
        .collect();

        assert_eq!(program.dangling_jumps(), vec![(30, 40)]);
    }

    #[test]
    fn test_listing() {
        let program: Program = vec![
            Line::new(10, Command::Input("N".to_string())),
            Line::new(20, Command::Print(Expression::var("N"))),
        ]
        .into_iter()
        .collect();

        assert_eq!(program.listing(), "10 INPUT N\n20 PRINT N");
        assert_eq!(Program::new().listing(), "");
    }
}
