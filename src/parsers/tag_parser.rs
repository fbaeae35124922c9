use crate::domain::{DueDate, Status, Task};
use thiserror::Error;

/// Marks the start of the inline tag section of a description
pub const TAG_DELIMITER: &str = "##";

const TOKEN_SEPARATOR: char = ';';

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Doesn't contain tag delimiter")]
    MissingDelimiter,
}

/// Parser for the inline tag mini-language.
///
/// A description like `"Do laundry! ## important; tomorrow; home"` splits
/// at the first `##` into the stored description and a `;`-separated tag
/// section. Tokens are matched case-insensitively, in fixed precedence:
/// date keywords (`today`, `tomorrow`), status keywords (`to do`,
/// `up next`, `in progress`, `done`), priority keywords (`important`,
/// `urgent`), and everything left over becomes a free tag on the task.
pub struct TagParser {
    description: String,
}

impl TagParser {
    pub fn new() -> Self {
        Self {
            description: String::new(),
        }
    }

    /// The description extracted by the most recent `parse` call
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Split the input and apply its tags to the task.
    ///
    /// Without the delimiter the whole input becomes the task's description
    /// and the call reports `MissingDelimiter`; the description mutation has
    /// already happened, so callers may treat that error as non-fatal.
    /// Everything before the first delimiter is kept verbatim, untrimmed.
    pub fn parse(&mut self, input: &str, task: &mut Task) -> Result<(), ParseError> {
        let Some(at) = input.find(TAG_DELIMITER) else {
            self.description = input.to_string();
            task.set_raw_description(input);
            return Err(ParseError::MissingDelimiter);
        };

        self.description = input[..at].to_string();
        task.set_raw_description(&self.description);

        let mut tokens = tokenize(&input[at + TAG_DELIMITER.len()..]);
        apply_date(&mut tokens, task);
        apply_status(&mut tokens, task);
        apply_priority(&mut tokens, task);
        for token in &tokens {
            // Tokens are non-empty after trimming, so adding cannot fail
            let _ = task.add_tag(token);
        }
        Ok(())
    }
}

impl Default for TagParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Split the tag section on `;`, trimming each token and dropping empties.
/// A section without any `;` is one single token if non-blank.
fn tokenize(rest: &str) -> Vec<String> {
    if rest.contains(TOKEN_SEPARATOR) {
        rest.split(TOKEN_SEPARATOR)
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(String::from)
            .collect()
    } else {
        let trimmed = rest.trim();
        if trimmed.is_empty() {
            Vec::new()
        } else {
            vec![trimmed.to_string()]
        }
    }
}

/// Apply the first `today`/`tomorrow` token as the due date and consume it.
/// Later date keywords are not applied and fall through to the free-tag
/// pass.
fn apply_date(tokens: &mut Vec<String>, task: &mut Task) {
    let hit = tokens
        .iter()
        .position(|t| t.eq_ignore_ascii_case("today") || t.eq_ignore_ascii_case("tomorrow"));
    if let Some(i) = hit {
        let mut due = DueDate::new();
        if tokens[i].eq_ignore_ascii_case("tomorrow") {
            due.postpone_one_day();
        }
        task.set_due_date(Some(due));
        tokens.remove(i);
    }
}

fn status_keyword(token: &str) -> Option<Status> {
    match token.to_lowercase().as_str() {
        "to do" => Some(Status::Todo),
        "up next" => Some(Status::UpNext),
        "in progress" => Some(Status::InProgress),
        "done" => Some(Status::Done),
        _ => None,
    }
}

/// Apply the first status keyword, then consume it and its duplicates.
/// A *different* status keyword later in the list is left alone and ends up
/// as a free tag.
fn apply_status(tokens: &mut Vec<String>, task: &mut Task) {
    let hit = tokens
        .iter()
        .enumerate()
        .find_map(|(i, t)| status_keyword(t).map(|s| (i, s)));
    let Some((i, status)) = hit else {
        return;
    };
    task.set_status(status);
    let keyword = tokens[i].clone();
    tokens.retain(|t| !t.eq_ignore_ascii_case(&keyword));
}

/// Consume every `important`/`urgent` token, setting the matching priority
/// bit. Re-setting a bit that is already set is a no-op.
fn apply_priority(tokens: &mut Vec<String>, task: &mut Task) {
    tokens.retain(|t| {
        if t.eq_ignore_ascii_case("important") {
            task.priority_mut().set_important(true);
            false
        } else if t.eq_ignore_ascii_case("urgent") {
            task.priority_mut().set_urgent(true);
            false
        } else {
            true
        }
    });
}
