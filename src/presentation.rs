//! View glue: two number fields, a trigger and a transient message.

use std::fmt;
use std::num::IntErrorKind;

use crate::adder::Adder;
use crate::error::{InputError, PresentationError};
use crate::logging::log_warn;

pub const DEFAULT_MESSAGE_PREFIX: &str = "Sum rcvd from C file calculation: ";

/// Stable resource identifier of a view.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldId(String);

impl FieldId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FieldId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextField {
    pub id: FieldId,
    pub text: String,
}

impl TextField {
    pub fn new(id: impl Into<FieldId>) -> Self {
        Self {
            id: id.into(),
            text: String::new(),
        }
    }

    pub fn value(&self) -> Result<i32, InputError> {
        parse_field(&self.id, &self.text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastDuration {
    #[default]
    Short,
    Long,
}

impl ToastDuration {
    pub fn millis(self) -> u64 {
        match self {
            ToastDuration::Short => 2000,
            ToastDuration::Long => 3500,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Result,
    Validation,
}

/// A short-lived, auto-dismissing notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransientMessage {
    pub text: String,
    pub duration: ToastDuration,
    pub kind: MessageKind,
}

pub trait MessageSurface {
    fn show(&mut self, message: TransientMessage);
}

impl<S: MessageSurface + ?Sized> MessageSurface for &mut S {
    fn show(&mut self, message: TransientMessage) {
        (**self).show(message);
    }
}

/// Keeps every message shown; handy for hosts that render later.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub shown: Vec<TransientMessage>,
}

impl RecordingSurface {
    pub fn last(&self) -> Option<&TransientMessage> {
        self.shown.last()
    }
}

impl MessageSurface for RecordingSurface {
    fn show(&mut self, message: TransientMessage) {
        self.shown.push(message);
    }
}

/// Parses a base-10 `i32`. Surrounding whitespace is ignored.
pub fn parse_field(field: &FieldId, text: &str) -> Result<i32, InputError> {
    let trimmed = text.trim();
    trimmed.parse::<i32>().map_err(|err| match err.kind() {
        IntErrorKind::Empty => InputError::Empty {
            field: field.clone(),
        },
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => InputError::OutOfRange {
            field: field.clone(),
            text: text.to_string(),
        },
        _ => InputError::Invalid {
            field: field.clone(),
            text: text.to_string(),
        },
    })
}

pub struct SumPresenter<A, S> {
    first: TextField,
    second: TextField,
    adder: A,
    surface: S,
    message_prefix: String,
    duration: ToastDuration,
}

impl<A: Adder, S: MessageSurface> SumPresenter<A, S> {
    pub fn new(first: FieldId, second: FieldId, adder: A, surface: S) -> Self {
        Self {
            first: TextField::new(first),
            second: TextField::new(second),
            adder,
            surface,
            message_prefix: DEFAULT_MESSAGE_PREFIX.to_string(),
            duration: ToastDuration::Short,
        }
    }

    pub fn with_message_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.message_prefix = prefix.into();
        self
    }

    pub fn with_duration(mut self, duration: ToastDuration) -> Self {
        self.duration = duration;
        self
    }

    pub fn set_text(&mut self, field: &FieldId, text: &str) -> Result<(), PresentationError> {
        let target = self.field_mut(field)?;
        target.text = text.to_string();
        Ok(())
    }

    pub fn field(&self, field: &FieldId) -> Option<&TextField> {
        [&self.first, &self.second]
            .into_iter()
            .find(|candidate| &candidate.id == field)
    }

    pub fn has_field(&self, field: &FieldId) -> bool {
        self.field(field).is_some()
    }

    /// Handles one press of the trigger. Shows exactly one message: the sum
    /// on success, a validation hint otherwise.
    pub fn on_trigger(&mut self) -> Result<i32, InputError> {
        let operands = self
            .first
            .value()
            .and_then(|a| self.second.value().map(|b| (a, b)));
        match operands {
            Ok((a, b)) => {
                let sum = self.adder.add(a, b);
                self.surface.show(TransientMessage {
                    text: format!("{}{}", self.message_prefix, sum),
                    duration: self.duration,
                    kind: MessageKind::Result,
                });
                Ok(sum)
            }
            Err(err) => {
                log_warn(&format!("rejected input: {err}"));
                self.surface.show(TransientMessage {
                    text: validation_message(&err),
                    duration: self.duration,
                    kind: MessageKind::Validation,
                });
                Err(err)
            }
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    fn field_mut(&mut self, field: &FieldId) -> Result<&mut TextField, PresentationError> {
        if &self.first.id == field {
            Ok(&mut self.first)
        } else if &self.second.id == field {
            Ok(&mut self.second)
        } else {
            Err(PresentationError::UnknownField(field.clone()))
        }
    }
}

fn validation_message(err: &InputError) -> String {
    match err {
        InputError::Empty { field } => format!("Please enter a number in {field}"),
        InputError::Invalid { field, text } => {
            format!("\"{text}\" in {field} is not a whole number")
        }
        InputError::OutOfRange { field, text } => {
            format!(
                "\"{text}\" in {field} must be between {} and {}",
                i32::MIN,
                i32::MAX
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct CountingAdder {
        calls: Cell<usize>,
    }

    impl Adder for CountingAdder {
        fn add(&self, a: i32, b: i32) -> i32 {
            self.calls.set(self.calls.get() + 1);
            a.wrapping_add(b)
        }
    }

    fn presenter() -> SumPresenter<CountingAdder, RecordingSurface> {
        SumPresenter::new(
            "number_1".into(),
            "number_2".into(),
            CountingAdder {
                calls: Cell::new(0),
            },
            RecordingSurface::default(),
        )
    }

    fn enter(p: &mut SumPresenter<CountingAdder, RecordingSurface>, a: &str, b: &str) {
        p.set_text(&"number_1".into(), a).unwrap();
        p.set_text(&"number_2".into(), b).unwrap();
    }

    #[test]
    fn test_parse_accepts_signs_and_whitespace() {
        let id = FieldId::from("number_1");
        assert_eq!(parse_field(&id, "42"), Ok(42));
        assert_eq!(parse_field(&id, "-5"), Ok(-5));
        assert_eq!(parse_field(&id, "+7"), Ok(7));
        assert_eq!(parse_field(&id, " 12 \n"), Ok(12));
        assert_eq!(parse_field(&id, "-2147483648"), Ok(i32::MIN));
    }

    #[test]
    fn test_parse_classifies_failures() {
        let id = FieldId::from("number_2");
        assert!(matches!(parse_field(&id, ""), Err(InputError::Empty { .. })));
        assert!(matches!(parse_field(&id, "   "), Err(InputError::Empty { .. })));
        assert!(matches!(parse_field(&id, "abc"), Err(InputError::Invalid { .. })));
        assert!(matches!(parse_field(&id, "1.5"), Err(InputError::Invalid { .. })));
        assert!(matches!(parse_field(&id, "0x10"), Err(InputError::Invalid { .. })));
        assert!(matches!(
            parse_field(&id, "2147483648"),
            Err(InputError::OutOfRange { .. })
        ));
        assert_eq!(parse_field(&id, "x").unwrap_err().field(), &id);
    }

    #[test]
    fn test_trigger_shows_sum() {
        let mut p = presenter();
        enter(&mut p, "2", "3");
        assert_eq!(p.on_trigger(), Ok(5));
        let shown = p.surface().last().unwrap();
        assert_eq!(shown.text, "Sum rcvd from C file calculation: 5");
        assert_eq!(shown.kind, MessageKind::Result);
        assert_eq!(shown.duration, ToastDuration::Short);
    }

    #[test]
    fn test_invalid_input_shows_validation_and_skips_adder() {
        let mut p = presenter();
        enter(&mut p, "abc", "3");
        assert!(p.on_trigger().is_err());
        enter(&mut p, "3", "abc");
        assert!(p.on_trigger().is_err());
        assert_eq!(p.adder.calls.get(), 0);
        assert_eq!(p.surface().shown.len(), 2);
        assert!(p
            .surface()
            .shown
            .iter()
            .all(|m| m.kind == MessageKind::Validation && m.text.contains("abc")));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let mut p = presenter();
        let err = p.set_text(&"number_3".into(), "1").unwrap_err();
        assert_eq!(err, PresentationError::UnknownField("number_3".into()));
        assert!(p.has_field(&"number_1".into()));
        assert!(!p.has_field(&"sum".into()));
    }

    #[test]
    fn test_custom_prefix_and_duration() {
        let mut p = presenter()
            .with_message_prefix("= ")
            .with_duration(ToastDuration::Long);
        enter(&mut p, "-5", "5");
        p.on_trigger().unwrap();
        let shown = p.surface().last().unwrap();
        assert_eq!(shown.text, "= 0");
        assert_eq!(shown.duration.millis(), 3500);
    }
}
