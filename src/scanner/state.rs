//! Per-event accumulator for the resource scan.
//!
//! The scanner is a single forward pass over start-tag / text / end-tag
//! events. All cross-event state lives in [`ScanState`], which makes the
//! eligibility rules testable from plain event sequences without any XML
//! reader involved.
//!
//! Nested elements are not treated specially: the accumulator tracks only
//! the most recent start tag, so an eligible inner element takes over from
//! its parent (last tag entered, last attributes seen).

use crate::diagnostics::Diagnostic;
use crate::model::{ResourceEntry, ResourceKind, ResourceModel};

use super::ScanOutcome;

pub(crate) const TAG_ITEM: &str = "item";
pub(crate) const ATTR_TYPE: &str = "type";
pub(crate) const ATTR_STATIC: &str = "static";
pub(crate) const ATTR_NAME: &str = "name";

/// The `static` attribute must be exactly this literal to opt an entry in.
const STATIC_TRUE: &str = "true";

/// Mutable scan state threaded through the event stream.
#[derive(Debug, Default)]
pub struct ScanState {
    /// Most recently opened tag, cleared when an element is ineligible.
    tag: Option<String>,
    /// Resolved kind for the current element, if any.
    kind: Option<ResourceKind>,
    /// Declared entry name from the `name` attribute.
    name: Option<String>,
    /// Raw text content captured since the last eligible start tag.
    text: Option<String>,

    model: ResourceModel,
    diagnostics: Vec<Diagnostic>,
}

impl ScanState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a start-tag event.
    ///
    /// The kind is adopted from a `bool`/`integer`/`string` tag directly, or
    /// from a non-empty `type` attribute on an `item` tag. An element without
    /// `static="true"` and a non-empty `name` is ineligible: kind and tag
    /// tracking are dropped on the spot, so its text is never captured.
    pub fn start_element(
        &mut self,
        tag: &str,
        type_attr: Option<&str>,
        static_attr: Option<&str>,
        name_attr: Option<&str>,
    ) {
        self.tag = Some(tag.to_string());

        if tag == TAG_ITEM {
            // An absent or blank type attribute leaves a previously adopted
            // kind in place; an unrecognized one clears it.
            if let Some(ty) = type_attr {
                if !ty.trim().is_empty() {
                    self.kind = ResourceKind::parse(ty);
                }
            }
        } else if let Some(kind) = ResourceKind::parse(tag) {
            self.kind = Some(kind);
        }

        let name_ok = name_attr.is_some_and(|n| !n.trim().is_empty());
        if static_attr == Some(STATIC_TRUE) && name_ok {
            self.name = name_attr.map(str::to_string);
        } else {
            self.kind = None;
            self.tag = None;
        }
    }

    /// Handle a text event. Only retained when an eligible element is open.
    pub fn text(&mut self, raw: &str) {
        if self.tag.is_some() && self.kind.is_some() {
            self.text = Some(raw.to_string());
        }
    }

    /// Handle an end-tag event: classify and append the accumulated entry if
    /// kind, tag, name, and text are all present, then reset for the next
    /// element. The declared name survives the reset, matching the flat
    /// event model.
    pub fn end_element(&mut self) {
        if let (Some(kind), Some(name), Some(_), Some(text)) = (
            self.kind,
            self.name.clone(),
            self.tag.as_deref(),
            self.text.clone(),
        ) {
            if !text.trim().is_empty() {
                self.classify(kind, name, &text);
            }
        }
        self.kind = None;
        self.tag = None;
        self.text = None;
    }

    /// Record a diagnostic from the event source (e.g. malformed markup).
    pub fn diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn finish(self) -> ScanOutcome {
        ScanOutcome {
            model: self.model,
            diagnostics: self.diagnostics,
        }
    }

    fn classify(&mut self, kind: ResourceKind, name: String, text: &str) {
        if self.model.contains_name(kind, &name) {
            self.diagnostics.push(
                Diagnostic::warning(
                    "sgen::scan::duplicate-name",
                    format!("duplicate {} entry \"{}\"", kind, name),
                )
                .with_help("The generated constants will not compile; rename one entry"),
            );
        }

        match kind {
            ResourceKind::Boolean => {
                let value = text.trim().eq_ignore_ascii_case("true");
                self.model.booleans.push(ResourceEntry::new(name, value));
            }
            ResourceKind::Integer => match text.trim().parse::<i32>() {
                Ok(value) => self.model.integers.push(ResourceEntry::new(name, value)),
                Err(_) => self.diagnostics.push(
                    Diagnostic::warning(
                        "sgen::scan::bad-integer",
                        format!("integer entry \"{}\" has unparsable value \"{}\"", name, text),
                    )
                    .with_help("Use a base-10 integer value"),
                ),
            },
            ResourceKind::String => {
                self.model
                    .strings
                    .push(ResourceEntry::new(name, text.to_string()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eligible(state: &mut ScanState, tag: &str, name: &str) {
        state.start_element(tag, None, Some("true"), Some(name));
    }

    #[test]
    fn test_typed_tag_entry() {
        let mut state = ScanState::new();
        eligible(&mut state, "integer", "max_retries");
        state.text("7");
        state.end_element();

        let outcome = state.finish();
        assert_eq!(outcome.model.integers, vec![ResourceEntry::new("max_retries", 7)]);
        assert!(outcome.diagnostics.is_empty());
    }

    #[test]
    fn test_item_with_type_attribute() {
        let mut state = ScanState::new();
        state.start_element("item", Some("string"), Some("true"), Some("label"));
        state.text("Hello");
        state.end_element();

        let outcome = state.finish();
        assert_eq!(
            outcome.model.strings,
            vec![ResourceEntry::new("label", "Hello".to_string())]
        );
    }

    #[test]
    fn test_missing_static_flag_is_skipped() {
        let mut state = ScanState::new();
        state.start_element("string", None, None, Some("label2"));
        state.text("no static attr");
        state.end_element();

        let outcome = state.finish();
        assert!(outcome.model.is_empty());
        assert!(outcome.diagnostics.is_empty());
    }

    #[test]
    fn test_static_must_be_exact_literal() {
        let mut state = ScanState::new();
        state.start_element("bool", None, Some("TRUE"), Some("flag"));
        state.text("true");
        state.end_element();

        assert!(state.finish().model.is_empty());
    }

    #[test]
    fn test_static_without_name_is_skipped() {
        let mut state = ScanState::new();
        state.start_element("bool", None, Some("true"), None);
        state.text("true");
        state.end_element();

        let mut state2 = ScanState::new();
        state2.start_element("bool", None, Some("true"), Some("  "));
        state2.text("true");
        state2.end_element();

        assert!(state.finish().model.is_empty());
        assert!(state2.finish().model.is_empty());
    }

    #[test]
    fn test_missing_text_is_skipped() {
        let mut state = ScanState::new();
        eligible(&mut state, "string", "empty");
        state.end_element();

        assert!(state.finish().model.is_empty());
    }

    #[test]
    fn test_unknown_kind_is_skipped() {
        let mut state = ScanState::new();
        state.start_element("item", Some("fraction"), Some("true"), Some("ratio"));
        state.text("0.5");
        state.end_element();

        let outcome = state.finish();
        assert!(outcome.model.is_empty());
        assert!(outcome.diagnostics.is_empty());
    }

    #[test]
    fn test_wrapper_tag_does_not_capture_text() {
        let mut state = ScanState::new();
        // <resources> has no kind; its text must not be retained
        state.start_element("resources", None, None, None);
        state.text("stray");
        state.end_element();

        assert!(state.finish().model.is_empty());
    }

    #[test]
    fn test_bool_parse_is_lenient() {
        let mut state = ScanState::new();
        eligible(&mut state, "bool", "on");
        state.text("TRUE");
        state.end_element();
        eligible(&mut state, "bool", "off");
        state.text("yes");
        state.end_element();

        let outcome = state.finish();
        assert_eq!(
            outcome.model.booleans,
            vec![
                ResourceEntry::new("on", true),
                ResourceEntry::new("off", false),
            ]
        );
    }

    #[test]
    fn test_bad_integer_drops_entry_and_continues() {
        let mut state = ScanState::new();
        eligible(&mut state, "integer", "bad");
        state.text("abc");
        state.end_element();
        eligible(&mut state, "integer", "good");
        state.text("-42");
        state.end_element();

        let outcome = state.finish();
        assert_eq!(outcome.model.integers, vec![ResourceEntry::new("good", -42)]);
        assert_eq!(outcome.diagnostics.len(), 1);
        assert_eq!(outcome.diagnostics[0].code, "sgen::scan::bad-integer");
    }

    #[test]
    fn test_duplicate_name_warns_but_keeps_both() {
        let mut state = ScanState::new();
        eligible(&mut state, "string", "label");
        state.text("first");
        state.end_element();
        eligible(&mut state, "string", "label");
        state.text("second");
        state.end_element();

        let outcome = state.finish();
        assert_eq!(outcome.model.strings.len(), 2);
        assert_eq!(outcome.diagnostics.len(), 1);
        assert_eq!(outcome.diagnostics[0].code, "sgen::scan::duplicate-name");
    }

    #[test]
    fn test_nested_eligible_element_takes_over() {
        let mut state = ScanState::new();
        // <integer name="outer" static="true">1<integer name="inner"
        // static="true">2</integer>3</integer>
        eligible(&mut state, "integer", "outer");
        state.text("1");
        eligible(&mut state, "integer", "inner");
        state.text("2");
        state.end_element();
        state.text("3");
        state.end_element();

        let outcome = state.finish();
        // Only the inner element completes; the trailing text has no open
        // eligible tag and the outer end sees a cleared kind.
        assert_eq!(outcome.model.integers, vec![ResourceEntry::new("inner", 2)]);
    }

    #[test]
    fn test_item_inherits_kind_from_open_element() {
        let mut state = ScanState::new();
        // An item without a type attribute keeps the kind adopted by the
        // enclosing element.
        state.start_element("bool", None, Some("true"), Some("outer"));
        state.start_element("item", None, Some("true"), Some("inner"));
        state.text("true");
        state.end_element();

        let outcome = state.finish();
        assert_eq!(outcome.model.booleans, vec![ResourceEntry::new("inner", true)]);
    }

    #[test]
    fn test_encounter_order_preserved() {
        let mut state = ScanState::new();
        eligible(&mut state, "integer", "b");
        state.text("2");
        state.end_element();
        eligible(&mut state, "integer", "a");
        state.text("1");
        state.end_element();

        let outcome = state.finish();
        let names: Vec<&str> = outcome.model.integers.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
    }
}
