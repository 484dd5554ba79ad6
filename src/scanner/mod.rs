//! Resource file scanning.
//!
//! Streams an XML resource file as pull events and collects every entry
//! flagged `static="true"` into a [`ResourceModel`]. The pass is single and
//! forward-only; no document tree is built, so input size is unbounded.
//!
//! Scanning is deliberately forgiving: malformed markup stops the event
//! stream but keeps everything collected so far, and a single bad entry
//! (e.g. an unparsable integer) is dropped without affecting its neighbours.
//! Both cases surface as [`Diagnostic`]s on the outcome rather than errors.

mod state;

use std::io::BufRead;
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::diagnostics::Diagnostic;
use crate::error::{Result, SgenError};
use crate::model::ResourceModel;

use state::{ATTR_NAME, ATTR_STATIC, ATTR_TYPE};
pub use state::ScanState;

/// Everything a scan produced: the typed model plus any diagnostics for
/// entries that were dropped or markup the scanner could not read past.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub model: ResourceModel,
    pub diagnostics: Vec<Diagnostic>,
}

impl ScanOutcome {
    /// True when the scan stopped early on malformed markup.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == crate::diagnostics::Severity::Error)
    }
}

/// Scan a resource file from disk.
///
/// Fails only when the path does not exist or is not a regular file; every
/// other problem is recorded on the returned [`ScanOutcome`].
pub fn scan_file(path: &Path) -> Result<ScanOutcome> {
    if !path.is_file() {
        return Err(SgenError::MissingInput {
            path: path.to_path_buf(),
        });
    }

    let reader = Reader::from_file(path).map_err(|e| SgenError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to open resource file: {}", e),
    })?;

    Ok(scan_reader(reader))
}

/// Scan in-memory XML source. Entry point for tests and embedders.
pub fn scan_str(source: &str) -> ScanOutcome {
    scan_reader(Reader::from_reader(source.as_bytes()))
}

fn scan_reader<R: BufRead>(mut reader: Reader<R>) -> ScanOutcome {
    reader.config_mut().trim_text(true);

    let mut state = ScanState::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                if let Err(message) = handle_start(&mut state, &e) {
                    state.diagnostic(malformed(message, reader.buffer_position()));
                    break;
                }
            }
            Ok(Event::Empty(e)) => {
                // A self-closing element opens and closes with no text, so
                // it can never produce an entry, but it still moves the
                // accumulator exactly like a start/end pair.
                if let Err(message) = handle_start(&mut state, &e) {
                    state.diagnostic(malformed(message, reader.buffer_position()));
                    break;
                }
                state.end_element();
            }
            Ok(Event::Text(t)) => match t.unescape() {
                Ok(text) => state.text(&text),
                Err(e) => {
                    state.diagnostic(malformed(e.to_string(), reader.buffer_position()));
                    break;
                }
            },
            Ok(Event::CData(t)) => {
                let text = String::from_utf8_lossy(&t.into_inner()).into_owned();
                state.text(&text);
            }
            Ok(Event::End(_)) => state.end_element(),
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                state.diagnostic(malformed(e.to_string(), reader.buffer_position()));
                break;
            }
        }
        buf.clear();
    }

    state.finish()
}

/// Feed one start tag into the accumulator. Attribute errors are returned as
/// plain messages so the caller can convert them to a diagnostic with the
/// stream position attached.
fn handle_start(state: &mut ScanState, e: &BytesStart) -> std::result::Result<(), String> {
    let tag = String::from_utf8_lossy(e.name().as_ref()).into_owned();

    let mut type_attr = None;
    let mut static_attr = None;
    let mut name_attr = None;

    for attr in e.attributes() {
        let attr = attr.map_err(|err| err.to_string())?;
        let value = attr
            .unescape_value()
            .map_err(|err| err.to_string())?
            .into_owned();
        match attr.key.as_ref() {
            key if key == ATTR_TYPE.as_bytes() => type_attr = Some(value),
            key if key == ATTR_STATIC.as_bytes() => static_attr = Some(value),
            key if key == ATTR_NAME.as_bytes() => name_attr = Some(value),
            _ => {}
        }
    }

    state.start_element(
        &tag,
        type_attr.as_deref(),
        static_attr.as_deref(),
        name_attr.as_deref(),
    );
    Ok(())
}

fn malformed(message: String, position: u64) -> Diagnostic {
    Diagnostic::error(
        "sgen::scan::malformed",
        format!("malformed markup at byte {}: {}", position, message),
    )
}
