//! E104 (RDF missing marker): the embedded metadata lacks a required marker.

use linkdoc_diagnostics::{Category, DiagnosticCode, FindingSink, Severity};
use linkdoc_parser::HeaderRecord;

use crate::{ValidationContext, ValidationRule};

/// Markers every embedded metadata block must contain, with the message
/// used when each is absent.
const REQUIRED_MARKERS: &[(&str, &str)] = &[
    ("@prefix code:", "RDF missing @prefix code: declaration"),
    ("code:name", "RDF missing code:name property"),
    ("code:description", "RDF missing code:description property"),
];

/// Detects metadata blocks missing any of the required markers.
///
/// Emits one error per missing marker. Records without a metadata block are
/// left to `missing-rdf`.
pub struct RdfMissingMarker;

impl ValidationRule for RdfMissingMarker {
    fn code(&self) -> DiagnosticCode {
        DiagnosticCode::new(Category::Error, 104)
    }

    fn name(&self) -> &str {
        "rdf-missing-marker"
    }

    fn description(&self) -> &str {
        "embedded metadata lacks a required marker"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check_record(&self, record: &HeaderRecord, _ctx: &ValidationContext, sink: &FindingSink) {
        let Some(rdf) = record.rdf_block.as_deref().filter(|rdf| !rdf.is_empty()) else {
            return;
        };
        for (marker, message) in REQUIRED_MARKERS {
            if !rdf.contains(marker) {
                sink.emit(self.finding(record, *message));
            }
        }
    }
}
