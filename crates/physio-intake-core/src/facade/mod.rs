//! Persistence façade with guaranteed local fallback.
//!
//! The only component the view layer talks to. Every operation first
//! attempts the remote gateway; any gateway error is recovered by
//! retrying the equivalent operation against the local store. Outcomes
//! are normalized so the caller cannot tell remote from local by shape
//! alone; only the attached notice text differs.

use tracing::{debug, error, warn};

use crate::gateway::{GatewayError, RemoteGateway, WriteAck};
use crate::models::{PatientInput, PatientRecord};
use crate::notify::Notice;
use crate::store::LocalStore;

/// Which backend satisfied an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// The configured remote backend answered.
    Remote,
    /// The local store answered because no endpoint is configured.
    Demo,
    /// The local store answered after the remote call failed.
    Fallback,
}

impl Source {
    pub fn is_local(&self) -> bool {
        !matches!(self, Source::Remote)
    }
}

/// Result of a fetch; errors are always swallowed into a local result.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchOutcome {
    pub records: Vec<PatientRecord>,
    pub source: Source,
}

/// Result of an add.
///
/// `sno` is `None` when the backend accepted the write without a
/// readable serial; the true state must be observed with a fresh fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddOutcome {
    pub success: bool,
    pub sno: Option<u32>,
    pub source: Source,
}

/// Result of an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub success: bool,
    pub error: Option<String>,
    pub source: Source,
}

impl FetchOutcome {
    pub fn notice(&self) -> Option<Notice> {
        match self.source {
            Source::Remote => None,
            Source::Demo => Some(Notice::demo_mode()),
            Source::Fallback => Some(Notice::offline_fallback()),
        }
    }
}

impl AddOutcome {
    pub fn notice(&self) -> Notice {
        if self.success {
            Notice::record_saved()
        } else {
            Notice::save_failed()
        }
    }
}

impl UpdateOutcome {
    pub fn notice(&self) -> Notice {
        if self.success {
            Notice::record_updated()
        } else {
            Notice::update_failed(self.error.as_deref().unwrap_or("unknown error"))
        }
    }
}

/// Remote-first persistence over one stable interface.
pub struct PersistenceFacade {
    gateway: RemoteGateway,
    store: LocalStore,
}

impl PersistenceFacade {
    pub fn new(gateway: RemoteGateway, store: LocalStore) -> Self {
        Self { gateway, store }
    }

    /// Fetch the full collection, falling back to the local store.
    pub fn fetch_all(&self) -> FetchOutcome {
        match self.gateway.fetch_all() {
            Ok(records) => FetchOutcome {
                records,
                source: Source::Remote,
            },
            Err(err) => FetchOutcome {
                records: self.store.load_all(),
                source: local_source(&err, "fetch"),
            },
        }
    }

    /// Add a record through whichever store is available.
    pub fn add(&self, input: &PatientInput) -> AddOutcome {
        match self.gateway.add(input) {
            Ok(WriteAck::Assigned(sno)) => AddOutcome {
                success: true,
                sno: Some(sno),
                source: Source::Remote,
            },
            Ok(WriteAck::Unconfirmed) => AddOutcome {
                success: true,
                sno: None,
                source: Source::Remote,
            },
            Err(err) => {
                let source = local_source(&err, "add");
                match self.store.add(input) {
                    Ok(sno) => AddOutcome {
                        success: true,
                        sno: Some(sno),
                        source,
                    },
                    Err(err) => {
                        error!(error = %err, "local add failed");
                        AddOutcome {
                            success: false,
                            sno: None,
                            source,
                        }
                    }
                }
            }
        }
    }

    /// Update the record with the given serial through whichever store is
    /// available. A missing serial in the local store is surfaced as a
    /// non-success outcome; it is never retried automatically.
    pub fn update(&self, sno: u32, input: &PatientInput) -> UpdateOutcome {
        match self.gateway.update(sno, input) {
            Ok(()) => UpdateOutcome {
                success: true,
                error: None,
                source: Source::Remote,
            },
            Err(err) => {
                let source = local_source(&err, "update");
                match self.store.update(sno, input) {
                    Ok(()) => UpdateOutcome {
                        success: true,
                        error: None,
                        source,
                    },
                    Err(err) => UpdateOutcome {
                        success: false,
                        error: Some(err.to_string()),
                        source,
                    },
                }
            }
        }
    }
}

fn local_source(err: &GatewayError, operation: &str) -> Source {
    match err {
        GatewayError::Unconfigured => {
            debug!(operation, "no remote endpoint configured, using local store");
            Source::Demo
        }
        GatewayError::Remote(reason) => {
            warn!(operation, reason = %reason, "remote call failed, falling back to local store");
            Source::Fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Endpoint;
    use crate::notify::Severity;

    fn demo_facade() -> (tempfile::TempDir, PersistenceFacade) {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::open(dir.path().join("patients.json"));
        let gateway = RemoteGateway::new(Endpoint::Unconfigured);
        (dir, PersistenceFacade::new(gateway, store))
    }

    fn make_input(name: &str) -> PatientInput {
        PatientInput {
            date: "2025-03-14".into(),
            name: name.into(),
            gender: "F".into(),
            phone: "999".into(),
            address: "X St".into(),
            referral_source: None,
            notes: None,
        }
    }

    #[test]
    fn test_unconfigured_add_resolves_locally() {
        let (_dir, facade) = demo_facade();

        let outcome = facade.add(&make_input("Asha"));
        assert!(outcome.success);
        assert_eq!(outcome.sno, Some(1));
        assert_eq!(outcome.source, Source::Demo);
    }

    #[test]
    fn test_unconfigured_fetch_sees_local_records() {
        let (_dir, facade) = demo_facade();
        facade.add(&make_input("Asha"));

        let outcome = facade.fetch_all();
        assert_eq!(outcome.source, Source::Demo);
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].sno, 1);
        assert_eq!(outcome.records[0].name, "Asha");
    }

    #[test]
    fn test_unconfigured_update_round_trip() {
        let (_dir, facade) = demo_facade();
        facade.add(&make_input("Asha"));

        let mut replacement = make_input("Asha");
        replacement.phone = "111".into();
        let outcome = facade.update(1, &replacement);
        assert!(outcome.success);

        let records = facade.fetch_all().records;
        assert_eq!(records[0].phone, "111");
        assert_eq!(records[0].sno, 1);
    }

    #[test]
    fn test_update_missing_serial_is_non_success() {
        let (_dir, facade) = demo_facade();

        let outcome = facade.update(42, &make_input("ghost"));
        assert!(!outcome.success);
        let message = outcome.error.clone().unwrap();
        assert!(message.contains("42"), "unexpected message: {message}");

        let notice = outcome.notice();
        assert_eq!(notice.severity, Severity::Error);
    }

    #[test]
    fn test_serials_are_strictly_increasing() {
        let (_dir, facade) = demo_facade();

        let first = facade.add(&make_input("a")).sno.unwrap();
        let second = facade.add(&make_input("b")).sno.unwrap();
        assert!(second > first);
    }

    #[test]
    fn test_notices_follow_source() {
        let (_dir, facade) = demo_facade();

        let fetch = facade.fetch_all();
        let notice = fetch.notice().unwrap();
        assert_eq!(notice.severity, Severity::Info);

        let add = facade.add(&make_input("Asha"));
        assert_eq!(add.notice().severity, Severity::Success);
    }
}
