//! Failure delivery strategy.
//!
//! Each assertion chain is constructed with a [`Sink`] that decides what a
//! failing check does: raise immediately (the default, terminating the
//! scenario) or record into a soft session's outcome list so the chain keeps
//! executing. The two behaviors are separate `FailureSink` implementations
//! injected at construction time rather than a mode flag consulted per call.

use crate::report::FailureReport;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

pub(crate) trait FailureSink: fmt::Debug {
    fn accept(&self, report: FailureReport);
}

/// Eager mode: a failing assertion terminates the scenario on the spot.
#[derive(Debug)]
struct RaiseImmediately;

impl FailureSink for RaiseImmediately {
    fn accept(&self, report: FailureReport) {
        panic!("assertion failed: {report}")
    }
}

/// Soft mode: failures append to the owning session, chaining continues.
#[derive(Debug)]
struct RecordToSession {
    outcomes: Rc<RefCell<Vec<FailureReport>>>,
}

impl FailureSink for RecordToSession {
    fn accept(&self, report: FailureReport) {
        self.outcomes.borrow_mut().push(report);
    }
}

/// Handle to the failure strategy shared by every chain built from the same
/// entry point. Cheap to clone; chains derived from one another (filtering,
/// extraction) carry the same sink.
#[derive(Debug, Clone)]
pub struct Sink(Rc<dyn FailureSink>);

impl Sink {
    pub(crate) fn raise() -> Self {
        Sink(Rc::new(RaiseImmediately))
    }

    pub(crate) fn record(outcomes: Rc<RefCell<Vec<FailureReport>>>) -> Self {
        Sink(Rc::new(RecordToSession { outcomes }))
    }

    pub(crate) fn accept(&self, report: FailureReport) {
        self.0.accept(report);
    }
}
