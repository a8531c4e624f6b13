//! Parameter values and placeholder name allocation.
//!
//! Every value-position scalar is bound under a name of the form `p<N>` and
//! rendered as `:p<N>`. Names come from a process-wide atomic counter, unless
//! a [`ParameterSequence`] is installed for the current thread:
//!
//! ```ignore
//! let _scope = ParameterSequence::new().scope();
//! let mut st = SelectStmt::new().from("tb").r#where(("col", "=", 1));
//! assert_eq!(st.to_sql(), "SELECT * FROM tb WHERE col = :p1");
//! ```

use std::cell::RefCell;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// A bound parameter value.
pub type Param = serde_json::Value;

/// Parameter map keyed by bare parameter name (`p1`, `p2`, ...).
pub type Params = serde_json::Map<String, Param>;

static PARAMETER_INDEX: AtomicU64 = AtomicU64::new(0);

thread_local! {
    static ACTIVE_SEQUENCE: RefCell<Option<ParameterSequence>> = const { RefCell::new(None) };
}

/// Allocate the next parameter name (`p<N>`).
///
/// Uses the sequence installed by [`ParameterSequence::scope`] on this thread,
/// falling back to the process-wide counter.
pub fn next_parameter_name() -> String {
    let scoped = ACTIVE_SEQUENCE.with(|active| active.borrow().as_ref().map(|seq| seq.next_name()));
    scoped.unwrap_or_else(|| format!("p{}", PARAMETER_INDEX.fetch_add(1, Ordering::SeqCst) + 1))
}

/// Reset the process-wide parameter counter.
///
/// Only meant for isolated test runs: resetting while other threads allocate
/// names produces duplicates.
pub fn reset_parameter_index() {
    PARAMETER_INDEX.store(0, Ordering::SeqCst);
}

/// An independent, shareable parameter name generator.
#[derive(Clone, Debug, Default)]
pub struct ParameterSequence {
    index: Arc<AtomicU64>,
}

impl ParameterSequence {
    /// Create a sequence starting at `p1`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next name from this sequence.
    pub fn next_name(&self) -> String {
        format!("p{}", self.index.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Restart this sequence at `p1`.
    pub fn reset(&self) {
        self.index.store(0, Ordering::SeqCst);
    }

    /// Route every name allocated on the current thread through this sequence
    /// until the returned guard is dropped.
    pub fn scope(&self) -> SequenceScope {
        let previous = ACTIVE_SEQUENCE.with(|active| active.replace(Some(self.clone())));
        SequenceScope { previous }
    }
}

/// Guard returned by [`ParameterSequence::scope`].
///
/// Restores the previously installed sequence (if any) on drop.
#[must_use = "the sequence is uninstalled as soon as the guard is dropped"]
pub struct SequenceScope {
    previous: Option<ParameterSequence>,
}

impl Drop for SequenceScope {
    fn drop(&mut self) {
        let previous = self.previous.take();
        ACTIVE_SEQUENCE.with(|active| {
            active.replace(previous);
        });
    }
}

/// Render a scalar the way it appears in name position: strings verbatim,
/// everything else in its JSON text form.
pub(crate) fn param_text(param: &Param) -> String {
    match param {
        Param::String(s) => s.clone(),
        other => other.to_string(),
    }
}
