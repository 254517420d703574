// trolley/src/store/dispatch.rs

//! Contains the `Store::dispatch()` method: guards, reducer, snapshot swap, notification.

use crate::core::control::{DispatchControl, DispatchResult};
use crate::core::reducer::{Reducer, Transition};
use crate::core::snapshot::Snapshot;
use crate::error::TrolleyError;
use crate::store::definition::Store;
use tracing::{event, instrument, span, Level};

impl<R: Reducer> Store<R> {
  /// Applies one intent as a single atomic state transition.
  ///
  /// Order of operations:
  /// 1. Guards, in registration order. `Stop` ends the dispatch with `DispatchResult::Stopped`;
  ///    an error ends it with `TrolleyError::Rejected` converted into `R::Error`.
  /// 2. The reducer. On error the current snapshot is kept and nobody is notified.
  /// 3. If the state changed, the new snapshot replaces the old one and `version` increases.
  /// 4. Every subscriber is called once with the current snapshot, changed or not.
  #[instrument(
        name = "Store::dispatch",
        skip_all,
        fields(
            state_type = %std::any::type_name::<R::State>(),
            intent = ?intent,
            version = self.version,
        ),
        err(Display)
    )]
  pub fn dispatch(&mut self, intent: R::Intent) -> Result<DispatchResult, R::Error> {
    for (guard_idx, guard) in self.guards.iter().enumerate() {
      let guard_span = span!(Level::TRACE, "guard", guard_index = guard_idx);
      let _guard_span_guard = guard_span.enter();
      match guard(&*self.state, &intent) {
        Ok(DispatchControl::Continue) => {}
        Ok(DispatchControl::Stop) => {
          event!(Level::INFO, "Dispatch stopped by a guard.");
          return Ok(DispatchResult::Stopped);
        }
        Err(source) => {
          event!(Level::WARN, error = %source, "Guard rejected the intent.");
          return Err(R::Error::from(TrolleyError::Rejected { source }));
        }
      }
    }

    let result = match self.reducer.reduce(&*self.state, intent)? {
      Transition::Changed(next) => {
        self.state = Snapshot::new(next);
        self.version += 1;
        event!(Level::DEBUG, new_version = self.version, "State replaced.");
        DispatchResult::Applied
      }
      Transition::Unchanged => {
        event!(Level::DEBUG, "Intent left the state unchanged.");
        DispatchResult::Unchanged
      }
    };

    self.notify();
    Ok(result)
  }

  fn notify(&self) {
    event!(Level::TRACE, subscribers = self.subscriptions.len(), "Notifying subscribers.");
    for sub in &self.subscriptions {
      (sub.listener)(&self.state);
    }
  }
}
