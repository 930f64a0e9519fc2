//! Message processing: the update loop plus action dispatch
//!
//! Both the TUI runner and the headless driver feed messages through
//! [`process_message`], so all state changes go through the same path.

use std::collections::VecDeque;

use jobdash_core::RowSource;

use crate::actions::{handle_action, InteractionSink};
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
///
/// Follow-up messages and messages produced by actions are drained before
/// returning.
pub fn process_message(
    state: &mut AppState,
    message: Message,
    sink: &mut dyn InteractionSink,
    source: &dyn RowSource,
) {
    let mut pending = VecDeque::from([message]);
    while let Some(m) = pending.pop_front() {
        let result = handler::update(state, m);

        // Follow-up first, then whatever the action replied
        pending.extend(result.message);
        if let Some(action) = result.action {
            pending.extend(handle_action(action, sink, source));
        }
    }
}
