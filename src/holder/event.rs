/* src/holder/event.rs */

use std::sync::Arc;

use super::{Fault, Meta};

/// Events emitted by a holder on refresh outcomes.
#[derive(Debug)]
pub enum HoldEvent<T> {
	/// The first successful fetch installed a value.
	Initialized { value: Arc<T>, meta: Meta },
	/// A successful refresh replaced the value.
	Updated { old: Arc<T>, new: Arc<T>, meta: Meta },
	/// A refresh failed; the previous value is kept.
	Failed { fault: Fault },
}

impl<T> Clone for HoldEvent<T> {
	fn clone(&self) -> Self {
		match self {
			Self::Initialized { value, meta } => Self::Initialized {
				value: Arc::clone(value),
				meta: *meta,
			},
			Self::Updated { old, new, meta } => Self::Updated {
				old: Arc::clone(old),
				new: Arc::clone(new),
				meta: *meta,
			},
			Self::Failed { fault } => Self::Failed {
				fault: fault.clone(),
			},
		}
	}
}
