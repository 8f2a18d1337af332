/* src/controller/error.rs */

use thiserror::Error;

use crate::holder::HoldError;

/// Errors that can occur in the HotConfig controller.
#[derive(Debug, Error)]
pub enum ControlError {
	#[error("Hold error: {0}")]
	Hold(#[from] HoldError),

	#[error("Builder error: {0}")]
	Builder(String),
}
