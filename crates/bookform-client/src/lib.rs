//! Form state controller for the booking form.
//!
//! Owns the single [`FormState`](bookform_core::FormState) record per
//! session and mutates it exclusively through a pure reducer
//! ([`reducer::reduce`]) driven by [`action::FormAction`]s. The only
//! effect is the submission POST, issued by [`controller::FormController`]
//! with a bounded timeout; every outcome -- acceptance, rejection,
//! transport failure -- is folded back into the state as an action, so
//! consumers never special-case failure kinds.

pub mod accordion;
pub mod action;
pub mod api;
pub mod controller;
pub mod error;
pub mod reducer;

pub use accordion::Accordion;
pub use action::FormAction;
pub use controller::FormController;
pub use error::ClientError;
pub use reducer::reduce;
