//! Control logic of a button operated relay controller.
//!
//! Buttons are sampled on every tick of a control loop. Presses of a single
//! button are grouped into sequences, each closed after a moment of silence,
//! and classified as short (ending released) or long (ending held). A short
//! press turns the paired relay on for a limited time, a long press turns it
//! on until anything else happens.
//!
//! Following is the flow of a single tick:
//!
//! ```text
//!   [Raw inputs]
//!        |
//!        V
//!  [ Debouncer ] ---(rising sample)---> {Gap timer}
//!        |                                   |
//!        | (Down/Up)        (SequenceEnd)    |
//!        V                                   |
//!  {EventQueue} <----------------------------+
//!        |
//!        V
//!  [ Parser ] ---(Action)---> [ Dispatcher ] <---> {Cutoff timer}
//!                                   |
//!                                   V
//!                              [ Relays ]
//! ```
//!
//! The crate is `no_std` and does no I/O. Raw levels are passed in and the
//! desired relay levels are returned, leaving the hardware to the caller.

#![cfg_attr(not(test), no_std)]
#![allow(clippy::module_name_repetitions)]

pub mod action;
pub mod config;
pub mod controller;
pub mod debounce;
pub mod dispatcher;
pub mod event;
mod log;
pub mod output;
pub mod parser;
pub mod queue;
pub mod shared;
pub mod timer;

pub use crate::action::Action;
pub use crate::config::Config;
pub use crate::controller::Controller;
pub use crate::event::{ButtonId, Event};
pub use crate::output::DesiredOutput;
pub use crate::shared::Shared;
