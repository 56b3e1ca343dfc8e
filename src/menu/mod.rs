//! Interactive editors driven through a [`Prompter`](crate::prompt::Prompter)

pub mod network;
pub mod subvolumes;

pub use network::configure_network;
pub use subvolumes::{SubvolumeAction, edit_subvolumes, exec_action};
