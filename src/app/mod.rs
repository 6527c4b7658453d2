// Application layer - Use case interactors and the panel coordinator

pub mod container;
pub mod coordinator;
pub mod submit_interactor;

// Re-export application types
pub use container::{AppContainer, DefaultAppContainer};
pub use coordinator::{PanelForm, PanelView, TrimCoordinator};
pub use submit_interactor::{SubmitInteractor, SubmitReport};
