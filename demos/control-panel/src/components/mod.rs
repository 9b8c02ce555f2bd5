pub mod container;
pub mod control_panel;
pub mod help_bar;

// Re-export core Component trait
pub use flux_dispatch::Component;

pub use container::{scale_text, Container, ContainerProps};
pub use control_panel::{ControlPanel, ControlPanelProps, Focus};
pub use help_bar::{HelpBar, HelpBarProps};
