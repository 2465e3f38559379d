pub mod control_list;
pub mod node_view;
pub mod options_dialog;
pub mod property_panel;
pub mod toolbar;

pub use control_list::ControlList;
pub use options_dialog::OptionsDialog;
pub use property_panel::PropertyPanel;
pub use toolbar::Toolbar;
