mod panel;

pub use panel::EspPanel;
