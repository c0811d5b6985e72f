pub mod settings;
pub mod simulator;
pub mod studio;

pub use settings::SettingsPage;
pub use simulator::SimulatorPage;
pub use studio::StudioPage;
