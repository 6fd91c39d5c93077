// File: ./src/gui/state.rs
// Manages the application state for the GUI (Iced).
use crate::config::Config;
use crate::gui::logo;
use crate::model::Event;
use iced::widget::image;
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Default, PartialEq, Clone, Copy, Debug)]
pub enum AppState {
    #[default]
    Loading,
    Active,
}

#[derive(Default, PartialEq, Eq, Clone, Copy, Debug)]
pub enum Tab {
    #[default]
    Today,
    Week,
    Month,
    Favorites,
}

pub struct GuiApp {
    pub state: AppState,
    pub active_tab: Tab,
    pub config: Config,
    pub data_dir: PathBuf,

    // Loaded once at startup
    pub teams: Vec<String>,
    pub events: Vec<Event>,

    // The single mutable piece of durable state, mirrored from favorites.txt
    pub favorites: Vec<String>,

    // Derived views, recomputed whenever favorites change
    pub today_events: Vec<Event>,
    pub week_events: Vec<Event>,
    pub month_events: Vec<Event>,

    // One handle per team with a logo on disk; teams without one fall back
    // to the generated placeholder.
    pub logos: HashMap<String, image::Handle>,
    pub placeholder_logo: image::Handle,

    pub error_msg: Option<String>,
}

impl Default for GuiApp {
    fn default() -> Self {
        Self {
            state: AppState::Loading,
            active_tab: Tab::Today,
            config: Config::default(),
            data_dir: PathBuf::from("."),
            teams: vec![],
            events: vec![],
            favorites: vec![],
            today_events: vec![],
            week_events: vec![],
            month_events: vec![],
            logos: HashMap::new(),
            placeholder_logo: logo::placeholder_handle(),
            error_msg: None,
        }
    }
}
