// Entry point and setup for the GUI application.
pub mod logo;
pub mod message;
pub mod state;
pub mod subscription;
pub mod update;
pub mod view;

use crate::config::{AppTheme, Config};
use crate::gui::message::Message;
use crate::gui::state::GuiApp;
use crate::model::Event;
use crate::paths::AppPaths;
use crate::roster;
use iced::{Element, Subscription, Task, Theme, window};
use std::path::Path;

fn load_data_files(data_dir: &Path) -> anyhow::Result<(Vec<String>, Vec<String>, Vec<Event>)> {
    let teams = roster::load_teams(&AppPaths::teams_path(data_dir))?;
    let favorites = roster::load_favorite_teams(&AppPaths::favorites_path(data_dir))?;
    let events = roster::load_events(&AppPaths::events_path(data_dir))?;
    Ok((teams, favorites, events))
}

pub fn run() -> iced::Result {
    iced::application(GuiApp::new, GuiApp::update, GuiApp::view)
        .title(GuiApp::title)
        .subscription(GuiApp::subscription)
        .theme(GuiApp::theme)
        .window(window::Settings {
            size: iced::Size::new(800.0, 400.0),
            ..Default::default()
        })
        .run()
}

impl GuiApp {
    fn new() -> (Self, Task<Message>) {
        let config = Config::load().unwrap_or_else(|err| {
            log::warn!("could not load config, using defaults: {err:#}");
            Config::default()
        });
        let data_dir = AppPaths::data_dir(&config);
        let app = Self {
            config,
            data_dir: data_dir.clone(),
            ..Self::default()
        };

        // teams.txt and events.txt are read once here; only favorites.txt is
        // ever re-read afterwards, by the watcher.
        let load = Task::perform(
            async move { load_data_files(&data_dir).map_err(|e| format!("{e:#}")) },
            Message::Loaded,
        );

        (app, load)
    }

    fn view(&self) -> Element<'_, Message> {
        view::root_view(self)
    }

    fn title(&self) -> String {
        "Matchday | upcoming games for your favorite teams".to_string()
    }

    fn theme(&self) -> Theme {
        match self.config.theme {
            AppTheme::Dark => Theme::Dark,
            AppTheme::Light => Theme::Light,
            AppTheme::Dracula => Theme::Dracula,
            AppTheme::Nord => Theme::Nord,
            AppTheme::GruvboxDark => Theme::GruvboxDark,
            AppTheme::CatppuccinMocha => Theme::CatppuccinMocha,
            AppTheme::TokyoNight => Theme::TokyoNight,
            AppTheme::Ferra => Theme::Ferra,
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::subscription(self)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }
}
