// Central message handler for the GUI.
use crate::filter::{self, filter_events};
use crate::gui::logo;
use crate::gui::message::Message;
use crate::gui::state::{AppState, GuiApp};
use crate::model::{Event, Window};
use crate::paths::AppPaths;
use crate::roster;
use iced::Task;

pub fn update(app: &mut GuiApp, message: Message) -> Task<Message> {
    match message {
        Message::Loaded(result) => {
            app.state = AppState::Active;
            match result {
                Ok((teams, favorites, events)) => {
                    app.teams = teams;
                    app.favorites = favorites;
                    app.events = events;
                    app.logos = logo::load_logo_handles(&app.data_dir, &app.teams);
                    refresh_views(app);
                }
                Err(err) => {
                    log::error!("failed to load data files: {err}");
                    app.error_msg = Some(err);
                }
            }
        }
        Message::TabSelected(tab) => {
            app.active_tab = tab;
        }
        Message::FavoriteToggled(team, enabled) => {
            if enabled && !app.favorites.contains(&team) {
                app.favorites.push(team);
            } else if !enabled {
                app.favorites.retain(|t| t != &team);
            }
            // Persist in the same order the checklist shows the roster.
            let normalized: Vec<String> = app
                .teams
                .iter()
                .filter(|t| app.favorites.contains(*t))
                .cloned()
                .collect();
            app.favorites = normalized;

            let path = AppPaths::favorites_path(&app.data_dir);
            if let Err(err) = roster::update_favorite_teams(&path, &app.favorites) {
                log::error!("could not write favorites file: {err:#}");
                app.error_msg = Some(format!("{err:#}"));
            }
            // The watcher will also notice the rewrite a poll later and push
            // the same list back; that second refresh is idempotent.
            refresh_views(app);
        }
        Message::FavoritesFileChanged(Ok(favorites)) => {
            app.favorites = favorites;
            refresh_views(app);
        }
        Message::FavoritesFileChanged(Err(err)) => {
            app.error_msg = Some(err);
        }
        Message::ThemeChanged(theme) => {
            app.config.theme = theme;
            if let Err(err) = app.config.save() {
                log::warn!("could not save config: {err:#}");
            }
        }
        Message::DismissError => {
            app.error_msg = None;
        }
    }
    Task::none()
}

/// Recomputes all three filtered views from the current favorites and the
/// event list loaded at startup. A bad event date aborts the refresh and
/// keeps the previous views on screen.
fn refresh_views(app: &mut GuiApp) {
    let today = filter::current_date();
    let refreshed = (|| -> anyhow::Result<(Vec<Event>, Vec<Event>, Vec<Event>)> {
        Ok((
            filter_events(&app.favorites, &app.events, Window::Today, today)?,
            filter_events(&app.favorites, &app.events, Window::Week, today)?,
            filter_events(&app.favorites, &app.events, Window::Month, today)?,
        ))
    })();
    match refreshed {
        Ok((today_events, week_events, month_events)) => {
            app.today_events = today_events;
            app.week_events = week_events;
            app.month_events = month_events;
        }
        Err(err) => {
            log::error!("could not refresh event views: {err:#}");
            app.error_msg = Some(format!("{err:#}"));
        }
    }
}
