// Defines all messages used for the Elm architecture in the GUI.
use crate::config::AppTheme;
use crate::gui::state::Tab;
use crate::model::Event;

/// (roster, favorites, events) bundle from the startup load.
pub type LoadedResult = Result<(Vec<String>, Vec<String>, Vec<Event>), String>;

#[derive(Debug, Clone)]
pub enum Message {
    Loaded(LoadedResult),
    TabSelected(Tab),
    FavoriteToggled(String, bool),
    /// Posted by the watcher subscription when favorites.txt changed on disk.
    FavoritesFileChanged(Result<Vec<String>, String>),
    ThemeChanged(AppTheme),
    DismissError,
}
