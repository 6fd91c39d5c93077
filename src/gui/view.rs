// File: src/gui/view.rs
use crate::config::AppTheme;
use crate::gui::logo;
use crate::gui::message::Message;
use crate::gui::state::{AppState, GuiApp, Tab};
use crate::model::Event;
use iced::widget::{
    button, checkbox, column, container, image, pick_list, row, scrollable, space, text,
};
use iced::{Color, Element, Length};
use strum::IntoEnumIterator;

pub fn root_view(app: &GuiApp) -> Element<'_, Message> {
    match app.state {
        AppState::Loading => container(text("Loading...").size(30))
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into(),
        AppState::Active => {
            let tabs = row![
                tab_button("Today's Events", Tab::Today, app.active_tab),
                tab_button("Week's Events", Tab::Week, app.active_tab),
                tab_button("Month's Events", Tab::Month, app.active_tab),
                tab_button("Favorites", Tab::Favorites, app.active_tab),
                space::horizontal(),
                pick_list(
                    AppTheme::iter().collect::<Vec<_>>(),
                    Some(app.config.theme),
                    Message::ThemeChanged
                )
                .text_size(12)
                .padding(5),
            ]
            .spacing(5)
            .align_y(iced::Alignment::Center);

            let mut content = column![tabs].spacing(10).padding(10);

            if let Some(err) = &app.error_msg {
                content = content.push(error_banner(err));
            }

            content = content.push(match app.active_tab {
                Tab::Today => view_events(app, "Today's Events", &app.today_events),
                Tab::Week => view_events(app, "Week's Events", &app.week_events),
                Tab::Month => view_events(app, "Month's Events", &app.month_events),
                Tab::Favorites => view_favorites(app),
            });

            content.into()
        }
    }
}

fn tab_button(label: &str, tab: Tab, active: Tab) -> Element<'_, Message> {
    button(text(label).size(16))
        .padding(8)
        .style(if tab == active {
            button::primary
        } else {
            button::text
        })
        .on_press(Message::TabSelected(tab))
        .into()
}

fn error_banner(err: &str) -> Element<'_, Message> {
    row![
        text(err).size(14).color(Color::from_rgb(0.9, 0.3, 0.3)),
        space::horizontal(),
        button(text("Dismiss").size(12))
            .style(button::danger)
            .padding(5)
            .on_press(Message::DismissError),
    ]
    .spacing(10)
    .align_y(iced::Alignment::Center)
    .into()
}

fn view_events<'a>(app: &'a GuiApp, title: &'a str, events: &'a [Event]) -> Element<'a, Message> {
    let header = text(title).size(20);

    if events.is_empty() {
        return column![
            header,
            text("No matching events")
                .size(14)
                .color(Color::from_rgb(0.5, 0.5, 0.5))
        ]
        .spacing(10)
        .into();
    }

    let rows = column(
        events
            .iter()
            .map(|event| view_event_row(app, event))
            .collect::<Vec<_>>(),
    )
    .spacing(10)
    .padding(iced::Padding {
        right: 15.0,
        ..Default::default()
    });

    column![header, scrollable(rows).height(Length::Fill)]
        .spacing(10)
        .into()
}

fn view_event_row<'a>(app: &'a GuiApp, event: &'a Event) -> Element<'a, Message> {
    let handle = app
        .logos
        .get(&event.team_name)
        .unwrap_or(&app.placeholder_logo);

    row![
        image(handle.clone())
            .width(Length::Fixed(logo::LOGO_BOX))
            .height(Length::Fixed(logo::LOGO_BOX)),
        text(event.summary_line()).size(14),
    ]
    .spacing(15)
    .align_y(iced::Alignment::Center)
    .into()
}

fn view_favorites(app: &GuiApp) -> Element<'_, Message> {
    let list = column(
        app.teams
            .iter()
            .map(|team| {
                let is_favorite = app.favorites.contains(team);
                let name = team.clone();
                checkbox(is_favorite)
                    .label(team.as_str())
                    .size(18)
                    .text_size(16)
                    .on_toggle(move |checked| Message::FavoriteToggled(name.clone(), checked))
                    .into()
            })
            .collect::<Vec<_>>(),
    )
    .spacing(5)
    .padding(10);

    scrollable(list).height(Length::Fill).into()
}
