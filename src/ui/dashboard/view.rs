// SPDX-License-Identifier: MPL-2.0
//! Dashboard rendering: filter bar, camera table, pagination footer.

use super::{Message, State};
use crate::domain::camera::{Camera, CameraStatus};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, pick_list, scrollable, text_input, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};
use std::fmt;

/// Entry of a filter dropdown: a concrete value or the "all" sentinel.
///
/// `pick_list` renders options through `Display` and compares them through
/// `PartialEq`, so the label carries the localized text while equality only
/// considers the value.
#[derive(Debug, Clone)]
struct Choice<T> {
    value: Option<T>,
    label: String,
}

impl<T: PartialEq> PartialEq for Choice<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> fmt::Display for Choice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Renders the whole dashboard.
pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let title = Text::new(i18n.tr("dashboard-title")).size(typography::TITLE_LG);

    let content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .push(title)
        .push(filter_bar(state, i18n))
        .push(table(state, i18n))
        .push(footer(state, i18n));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

// ----------------------------------------------------------------------
// Filter bar
// ----------------------------------------------------------------------

fn filter_bar<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let search = text_input(&i18n.tr("search-placeholder"), &state.filter().search)
        .on_input(Message::SearchChanged)
        .width(Length::Fixed(sizing::SEARCH_INPUT_WIDTH))
        .padding(spacing::XS);

    let status_choices: Vec<Choice<CameraStatus>> =
        std::iter::once(Choice {
            value: None,
            label: i18n.tr("filter-all-statuses"),
        })
        .chain(CameraStatus::ALL.into_iter().map(|status| Choice {
            value: Some(status),
            label: status_label(status, i18n),
        }))
        .collect();
    let selected_status = status_choices
        .iter()
        .find(|choice| choice.value == state.filter().status)
        .cloned();
    let status_select = pick_list(status_choices, selected_status, |choice| {
        Message::StatusFilterSelected(choice.value)
    })
    .width(Length::Fixed(sizing::FILTER_SELECT_WIDTH))
    .padding(spacing::XS);

    let location_choices: Vec<Choice<String>> =
        std::iter::once(Choice {
            value: None,
            label: i18n.tr("filter-all-locations"),
        })
        .chain(state.locations().into_iter().map(|location| Choice {
            label: location.clone(),
            value: Some(location),
        }))
        .collect();
    let selected_location = location_choices
        .iter()
        .find(|choice| choice.value == state.filter().location)
        .cloned();
    let location_select = pick_list(location_choices, selected_location, |choice| {
        Message::LocationFilterSelected(choice.value)
    })
    .width(Length::Fixed(sizing::FILTER_SELECT_WIDTH))
    .padding(spacing::XS);

    let mut bar = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(search)
        .push(status_select)
        .push(location_select);

    if state.filter().is_active() {
        bar = bar.push(
            button(Text::new(i18n.tr("filter-clear")).size(typography::BODY))
                .on_press(Message::FiltersCleared)
                .padding(spacing::XS)
                .style(styles::button::unselected),
        );
    }

    let refresh = button(Text::new(i18n.tr("action-refresh")).size(typography::BODY))
        .on_press_maybe((!state.is_loading()).then_some(Message::Refresh))
        .padding(spacing::XS)
        .style(styles::button::unselected);

    bar = bar.push(iced::widget::Space::new().width(Length::Fill)).push(refresh);

    Container::new(bar)
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(styles::container::panel)
        .into()
}

fn status_label(status: CameraStatus, i18n: &I18n) -> String {
    match status {
        CameraStatus::Active => i18n.tr("status-active"),
        CameraStatus::Inactive => i18n.tr("status-inactive"),
    }
}

// ----------------------------------------------------------------------
// Camera table
// ----------------------------------------------------------------------

/// Relative column widths: name and health get the most room.
const COLUMNS: [(&str, u16); 7] = [
    ("column-name", 3),
    ("column-health", 3),
    ("column-location", 2),
    ("column-recorder", 2),
    ("column-tasks", 1),
    ("column-status", 1),
    ("column-actions", 2),
];

fn table<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let mut header = Row::new().spacing(spacing::XS);
    for (key, portion) in COLUMNS {
        header = header.push(
            Text::new(i18n.tr(key))
                .size(typography::BODY)
                .width(Length::FillPortion(portion)),
        );
    }
    let header = Container::new(header)
        .width(Length::Fill)
        .padding(spacing::XS)
        .style(styles::container::table_header);

    let visible = state.visible_page();
    if visible.is_empty() {
        let placeholder_key = if state.is_loading() && state.camera_count() == 0 {
            "dashboard-loading"
        } else if state.camera_count() == 0 {
            "dashboard-empty"
        } else {
            "dashboard-no-match"
        };
        let placeholder = Container::new(Text::new(i18n.tr(placeholder_key)).size(typography::BODY))
            .width(Length::Fill)
            .padding(spacing::XL)
            .align_x(alignment::Horizontal::Center);

        return Column::new()
            .spacing(spacing::XXS)
            .push(header)
            .push(placeholder)
            .into();
    }

    let mut rows = Column::new().spacing(spacing::XXS);
    for (index, camera) in visible.iter().enumerate() {
        let striped = index % 2 == 1;
        rows = rows.push(
            Container::new(table_row(state, camera, i18n))
                .width(Length::Fill)
                .padding(spacing::XS)
                .style(move |theme: &Theme| styles::container::table_row(theme, striped)),
        );
    }

    Column::new()
        .spacing(spacing::XXS)
        .push(header)
        .push(scrollable(rows).height(Length::Fill))
        .into()
}

fn table_row<'a>(state: &'a State, camera: &'a Camera, i18n: &'a I18n) -> Element<'a, Message> {
    let not_available = i18n.tr("value-not-available");

    let health: Element<'a, Message> = match &camera.health {
        Some(health) => {
            let cloud = health.cloud.as_deref().unwrap_or(&not_available);
            let device = health.device.as_deref().unwrap_or(&not_available);
            Column::new()
                .push(
                    Text::new(i18n.tr_with_args("health-cloud", &[("state", cloud)]))
                        .size(typography::BODY_SM),
                )
                .push(
                    Text::new(i18n.tr_with_args("health-device", &[("state", device)]))
                        .size(typography::BODY_SM),
                )
                .into()
        }
        None => Text::new(not_available.clone()).size(typography::BODY_SM).into(),
    };

    let recorder = camera.recorder.clone().unwrap_or_else(|| not_available.clone());
    let tasks = camera
        .tasks
        .map(|tasks| tasks.to_string())
        .unwrap_or_else(|| not_available.clone());

    let toggle = button(
        Text::new(i18n.tr(camera.status.toggle_action_key())).size(typography::BODY_SM),
    )
    .on_press_maybe(
        (!state.is_updating(camera.id)).then_some(Message::StatusToggled(camera.id)),
    )
    .padding(spacing::XXS)
    .style(styles::button::primary);

    Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(camera.name.as_str())
                .size(typography::BODY)
                .width(Length::FillPortion(3)),
        )
        .push(Container::new(health).width(Length::FillPortion(3)))
        .push(
            Text::new(camera.location.as_str())
                .size(typography::BODY)
                .width(Length::FillPortion(2)),
        )
        .push(
            Text::new(recorder)
                .size(typography::BODY)
                .width(Length::FillPortion(2)),
        )
        .push(
            Text::new(tasks)
                .size(typography::BODY)
                .width(Length::FillPortion(1)),
        )
        .push(
            Text::new(status_label(camera.status, i18n))
                .size(typography::BODY)
                .width(Length::FillPortion(1)),
        )
        .push(Container::new(toggle).width(Length::FillPortion(2)))
        .into()
}

// ----------------------------------------------------------------------
// Footer: count caption + pagination
// ----------------------------------------------------------------------

fn footer<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let count = state.filtered_count();
    let caption = Text::new(
        i18n.tr_with_args("dashboard-camera-count", &[("count", &count.to_string())]),
    )
    .size(typography::CAPTION);

    Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(caption)
        .push(iced::widget::Space::new().width(Length::Fill))
        .push(pagination(state, i18n))
        .into()
}

fn pagination<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let page_count = state.page_count();
    let current = state.pager().current();
    let filtered_len = state.filtered_count();

    let previous = button(Text::new(i18n.tr("pagination-previous")).size(typography::BODY_SM))
        .on_press_maybe(state.pager().has_previous().then_some(Message::PreviousPage))
        .padding(spacing::XXS)
        .style(styles::button::unselected);

    let next = button(Text::new(i18n.tr("pagination-next")).size(typography::BODY_SM))
        .on_press_maybe(
            state
                .pager()
                .has_next(filtered_len)
                .then_some(Message::NextPage),
        )
        .padding(spacing::XXS)
        .style(styles::button::unselected);

    let mut pages = Row::new()
        .spacing(spacing::XXS)
        .align_y(alignment::Vertical::Center)
        .push(previous);

    for page in 0..page_count {
        let style = if page == current {
            styles::button::selected
        } else {
            styles::button::unselected
        };
        pages = pages.push(
            button(Text::new((page + 1).to_string()).size(typography::BODY_SM))
                .on_press(Message::PageSelected(page))
                .padding(spacing::XXS)
                .style(style),
        );
    }

    pages = pages.push(next).push(
        Text::new(i18n.tr_with_args(
            "pagination-page-of",
            &[
                ("page", &(current + 1).to_string()),
                ("total", &page_count.to_string()),
            ],
        ))
        .size(typography::CAPTION),
    );

    pages.into()
}
