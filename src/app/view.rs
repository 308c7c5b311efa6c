// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Composes the dashboard with the toast overlay.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::dashboard;
use crate::ui::notifications::{Manager, Toast};
use iced::widget::Stack;
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub dashboard: &'a dashboard::State,
    pub notifications: &'a Manager,
}

/// Renders the application: the dashboard with toasts stacked on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let dashboard_view =
        dashboard::view::view(ctx.dashboard, ctx.i18n).map(Message::Dashboard);

    let toast_overlay =
        Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::with_children(vec![dashboard_view, toast_overlay])
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
