// SPDX-License-Identifier: MPL-2.0
//! Control panel drawn underneath the toast overlay.

use super::Message;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::notifications::{Kind, Position, QueueStrategy, ToastStage};
use iced::widget::{button, pick_list, toggler, Column, Container, Row, Stack, Text};
use iced::{alignment::Horizontal, Element, Length};

pub struct ViewContext<'a> {
    pub stage: &'a ToastStage,
    pub position: Position,
    pub strategy: QueueStrategy,
    pub sound: bool,
    pub on_screen: usize,
    pub undo_count: usize,
    pub last_export: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let kinds = Row::new()
        .spacing(spacing::XS)
        .push(button(Text::new("Info")).on_press(Message::Show(Kind::Info)))
        .push(button(Text::new("Success")).on_press(Message::Show(Kind::Success)))
        .push(button(Text::new("Warning")).on_press(Message::Show(Kind::Warning)))
        .push(button(Text::new("Error")).on_press(Message::Show(Kind::Error)))
        .push(button(Text::new("Cart")).on_press(Message::Show(Kind::custom("cart"))));

    let extras = Row::new()
        .spacing(spacing::XS)
        .push(button(Text::new("With actions")).on_press(Message::ShowWithActions))
        .push(button(Text::new("Highlighted")).on_press(Message::ShowHighlighted))
        .push(button(Text::new("Dismiss all")).on_press(Message::DismissAll))
        .push(button(Text::new("Export diagnostics")).on_press(Message::ExportDiagnostics));

    let pickers = Row::new()
        .spacing(spacing::MD)
        .push(pick_list(
            &Position::ALL[..],
            Some(ctx.position),
            Message::SelectPosition,
        ))
        .push(pick_list(
            &QueueStrategy::ALL[..],
            Some(ctx.strategy),
            Message::SelectStrategy,
        ))
        .push(
            toggler(ctx.sound)
                .label("Sound")
                .on_toggle(Message::ToggleSound),
        );

    let mut status = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(format!("On screen: {}", ctx.on_screen)).size(typography::BODY_SM))
        .push(Text::new(format!("Undo pressed: {}", ctx.undo_count)).size(typography::BODY_SM));
    if let Some(path) = ctx.last_export {
        status = status.push(Text::new(format!("Diagnostics: {path}")).size(typography::BODY_SM));
    }

    let controls = Container::new(
        Column::new()
            .spacing(spacing::MD)
            .align_x(Horizontal::Center)
            .push(Text::new("Notifications").size(typography::GLYPH))
            .push(kinds)
            .push(extras)
            .push(pickers)
            .push(status),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .center_x(Length::Fill)
    .center_y(Length::Fill);

    Stack::new()
        .push(controls)
        .push(ctx.stage.view().map(Message::Toast))
        .into()
}
