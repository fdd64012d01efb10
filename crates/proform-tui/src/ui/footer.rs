use crate::ui::app::{AppMode, Toast};
use proform_core::theme::{Element, Theme};
use ratatui::{
    prelude::{Alignment, Frame, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub fn render_footer(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    mode: AppMode,
    toast: Option<Toast>,
) {
    let footer_block = Block::default()
        .borders(Borders::ALL)
        .style(theme.ratatui_style(Element::Border));

    let inner_area = footer_block.inner(area);

    let content = match toast {
        Some(toast) => Line::from(Span::styled(toast.copy(), toast_style(theme, toast)))
            .alignment(Alignment::Center),
        None => hints(theme, mode),
    };

    let footer_paragraph = Paragraph::new(content).style(theme.ratatui_style(Element::Text));

    frame.render_widget(footer_block, area);
    frame.render_widget(footer_paragraph, inner_area);
}

fn toast_style(theme: &Theme, toast: Toast) -> ratatui::style::Style {
    match toast {
        Toast::Pending => theme.warning_style(),
        Toast::Success => theme.ratatui_style(Element::Accent),
        Toast::Failure | Toast::AvatarReadFailed => theme.error_style(),
    }
}

fn hints(theme: &Theme, mode: AppMode) -> Line<'static> {
    match mode {
        AppMode::EditingField => Line::from(Span::styled(
            "[ENTER] Apply | [ESC] Cancel",
            theme.ratatui_style(Element::Inactive),
        ))
        .alignment(Alignment::Center),
        AppMode::AvatarPath => Line::from(Span::styled(
            "[ENTER] Encode | [ESC] Cancel",
            theme.ratatui_style(Element::Inactive),
        ))
        .alignment(Alignment::Center),
        AppMode::Form => Line::from(vec![
            Span::raw("[E]"),
            Span::styled("dit", theme.ratatui_style(Element::Inactive)),
            Span::raw(" | "),
            Span::raw("[S]"),
            Span::styled("ave", theme.ratatui_style(Element::Inactive)),
            Span::raw(" | "),
            Span::raw("[U]"),
            Span::styled("pload avatar", theme.ratatui_style(Element::Inactive)),
            Span::raw(" | "),
            Span::raw("[T]"),
            Span::styled("heme", theme.ratatui_style(Element::Inactive)),
            Span::raw(" | "),
            Span::raw("[Q]"),
            Span::styled("uit", theme.ratatui_style(Element::Inactive)),
            Span::raw(" | "),
            Span::styled("Reset password: /recovery", theme.ratatui_style(Element::Inactive)),
        ])
        .alignment(Alignment::Center),
    }
}
