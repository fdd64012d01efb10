use crate::ui::app::AppMode;
use proform_core::{
    theme::{Element, Theme},
    EditSession, ProfileField, ProfileForm,
};
use ratatui::{
    prelude::{Constraint, Direction, Frame, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

#[allow(clippy::too_many_arguments)]
pub fn render_form(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    form: &ProfileForm,
    session: &EditSession,
    selection: ProfileField,
    mode: AppMode,
    edit_buffer: &str,
) {
    let block = Block::new()
        .title("Personal details")
        .borders(Borders::ALL)
        .style(theme.ratatui_style(Element::Border));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Avatar
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Job Title
            Constraint::Length(1), // First Name
            Constraint::Length(1), // Last Name
            Constraint::Length(1), // Email
            Constraint::Length(1), // Phone Number
            Constraint::Length(1), // About
            Constraint::Min(0),
        ])
        .split(inner_area);

    frame.render_widget(
        Paragraph::new(avatar_line(theme, form, session)),
        chunks[0],
    );

    for (row, field) in ProfileField::ALL.into_iter().enumerate() {
        let is_selected = selection == field;
        let is_editing = is_selected && mode == AppMode::EditingField;

        let value = if is_editing {
            edit_buffer.to_string()
        } else {
            display_value(form, session, field)
        };

        let line = field_line(
            theme,
            field,
            &value,
            session.errors().message(field),
            is_selected,
            is_editing,
        );
        frame.render_widget(Paragraph::new(line), chunks[row + 2]);
    }

    if mode == AppMode::AvatarPath {
        render_avatar_prompt(frame, area, theme, edit_buffer);
    }
}

fn field_line<'a>(
    theme: &Theme,
    field: ProfileField,
    value: &'a str,
    error: Option<&'static str>,
    is_selected: bool,
    is_editing: bool,
) -> Line<'a> {
    let label = if field.is_required() {
        format!("{:<14}*", field.label())
    } else {
        format!("{:<15}", field.label())
    };

    let value_style = if is_selected {
        theme.highlight_style()
    } else {
        theme.text_style()
    };

    let display_value = if is_editing {
        format!("{}_", value) // Add cursor indicator when editing
    } else {
        value.to_owned()
    };

    let mut spans = vec![
        Span::styled(label, theme.warning_style().add_modifier(Modifier::BOLD)),
        Span::raw(" "),
        Span::styled(display_value, value_style),
    ];

    if let Some(message) = error {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(message, theme.error_style()));
    }

    Line::from(spans)
}

/// Email and phone render masked while locked, a privacy-on-view
/// affordance only; the stored values are untouched.
fn display_value(form: &ProfileForm, session: &EditSession, field: ProfileField) -> String {
    let value = form.field(field);
    let masked = session.is_locked()
        && matches!(field, ProfileField::Email | ProfileField::PhoneNumber);
    if masked {
        "\u{2022}".repeat(value.chars().count())
    } else {
        value.to_string()
    }
}

fn avatar_line<'a>(theme: &Theme, form: &'a ProfileForm, session: &EditSession) -> Line<'a> {
    let label = Span::styled(
        format!("{:<15}", "Avatar"),
        theme.warning_style().add_modifier(Modifier::BOLD),
    );

    let value = match (session.pending_avatar(), form.avatar.as_deref()) {
        (Some(pending), _) => Span::styled(
            format!("new image selected ({})", summarize_data_url(pending)),
            theme.ratatui_style(Element::Accent),
        ),
        (None, Some(remote)) if !remote.is_empty() => {
            Span::styled("stored image", theme.text_style())
        }
        _ => Span::styled("none", theme.ratatui_style(Element::Inactive)),
    };

    Line::from(vec![label, Span::raw(" "), value])
}

fn summarize_data_url(encoded: &str) -> String {
    let mime = encoded
        .strip_prefix("data:")
        .and_then(|rest| rest.split(';').next())
        .unwrap_or("image");
    format!("{}, {} bytes encoded", mime, encoded.len())
}

fn render_avatar_prompt(frame: &mut Frame, area: Rect, theme: &Theme, edit_buffer: &str) {
    let prompt_height = 3;
    let prompt_area = Rect::new(
        area.x + 2,
        area.y + area.height.saturating_sub(prompt_height + 1),
        area.width.saturating_sub(4),
        prompt_height,
    );

    let block = Block::new()
        .title("Upload avatar - path to image file")
        .borders(Borders::ALL)
        .style(theme.warning_style());

    let inner = block.inner(prompt_area);
    frame.render_widget(ratatui::widgets::Clear, prompt_area);
    frame.render_widget(block, prompt_area);

    let input = Paragraph::new(format!("{}_", edit_buffer)).style(theme.text_style());
    frame.render_widget(input, inner);
}
