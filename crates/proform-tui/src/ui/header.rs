use proform_core::{
    theme::{Element, Theme},
    EditSession, ProfileForm,
};
use ratatui::{
    prelude::{Alignment, Frame, Rect},
    text::Span,
    widgets::{block::Title, Block, Borders, Paragraph},
};

pub fn render_header(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    form: Option<&ProfileForm>,
    session: &EditSession,
) {
    let title = Title::from(" Proform v0.1.0 ").alignment(Alignment::Left);

    let (status_text, status_element) = build_status(form, session);
    let status_span = Span::styled(status_text, theme.ratatui_style(status_element));

    let header_paragraph = Paragraph::new(status_span)
        .style(theme.ratatui_style(Element::Text))
        .alignment(Alignment::Left)
        .block(
            Block::new()
                .borders(Borders::ALL)
                .title(title)
                .style(theme.ratatui_style(Element::Text)),
        );

    frame.render_widget(header_paragraph, area);
}

fn build_status(form: Option<&ProfileForm>, session: &EditSession) -> (String, Element) {
    let Some(form) = form else {
        return ("Settings :: loading".to_string(), Element::Info);
    };

    let name = match (form.first_name.trim(), form.last_name.trim()) {
        ("", "") => "unnamed".to_string(),
        (first, "") => first.to_string(),
        ("", last) => last.to_string(),
        (first, last) => format!("{} {}", first, last),
    };

    let avatar_note = if session.pending_avatar().is_some() {
        " :: [NEW AVATAR]"
    } else {
        ""
    };

    if session.is_locked() {
        (format!("Settings :: {} :: LOCKED{}", name, avatar_note), Element::Inactive)
    } else {
        (format!("Settings :: {} :: EDITING{}", name, avatar_note), Element::Accent)
    }
}
