//! The example card: a titled container with a fixed caption.
//!
//! This is the piece a new page would copy and rename. It holds exactly one
//! input (the title) and renders the same tree every time: a padded, rounded
//! container with a bold heading and a gray caption line.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect, Size},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Caption shown under the heading. Independent of the title.
pub(crate) const CAPTION: &str = "Dies ist eine Beispielkomponente.";

/// A presentational card with a single required `title` input.
///
/// The card owns no state besides the title it was constructed with, handles
/// no events and performs no I/O. Rendering the same card into the same area
/// twice produces identical buffers.
#[derive(Clone, Debug)]
pub(crate) struct ExampleCard {
    title: String,
}

impl ExampleCard {
    pub(crate) fn new<T: Into<String>>(title: T) -> Self {
        Self {
            title: title.into(),
        }
    }

    #[allow(dead_code)]
    pub(crate) fn title(&self) -> &str {
        &self.title
    }

    /// Natural footprint of the card: the wider of title and caption plus
    /// one cell of padding and one border cell on each side, and three text
    /// rows (heading, spacer, caption) plus the vertical chrome.
    pub(crate) fn desired_size(&self) -> Size {
        let text_width = self.title.width().max(CAPTION.width());
        let width = u16::try_from(text_width)
            .unwrap_or(u16::MAX)
            .saturating_add(4);
        Size::new(width, 7)
    }
}

impl Widget for &ExampleCard {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .padding(Padding::uniform(1))
            .style(Style::default().bg(Color::White).fg(Color::Black));
        let inner = block.inner(area);
        block.render(area, buf);

        let [heading, _, caption] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(inner);

        // The title goes out exactly as it came in. Anything that does not
        // fit the inner area is clipped by the buffer, not rewritten.
        Paragraph::new(self.title.as_str())
            .style(Style::default().add_modifier(Modifier::BOLD))
            .render(heading, buf);
        Paragraph::new(CAPTION)
            .style(Style::default().fg(Color::DarkGray))
            .render(caption, buf);
    }
}

#[cfg(test)]
mod test {
    use insta::assert_snapshot;
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;

    fn render(title: &str, width: u16, height: u16) -> Buffer {
        let card = ExampleCard::new(title);
        let mut buf = Buffer::empty(Rect::new(0, 0, width, height));
        let area = buf.area;
        Widget::render(&card, area, &mut buf);
        buf
    }

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf.cell((x, y)).unwrap().symbol())
            .collect()
    }

    /// Text of a row with the border and padding columns stripped.
    fn inner_text(buf: &Buffer, y: u16) -> String {
        let width = buf.area.width as usize;
        row(buf, y)
            .chars()
            .skip(2)
            .take(width.saturating_sub(4))
            .collect::<String>()
            .trim_end()
            .to_string()
    }

    #[test]
    fn title_is_rendered_verbatim() {
        let buf = render("Dashboard", 40, 7);
        assert_eq!(inner_text(&buf, 2), "Dashboard");
    }

    #[test]
    fn caption_is_fixed_and_title_independent() {
        for title in ["Dashboard", "", "something else entirely"] {
            let buf = render(title, 40, 7);
            assert_eq!(inner_text(&buf, 4), CAPTION);
        }
    }

    #[test]
    fn empty_title_renders_empty_heading() {
        let buf = render("", 40, 7);
        assert_eq!(inner_text(&buf, 2), "");
    }

    #[test]
    fn markup_in_title_stays_plain_text() {
        let buf = render("<script>alert(1)</script>", 40, 7);
        assert_eq!(inner_text(&buf, 2), "<script>alert(1)</script>");
    }

    #[test]
    fn rendering_twice_gives_identical_buffers() {
        let first = render("Dashboard", 40, 7);
        let second = render("Dashboard", 40, 7);
        assert_eq!(first, second);
    }

    #[test]
    fn undersized_areas_do_not_panic() {
        for (w, h) in [(0, 0), (1, 1), (3, 2), (5, 3), (40, 1)] {
            render("Dashboard", w, h);
        }
    }

    #[test]
    fn desired_size_tracks_widest_line() {
        // Caption (33 cells) is wider than the title here.
        let card = ExampleCard::new("Dashboard");
        assert_eq!(card.desired_size(), Size::new(37, 7));

        let long = "a title that is wider than the fixed caption";
        let card = ExampleCard::new(long);
        assert_eq!(card.desired_size(), Size::new(long.len() as u16 + 4, 7));
    }

    #[test]
    fn reference_layout() {
        let card = ExampleCard::new("Dashboard");
        let mut terminal = Terminal::new(TestBackend::new(40, 7)).unwrap();
        terminal
            .draw(|f| f.render_widget(&card, f.area()))
            .unwrap();
        assert_snapshot!(terminal.backend(), @r#"
        "╭──────────────────────────────────────╮"
        "│                                      │"
        "│ Dashboard                            │"
        "│                                      │"
        "│ Dies ist eine Beispielkomponente.    │"
        "│                                      │"
        "╰──────────────────────────────────────╯"
        "#);
    }
}
