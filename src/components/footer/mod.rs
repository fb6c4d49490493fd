mod groups;
mod types;

use crate::app::state::AppState;
use crate::theme::Theme;
pub use types::{FooterGroup, FooterItem};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Footer<'a> {
    pub state: &'a AppState<'a>,
    pub theme: &'a Theme,
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let state = self.state;

        let status_span = if let Some(msg) = &state.status_message {
            Span::styled(format!("  {msg}  "), theme.status_info)
        } else {
            let session = state.timer.session();
            Span::styled(
                format!("  {}  ", session.status.label().to_uppercase()),
                crate::components::header::status_style(theme, session.status),
            )
        };
        let mut spans = vec![status_span, Span::raw("  ")];

        let available_width = usize::from(area.width.saturating_sub(4)); // Margin
        let mut current_width = spans.iter().map(Span::width).sum::<usize>();

        for group in groups::get_groups(state) {
            let Some(first_item) = group.items.first() else {
                continue;
            };

            // Check if we can fit at least the first item of the group
            let first_item_width = first_item.key.len() + first_item.desc.len() + 4;
            if current_width + first_item_width > available_width {
                break;
            }

            // Group names only when there is room to spare
            if area.width > 100 {
                let group_label =
                    Span::styled(format!("{}: ", group.name), theme.footer_group_name);
                if current_width + group_label.width() + first_item_width < available_width {
                    current_width += group_label.width();
                    spans.push(group_label);
                }
            }

            for item in group.items {
                let key_str = format!(" {} ", item.key);
                let desc_str = format!(" {} ", item.desc);

                let item_width = Span::raw(&key_str).width() + desc_str.len();
                if current_width + item_width + 1 > available_width {
                    break;
                }

                let (key_style, val_style) = if item.highlighted {
                    (
                        theme.header_active,
                        theme.header_active.add_modifier(Modifier::DIM),
                    )
                } else {
                    (theme.footer_segment_key, theme.footer_segment_val)
                };

                spans.push(Span::styled(key_str, key_style));
                spans.push(Span::styled(desc_str, val_style));
                spans.push(Span::raw(" "));
                current_width += item_width + 1;
            }
            spans.push(Span::raw("  "));
            current_width += 2;
        }

        Paragraph::new(Line::from(spans))
            .style(theme.footer)
            .render(area, buf);
    }
}
