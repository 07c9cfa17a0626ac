use ratatui::layout::{Constraint, Direction, Layout, Rect};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutTier {
    Wide,   // >=90 cols: sidebar listing beside the main pane
    Narrow, // <90 cols: sidebar only on the welcome screen
}

impl LayoutTier {
    pub fn from_area(area: Rect) -> Self {
        if area.width >= 90 {
            LayoutTier::Wide
        } else {
            LayoutTier::Narrow
        }
    }
}

pub struct AppLayout {
    pub header: Rect,
    pub notice: Option<Rect>,
    pub sidebar: Option<Rect>,
    pub main: Rect,
    pub footer: Rect,
    pub tier: LayoutTier,
}

impl AppLayout {
    /// Split the frame. `show_notice` reserves a banner row; `focus_main`
    /// hands the whole body to the main pane on narrow terminals.
    pub fn new(area: Rect, show_notice: bool, focus_main: bool) -> Self {
        let tier = LayoutTier::from_area(area);

        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(if show_notice { 1 } else { 0 }),
                Constraint::Min(6),
                Constraint::Length(2),
            ])
            .split(area);
        let notice = show_notice.then_some(vertical[1]);

        let (sidebar, main) = match (tier, focus_main) {
            (LayoutTier::Narrow, true) => (None, vertical[2]),
            (LayoutTier::Narrow, false) => (Some(vertical[2]), Rect::default()),
            (LayoutTier::Wide, _) => {
                let horizontal = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Length(32), Constraint::Min(40)])
                    .split(vertical[2]);
                (Some(horizontal[0]), horizontal[1])
            }
        };

        Self {
            header: vertical[0],
            notice,
            sidebar,
            main,
            footer: vertical[3],
            tier,
        }
    }
}

pub fn pack_hint_lines(hints: &[&str], width: usize) -> Vec<String> {
    if width == 0 || hints.is_empty() {
        return Vec::new();
    }

    let prefix = " ";
    let separator = "  ";
    let mut out: Vec<String> = Vec::new();
    let mut current = prefix.to_string();
    let mut has_hint = false;

    for hint in hints.iter().filter(|h| !h.is_empty()) {
        let candidate = if has_hint {
            format!("{current}{separator}{hint}")
        } else {
            format!("{current}{hint}")
        };
        if candidate.chars().count() <= width {
            current = candidate;
        } else {
            if has_hint {
                out.push(current);
            }
            current = format!("{prefix}{hint}");
        }
        has_hint = true;
    }

    if has_hint {
        out.push(current);
    }
    out
}

pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let left = area.x.saturating_add(area.width.saturating_sub(w) / 2);
    let top = area.y.saturating_add(area.height.saturating_sub(h) / 2);
    Rect::new(left, top, w, h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_layout_has_sidebar_and_main() {
        let layout = AppLayout::new(Rect::new(0, 0, 120, 40), true, true);
        assert_eq!(layout.tier, LayoutTier::Wide);
        assert!(layout.sidebar.is_some());
        assert_eq!(layout.notice.map(|r| r.height), Some(1));
        assert!(layout.main.width >= 40);
    }

    #[test]
    fn test_narrow_layout_focus() {
        let area = Rect::new(0, 0, 60, 30);
        let reading = AppLayout::new(area, false, true);
        assert!(reading.sidebar.is_none());
        assert_eq!(reading.main.width, 60);
        let listing = AppLayout::new(area, false, false);
        assert!(listing.sidebar.is_some());
        assert!(listing.notice.is_none());
    }

    #[test]
    fn test_pack_hint_lines_wraps() {
        let lines = pack_hint_lines(&["[q] Quit", "[Tab] Next tab", "[?] Help"], 20);
        assert_eq!(lines, vec![" [q] Quit", " [Tab] Next tab", " [?] Help"]);
        let one = pack_hint_lines(&["[q] Quit", "[n] Next"], 80);
        assert_eq!(one, vec![" [q] Quit  [n] Next"]);
    }

    #[test]
    fn test_centered_rect_clamps() {
        let r = centered_rect(50, 10, Rect::new(0, 0, 40, 8));
        assert_eq!(r, Rect::new(0, 0, 40, 8));
        let r = centered_rect(10, 4, Rect::new(0, 0, 30, 10));
        assert_eq!(r, Rect::new(10, 3, 10, 4));
    }
}
