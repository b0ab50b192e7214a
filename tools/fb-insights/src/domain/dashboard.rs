//! Dashboard panel: four fixed metric tiles.

use crossterm::event::{KeyCode, KeyEvent};

use super::form::FocusMove;

/// A single metric tile. Values are constants until a data source exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricTile {
    pub label: &'static str,
    pub value: &'static str,
    pub delta: &'static str,
    /// Tooltip text describing the metric.
    pub help: &'static str,
}

pub const METRIC_TILES: [MetricTile; 4] = [
    MetricTile {
        label: "Total Reach",
        value: "0",
        delta: "0%",
        help: "Number of unique users who saw any of your content",
    },
    MetricTile {
        label: "Engagement Rate",
        value: "0%",
        delta: "0%",
        help: "(Likes + Comments + Shares) / Reach × 100",
    },
    MetricTile {
        label: "Post Performance",
        value: "0",
        delta: "0%",
        help: "Average engagement per post",
    },
    MetricTile {
        label: "Audience Growth",
        value: "0",
        delta: "0%",
        help: "New followers in selected period",
    },
];

/// Dashboard panel state. Only the focused tile varies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardPanel {
    focused: usize,
}

impl DashboardPanel {
    pub fn tiles(&self) -> &'static [MetricTile; 4] {
        &METRIC_TILES
    }

    pub fn focused_index(&self) -> usize {
        self.focused
    }

    /// Tile whose tooltip is shown.
    pub fn focused_tile(&self) -> &'static MetricTile {
        &METRIC_TILES[self.focused]
    }

    /// Handle a key while the panel has focus.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let movement = match key.code {
            KeyCode::Right => Some(FocusMove::Next),
            KeyCode::Left => Some(FocusMove::Prev),
            _ => FocusMove::from_key(key),
        };
        match movement {
            Some(m) => {
                self.focused = m.apply(self.focused, METRIC_TILES.len());
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_all_tiles_are_zero() {
        let panel = DashboardPanel::default();
        assert_eq!(panel.tiles().len(), 4);
        let values: Vec<_> = panel.tiles().iter().map(|t| t.value).collect();
        assert_eq!(values, ["0", "0%", "0", "0"]);
        for tile in panel.tiles() {
            assert_eq!(tile.delta, "0%");
            assert!(!tile.help.is_empty());
        }
    }

    #[test]
    fn test_tile_labels_in_order() {
        let labels: Vec<_> = METRIC_TILES.iter().map(|t| t.label).collect();
        assert_eq!(
            labels,
            ["Total Reach", "Engagement Rate", "Post Performance", "Audience Growth"]
        );
    }

    #[test]
    fn test_focus_cycles_tiles() {
        let mut panel = DashboardPanel::default();
        assert_eq!(panel.focused_tile().label, "Total Reach");
        assert!(panel.handle_key(KeyEvent::new(KeyCode::Left, KeyModifiers::NONE)));
        assert_eq!(panel.focused_tile().label, "Audience Growth");
        assert!(panel.handle_key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE)));
        assert_eq!(panel.focused_index(), 0);
        assert!(!panel.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)));
    }
}
